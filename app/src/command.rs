use common::models::SortField;

/// A user action typed at the prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Fill the search box and run the search. Text is kept verbatim.
    Search(String),
    /// Press the sort button for a column.
    Sort(SortField),
    /// Redraw without changing anything.
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  search <text>   filter by name or symbol (empty text clears the filter)
  sort cap        toggle sort by market cap
  sort change     toggle sort by 24h % change
  help            show this help
  quit            leave (end of input also leaves, dropping a fetch still in flight)";

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_start();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

        match word {
            "" => Ok(Command::Show),
            "search" | "find" => Ok(Command::Search(rest.to_string())),
            "sort" => match rest.trim() {
                "" => Err("sort needs a column, e.g. `sort cap` or `sort change`".to_string()),
                column => Ok(Command::Sort(SortField::parse(column))),
            },
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("unknown command `{}`, type `help`", other)),
        }
    }
}
