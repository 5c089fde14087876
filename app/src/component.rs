use crate::command::{Command, HELP};
use crate::view::{self, Status};
use chrono::Utc;
use common::{models::CoinRecord, Result};
use connectors::MarketDataSource;
use std::io::{self, Write};
use store::ViewStateStore;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error, info};

/// Whether the host should keep the component mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The market table: view state plus what the screen needs around it.
pub struct MarketTable {
    store: ViewStateStore,
    status: Status,
    show_images: bool,
    notice: Option<String>,
}

impl MarketTable {
    pub fn new(show_images: bool) -> Self {
        Self {
            store: ViewStateStore::new(),
            status: Status::Loading,
            show_images,
            notice: None,
        }
    }

    /// Apply the fetch outcome. Failures are logged and otherwise leave the
    /// table as it was.
    pub fn on_fetch(&mut self, result: Result<Vec<CoinRecord>>) {
        match result {
            Ok(records) => {
                info!("Loaded {} coins", records.len());
                self.store.set_full_set(records);
                self.status = Status::Ready {
                    fetched_at: Utc::now(),
                };
            }
            Err(e) => {
                error!("Failed to fetch market data: {}", e);
                if self.store.is_empty() {
                    self.status = Status::Unavailable;
                }
            }
        }
    }

    pub fn on_input(&mut self, line: &str) -> Flow {
        match Command::parse(line) {
            Ok(Command::Search(text)) => self.store.set_query(text),
            Ok(Command::Sort(field)) => self.store.toggle_sort(field),
            Ok(Command::Show) => {}
            Ok(Command::Help) => self.notice = Some(HELP.to_string()),
            Ok(Command::Quit) => return Flow::Quit,
            Err(hint) => {
                debug!("Rejected input {:?}", line);
                self.notice = Some(hint);
            }
        }
        Flow::Continue
    }

    pub fn store(&self) -> &ViewStateStore {
        &self.store
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Draw the current frame followed by any one-shot notice and the prompt.
    pub fn render<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        out.write_all(view::render(&self.store, &self.status, self.show_images).as_bytes())?;
        if let Some(notice) = self.notice.take() {
            writeln!(out, "{}", notice)?;
        }
        write!(out, "> ")?;
        out.flush()
    }
}

/// Mount the table, start its single fetch and serve input until the user
/// quits or input ends.
///
/// Events are handled one at a time on the calling task. Leaving the loop
/// drops a fetch that is still in flight, so a late response is never applied.
pub async fn run<S, R, W>(
    source: &S,
    input: R,
    out: &mut W,
    show_images: bool,
) -> io::Result<MarketTable>
where
    S: MarketDataSource + ?Sized,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut table = MarketTable::new(show_images);
    let mut lines = input.lines();

    let fetch = source.fetch_top_markets();
    tokio::pin!(fetch);
    let mut fetch_pending = true;

    table.render(out)?;

    loop {
        tokio::select! {
            biased;

            result = &mut fetch, if fetch_pending => {
                fetch_pending = false;
                table.on_fetch(result);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if table.on_input(&line) == Flow::Quit {
                    break;
                }
            }
        }

        table.render(out)?;
    }

    if fetch_pending {
        info!("Unmounting with fetch still in flight, dropping it");
    }
    writeln!(out)?;

    Ok(table)
}
