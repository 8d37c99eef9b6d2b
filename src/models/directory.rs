//! Accumulates users from independently settling page requests.

use crate::error::FetchError;
use crate::models::user::{sort_descending, User};

/// How one page request settled.
#[derive(Clone, Debug, PartialEq)]
pub enum PageOutcome {
    Loaded { page: usize, records: Vec<User> },
    Failed { page: usize, error: FetchError },
}

impl PageOutcome {
    pub fn from_result(page: usize, result: Result<Vec<User>, FetchError>) -> Self {
        match result {
            Ok(records) => Self::Loaded { page, records },
            Err(error) => Self::Failed { page, error },
        }
    }

    pub fn page(&self) -> usize {
        match self {
            Self::Loaded { page, .. } | Self::Failed { page, .. } => *page,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageFailure {
    pub page: usize,
    pub error: FetchError,
}

/// The accumulator behind the users table.
///
/// Records stay sorted by id, highest first, after every settlement. Once
/// closed, further settlements are ignored.
#[derive(Debug, Default)]
pub struct Directory {
    records: Vec<User>,
    failures: Vec<PageFailure>,
    settled: usize,
    closed: bool,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one settlement in. Returns whether anything visible changed.
    pub fn settle(&mut self, outcome: PageOutcome) -> bool {
        if self.closed {
            log::debug!("ignoring page {} settled after teardown", outcome.page());
            return false;
        }
        self.settled += 1;

        match outcome {
            PageOutcome::Loaded { page, records } => {
                log::debug!("page {} loaded {} users", page, records.len());
                self.records.extend(records);
            }
            PageOutcome::Failed { page, error } => {
                if error.is_aborted() {
                    log::debug!("page {}: {}", page, error);
                } else {
                    log::warn!("page {} failed: {}", page, error);
                }
                self.failures.push(PageFailure { page, error });
            }
        }

        sort_descending(&mut self.records);
        true
    }

    /// Stops accepting settlements.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn records(&self) -> &[User] {
        &self.records
    }

    pub fn failures(&self) -> &[PageFailure] {
        &self.failures
    }

    pub fn settled(&self) -> usize {
        self.settled
    }
}
