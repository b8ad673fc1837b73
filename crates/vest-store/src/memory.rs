use async_trait::async_trait;
use vest_ledger::{AccessFailure, LedgerSource};

/// A ledger source backed by a fixed string, or by a fixed failure.
#[derive(Clone, Debug)]
pub struct InMemoryLedgerSource {
    content: Result<String, String>,
}

impl InMemoryLedgerSource {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            content: Ok(raw.into()),
        }
    }

    /// A source whose every fetch fails with `reason`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            content: Err(reason.into()),
        }
    }
}

impl Default for InMemoryLedgerSource {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[async_trait]
impl LedgerSource for InMemoryLedgerSource {
    async fn fetch_raw_ledger(&self) -> Result<String, AccessFailure> {
        self.content
            .clone()
            .map_err(AccessFailure::Unavailable)
    }
}
