use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;
use vest_ledger::{AccessFailure, LedgerSource};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads the raw ledger from a file on disk.
///
/// The file is opened, read in full, and closed within a single fetch; no
/// handle outlives the call.
#[derive(Clone, Debug)]
pub struct FileLedgerSource {
    path: PathBuf,
}

impl FileLedgerSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LedgerSource for FileLedgerSource {
    async fn fetch_raw_ledger(&self) -> Result<String, AccessFailure> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| AccessFailure::Io {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "ledger file read");

        let text = String::from_utf8(bytes).map_err(|_| AccessFailure::Encoding {
            path: self.path.clone(),
        })?;
        match text.strip_prefix(BYTE_ORDER_MARK) {
            Some(rest) => Ok(rest.to_string()),
            None => Ok(text),
        }
    }
}
