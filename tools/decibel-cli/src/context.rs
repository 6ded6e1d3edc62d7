//! Shared command context.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use decibel_commerce::{cart::CartSession, content::ContentStore};
use decibel_kv::FileStore;

use crate::config::CliConfig;
use crate::output::Output;

/// Default data directory in the working directory.
const DEFAULT_DATA_DIR: &str = ".decibel";

/// Everything a command needs: the opened store and the output handler.
pub struct Context {
    storage: Arc<FileStore>,
    pub output: Arc<Output>,
}

impl Context {
    /// Open the data directory (flag > config file > default) and build
    /// the context.
    pub fn open(flag_dir: Option<PathBuf>, config: &CliConfig, output: Output) -> Result<Self> {
        let dir = flag_dir
            .or_else(|| config.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let storage = FileStore::open(&dir)
            .with_context(|| format!("Failed to open data directory: {}", dir.display()))?;
        let output = Arc::new(output);
        output.debug(&format!("data directory: {}", dir.display()));

        Ok(Self {
            storage: Arc::new(storage),
            output,
        })
    }

    /// Hydrate the content/product store.
    pub fn content_store(&self) -> ContentStore {
        ContentStore::hydrate(self.storage.clone(), self.output.clone())
    }

    /// Hydrate the cart session.
    pub fn cart_session(&self) -> CartSession {
        CartSession::hydrate(self.storage.clone(), self.output.clone())
    }
}
