mod add;
mod init;
mod list;
mod mutate;
mod query;
mod serve;
mod show;

pub use add::handle_add;
pub use init::handle_init;
pub use list::{handle_authors, handle_books};
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use serve::handle_serve;
pub use show::handle_show;

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ShelfConfig;
use crate::error::Result;
use crate::store::{Catalog, Records, seed_records};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: ShelfConfig,
    pub root: PathBuf,
    pub catalog: Arc<Catalog>,
}

impl CommandContext {
    /// Build the catalog from the configured records file, or from the
    /// built-in seed when no file exists yet.
    pub fn new(config: ShelfConfig, root: PathBuf) -> Result<Self> {
        let records_path = config.records_path(&root);
        let records = if records_path.exists() {
            tracing::debug!(path = %records_path.display(), "loading records file");
            Records::load(&records_path)?
        } else {
            tracing::debug!("no records file found, using built-in seed");
            seed_records()
        };
        let catalog = Arc::new(Catalog::new(records, config.catalog.id_length));
        Ok(Self {
            config,
            root,
            catalog,
        })
    }
}
