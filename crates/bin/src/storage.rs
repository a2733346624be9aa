//! Store construction and persistence wiring.

use std::path::PathBuf;
use std::sync::Arc;

use notehub::store::MemoryStore;

use crate::cli::ServeArgs;

/// File name of the persisted store snapshot inside the data directory.
const STORE_FILE: &str = "notehub.json";

/// Resolve the persistence file path, if a data directory was configured.
pub fn store_path(args: &ServeArgs) -> Option<PathBuf> {
    args.data_dir.as_ref().map(|dir| dir.join(STORE_FILE))
}

/// Create the store, loading persisted state when a data directory is
/// configured. A load failure falls back to a fresh store rather than
/// refusing to start.
pub fn create_store(args: &ServeArgs) -> Result<Arc<MemoryStore>, Box<dyn std::error::Error>> {
    match store_path(args) {
        Some(path) => {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            match MemoryStore::load_from_file(&path) {
                Ok(store) => {
                    tracing::info!(
                        "Loaded store from {} ({} users, {} notes)",
                        path.display(),
                        store.user_count(),
                        store.note_count()
                    );
                    Ok(Arc::new(store))
                }
                Err(e) => {
                    tracing::warn!("Failed to load store from {}: {e}", path.display());
                    tracing::warn!("Starting with a fresh store");
                    Ok(Arc::new(MemoryStore::new()))
                }
            }
        }
        None => {
            tracing::info!("Using in-memory store without persistence");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
