use std::path::PathBuf;

use crate::domain::ports::SharedStore;

/// Shared by every worker; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub uploads_dir: PathBuf,
}

impl AppState {
    pub fn new(store: SharedStore, uploads_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            uploads_dir: uploads_dir.into(),
        }
    }
}
