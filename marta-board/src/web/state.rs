//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedMartaClient;
use crate::directory::StationDirectory;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached MARTA feed client
    pub marta: Arc<CachedMartaClient>,

    /// Per-line station listings
    pub directory: StationDirectory,
}

impl AppState {
    /// Create a new app state.
    pub fn new(marta: CachedMartaClient, directory: StationDirectory) -> Self {
        Self {
            marta: Arc::new(marta),
            directory,
        }
    }
}
