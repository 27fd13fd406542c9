pub mod error;
pub mod router;
pub mod routes;

use std::sync::Arc;

use crate::database::ActivityDirectory;

/// Shared handler state. Built once at startup and cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<ActivityDirectory>,
}

impl AppState {
    pub fn new(directory: ActivityDirectory) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }
}

pub use router::build_router;
