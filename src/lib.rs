// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::FeedbackStore;

pub mod config;
pub mod constants;
pub mod errors;
pub mod feedback;
pub mod handlers;
pub mod store;
pub mod transport;

pub use errors::HandlerError;

/// Application state to be shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
    /// Persistence for feedback records
    pub store: Arc<dyn FeedbackStore>,
}

impl AppState {
    pub fn new(config: ServerConfig, store: Arc<dyn FeedbackStore>) -> Self {
        Self { config, store }
    }
}
