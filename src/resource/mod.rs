use std::sync::Arc;

use crate::backend::DataBackend;

pub mod root;
pub mod todo;
pub mod user;

/// Router state: the backend owning the connection pool
pub type AppState = Arc<dyn DataBackend>;
