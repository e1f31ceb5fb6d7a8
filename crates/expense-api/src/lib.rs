//! # Expense API
//! 
//! HTTP handlers, error mapping, application state, and routing.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
