//! # Expense Web
//! 
//! Server-rendered UI components. Import them from [`components`].

pub mod components;
pub mod error;
pub mod layout;
pub mod renderer;
pub mod session;

pub use error::WebError;
pub use renderer::{Component, Renderer};
pub use session::SessionInfo;
