//! # Expense Core - Domain Module
//! 
//! Domain entities for the group expense application.

pub mod group;

pub use group::{CreateGroupInput, Group, NewGroup, GROUP_FIELDS_REQUIRED};
