//! Group repository trait (port)

use async_trait::async_trait;
use crate::domain::{Group, NewGroup};
use crate::error::DomainError;

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Inserts the group and returns the stored row with its assigned id and timestamps.
    async fn create(&self, group: &NewGroup) -> Result<Group, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Group>, DomainError>;
    /// Newest first.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Group>, DomainError>;
}
