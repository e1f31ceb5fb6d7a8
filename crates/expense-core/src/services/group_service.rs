// ============================================================================
// Expense Core - Group Service
// File: crates/expense-core/src/services/group_service.rs
// ============================================================================
//! Group creation and lookup

use std::sync::Arc;
use tracing::{info, warn};

use expense_shared::Pagination;

use crate::domain::{CreateGroupInput, Group, NewGroup};
use crate::error::DomainError;
use crate::repositories::GroupRepository;

/// Group service. The store is injected so tests can substitute it.
pub struct GroupService {
    group_repo: Arc<dyn GroupRepository>,
}

impl GroupService {
    pub fn new(group_repo: Arc<dyn GroupRepository>) -> Self {
        Self { group_repo }
    }

    /// Validates the input and persists it.
    ///
    /// `ValidationError` means the store was never touched; any store failure
    /// comes back unchanged and is not retried.
    pub async fn create_group(&self, input: CreateGroupInput) -> Result<Group, DomainError> {
        let new_group = NewGroup::try_from(input).map_err(|e| {
            warn!("Group creation rejected: {}", e);
            e
        })?;

        info!("Creating group: {}", new_group.name());

        let group = self.group_repo.create(&new_group).await.map_err(|e| {
            warn!("Group creation failed in store: {}", e);
            e
        })?;

        info!("Group created: {}", group.id);
        Ok(group)
    }

    pub async fn get_group(&self, id: i64) -> Result<Group, DomainError> {
        self.group_repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::GroupNotFound(id))
    }

    pub async fn list_groups(&self, pagination: &Pagination) -> Result<Vec<Group>, DomainError> {
        self.group_repo
            .list(pagination.limit(), pagination.offset())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub GroupRepo {}

        #[async_trait]
        impl GroupRepository for GroupRepo {
            async fn create(&self, group: &NewGroup) -> Result<Group, DomainError>;
            async fn find_by_id(&self, id: i64) -> Result<Option<Group>, DomainError>;
            async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Group>, DomainError>;
        }
    }

    fn stored(id: i64, name: &str, created_by: &str) -> Group {
        let now = Utc::now();
        Group {
            id,
            name: name.to_string(),
            created_by: created_by.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn input(name: Option<&str>, created_by: Option<&str>) -> CreateGroupInput {
        CreateGroupInput {
            name: name.map(str::to_string),
            created_by: created_by.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_group_persists_both_fields() {
        let record = stored(1, "Trip to Goa", "user123");
        let expected = record.clone();

        let mut repo = MockGroupRepo::new();
        repo.expect_create()
            .withf(|g| g.name() == "Trip to Goa" && g.created_by() == "user123")
            .times(1)
            .returning(move |_| Ok(record.clone()));

        let service = GroupService::new(Arc::new(repo));
        let group = service
            .create_group(input(Some("Trip to Goa"), Some("user123")))
            .await
            .unwrap();

        assert_eq!(group, expected);
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_store() {
        let mut repo = MockGroupRepo::new();
        repo.expect_create().never();

        let service = GroupService::new(Arc::new(repo));
        for case in [
            input(None, None),
            input(Some("Trip to Goa"), None),
            input(None, Some("user123")),
            input(Some(""), Some("user123")),
        ] {
            let result = service.create_group(case).await;
            assert!(matches!(result, Err(DomainError::ValidationError(_))));
        }
    }

    #[tokio::test]
    async fn test_store_failure_is_returned() {
        let mut repo = MockGroupRepo::new();
        repo.expect_create()
            .times(1)
            .returning(|_| Err(DomainError::DatabaseError("connection refused".into())));

        let service = GroupService::new(Arc::new(repo));
        let result = service
            .create_group(input(Some("Trip to Goa"), Some("user123")))
            .await;

        assert!(matches!(result, Err(DomainError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_get_group_not_found() {
        let mut repo = MockGroupRepo::new();
        repo.expect_find_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));

        let service = GroupService::new(Arc::new(repo));
        let result = service.get_group(42).await;

        assert!(matches!(result, Err(DomainError::GroupNotFound(42))));
    }

    #[tokio::test]
    async fn test_list_groups_uses_clamped_page() {
        let mut repo = MockGroupRepo::new();
        repo.expect_list()
            .with(eq(100), eq(100))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = GroupService::new(Arc::new(repo));
        let groups = service
            .list_groups(&Pagination { page: 2, per_page: 1000 })
            .await
            .unwrap();

        assert!(groups.is_empty());
    }
}
