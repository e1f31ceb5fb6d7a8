// ============================================================================
// Expense Infrastructure - PostgreSQL Group Repository
// File: crates/expense-infrastructure/src/database/postgres/group_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{PgPool, FromRow};
use tracing::{info, error};
use chrono::{DateTime, Utc};

use expense_core::domain::{Group, NewGroup};
use expense_core::error::DomainError;
use expense_core::repositories::GroupRepository;

pub struct PgGroupRepository {
    pool: PgPool,
}

impl PgGroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct GroupRow {
    pub id: i64,
    pub name: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<GroupRow> for Group {
    fn from(row: GroupRow) -> Self {
        Group {
            id: row.id,
            name: row.name,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    async fn create(&self, group: &NewGroup) -> Result<Group, DomainError> {
        info!("Inserting group: {}", group.name());

        let row: GroupRow = sqlx::query_as(
            r#"
            INSERT INTO expense_groups (name, created_by)
            VALUES ($1, $2)
            RETURNING id, name, created_by, created_at, updated_at
            "#
        )
        .bind(group.name())
        .bind(group.created_by())
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating group: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        info!("Group inserted successfully: {}", row.id);
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Group>, DomainError> {
        let row: Option<GroupRow> = sqlx::query_as(
            r#"
            SELECT id, name, created_by, created_at, updated_at
            FROM expense_groups
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding group by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Group>, DomainError> {
        let rows: Vec<GroupRow> = sqlx::query_as(
            r#"
            SELECT id, name, created_by, created_at, updated_at
            FROM expense_groups
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing groups: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Group::from).collect())
    }
}
