// ============================================================================
// Expense Core - Group Entity
// File: crates/expense-core/src/domain/group.rs
// Description: Expense-splitting group and its creation input
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;

pub const GROUP_FIELDS_REQUIRED: &str = "name and createdBy are required";

/// Group as stored, including the fields assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw creation payload. Both fields may be missing or null on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupInput {
    pub name: Option<String>,
    pub created_by: Option<String>,
}

/// Creation input that has passed the presence check.
///
/// Only presence is enforced: whitespace-only names are accepted and nothing
/// is trimmed.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewGroup {
    #[validate(length(min = 1))]
    name: String,

    #[validate(length(min = 1))]
    created_by: String,
}

impl NewGroup {
    pub fn new(name: impl Into<String>, created_by: impl Into<String>) -> Result<Self, DomainError> {
        let group = Self {
            name: name.into(),
            created_by: created_by.into(),
        };

        group
            .validate()
            .map_err(|_| DomainError::ValidationError(GROUP_FIELDS_REQUIRED.to_string()))?;
        Ok(group)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_by(&self) -> &str {
        &self.created_by
    }
}

impl TryFrom<CreateGroupInput> for NewGroup {
    type Error = DomainError;

    fn try_from(input: CreateGroupInput) -> Result<Self, Self::Error> {
        Self::new(
            input.name.unwrap_or_default(),
            input.created_by.unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(json: &str) -> CreateGroupInput {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_create_group() {
        let group = NewGroup::new("Trip to Goa", "user123").unwrap();
        assert_eq!(group.name(), "Trip to Goa");
        assert_eq!(group.created_by(), "user123");
    }

    #[test]
    fn test_missing_fields_rejected() {
        for json in [
            r#"{}"#,
            r#"{"name": "Trip to Goa"}"#,
            r#"{"createdBy": "user123"}"#,
            r#"{"name": null, "createdBy": "user123"}"#,
            r#"{"name": "", "createdBy": "user123"}"#,
            r#"{"name": "Trip to Goa", "createdBy": ""}"#,
        ] {
            match NewGroup::try_from(input(json)) {
                Err(DomainError::ValidationError(msg)) => assert_eq!(msg, GROUP_FIELDS_REQUIRED),
                other => panic!("expected validation error for {}, got {:?}", json, other),
            }
        }
    }

    #[test]
    fn test_whitespace_name_is_present() {
        let group = NewGroup::try_from(input(r#"{"name": "  ", "createdBy": "user123"}"#)).unwrap();
        assert_eq!(group.name(), "  ");
    }

    #[test]
    fn test_group_serializes_camel_case() {
        let now = Utc::now();
        let group = Group {
            id: 1,
            name: "Trip to Goa".to_string(),
            created_by: "user123".to_string(),
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["createdBy"], "user123");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_by").is_none());
    }
}
