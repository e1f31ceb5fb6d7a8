use serde::Serialize;

use crate::renderer::Component;

/// Create-group form, submitted form-encoded. Field names match
/// `CreateGroupInput` (`name`, `createdBy`).
#[derive(Debug, Clone, Serialize)]
pub struct CreateGroupModal {
    pub open: bool,
    pub action: String,
    pub name: String,
    pub created_by: String,
    pub error: Option<String>,
}

impl CreateGroupModal {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            open: false,
            action: action.into(),
            name: String::new(),
            created_by: String::new(),
            error: None,
        }
    }

    pub fn opened(mut self) -> Self {
        self.open = true;
        self
    }

    /// Prefills the inputs, e.g. with a rejected submission.
    pub fn with_values(mut self, name: impl Into<String>, created_by: impl Into<String>) -> Self {
        self.name = name.into();
        self.created_by = created_by.into();
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

impl Component for CreateGroupModal {
    const NAME: &'static str = "create_group_modal";
    const TEMPLATE: &'static str = include_str!("../../templates/create_group_modal.hbs");
}
