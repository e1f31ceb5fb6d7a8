use serde::Serialize;

use crate::renderer::Component;

#[derive(Debug, Clone, Serialize)]
pub struct ErrorAlert {
    pub title: Option<String>,
    pub message: String,
}

impl ErrorAlert {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Component for ErrorAlert {
    const NAME: &'static str = "error_alert";
    const TEMPLATE: &'static str = include_str!("../../templates/error_alert.hbs");
}
