use serde::Serialize;

use crate::renderer::Component;
use crate::session::SessionInfo;

#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub session: Option<SessionInfo>,
}

impl SessionStatus {
    pub fn anonymous() -> Self {
        Self { session: None }
    }

    pub fn signed_in(session: SessionInfo) -> Self {
        Self { session: Some(session) }
    }
}

impl Component for SessionStatus {
    const NAME: &'static str = "session_status";
    const TEMPLATE: &'static str = include_str!("../../templates/session_status.hbs");
}
