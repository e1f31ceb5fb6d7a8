use serde::Serialize;

use crate::renderer::Component;
use crate::session::SessionInfo;

/// Shows `content` only to a signed-in user, otherwise a sign-in link.
#[derive(Debug, Clone, Serialize)]
pub struct ProtectedRoute {
    pub session: Option<SessionInfo>,
    /// Pre-rendered child markup, emitted unescaped.
    pub content: String,
    pub login_path: String,
}

impl ProtectedRoute {
    pub fn new(session: Option<SessionInfo>, content: impl Into<String>) -> Self {
        Self {
            session,
            content: content.into(),
            login_path: "/login".to_string(),
        }
    }
}

impl Component for ProtectedRoute {
    const NAME: &'static str = "protected_route";
    const TEMPLATE: &'static str = include_str!("../../templates/protected_route.hbs");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Renderer;

    #[test]
    fn test_signed_in_sees_content() {
        let route = ProtectedRoute::new(Some(SessionInfo::new("user123", "Asha")), "<p>secret</p>");
        let html = route.render(&Renderer::new().unwrap()).unwrap();
        assert_eq!(html.trim(), "<p>secret</p>");
    }

    #[test]
    fn test_anonymous_sees_login_link() {
        let route = ProtectedRoute::new(None, "<p>secret</p>");
        let html = route.render(&Renderer::new().unwrap()).unwrap();
        assert!(!html.contains("secret"));
        assert!(html.contains(r#"href="/login""#));
    }
}
