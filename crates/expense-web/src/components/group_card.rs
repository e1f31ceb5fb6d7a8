use serde::Serialize;

use expense_core::Group;

use crate::renderer::Component;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupCard {
    pub id: i64,
    pub name: String,
    pub created_by: String,
}

impl From<&Group> for GroupCard {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id,
            name: group.name.clone(),
            created_by: group.created_by.clone(),
        }
    }
}

impl Component for GroupCard {
    const NAME: &'static str = "group_card";
    const TEMPLATE: &'static str = include_str!("../../templates/group_card.hbs");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Renderer;
    use chrono::Utc;

    #[test]
    fn test_card_from_group() {
        let now = Utc::now();
        let group = Group {
            id: 3,
            name: "Trip to Goa".to_string(),
            created_by: "user123".to_string(),
            created_at: now,
            updated_at: now,
        };

        let html = GroupCard::from(&group).render(&Renderer::new().unwrap()).unwrap();
        assert!(html.contains(r#"data-group-id="3""#));
        assert!(html.contains("Trip to Goa"));
        assert!(html.contains("Created by user123"));
    }

    #[test]
    fn test_card_escapes_name() {
        let card = GroupCard {
            id: 1,
            name: "<script>alert(1)</script>".to_string(),
            created_by: "user123".to_string(),
        };

        let html = card.render(&Renderer::new().unwrap()).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
