use serde::Serialize;

use crate::components::GroupCard;
use crate::error::WebError;
use crate::renderer::{Component, Renderer};

#[derive(Debug, Clone, Serialize)]
pub struct GroupList {
    pub groups: Vec<GroupCard>,
    pub empty_message: String,
}

#[derive(Serialize)]
struct GroupListView<'a> {
    cards: Vec<String>,
    empty_message: &'a str,
}

impl GroupList {
    pub fn new(groups: Vec<GroupCard>) -> Self {
        Self {
            groups,
            empty_message: "No groups yet. Create one to start splitting expenses.".to_string(),
        }
    }
}

impl Component for GroupList {
    const NAME: &'static str = "group_list";
    const TEMPLATE: &'static str = include_str!("../../templates/group_list.hbs");

    fn render(&self, renderer: &Renderer) -> Result<String, WebError> {
        let cards = self
            .groups
            .iter()
            .map(|card| card.render(renderer))
            .collect::<Result<Vec<_>, _>>()?;

        renderer.render_template(
            Self::NAME,
            &GroupListView {
                cards,
                empty_message: &self.empty_message,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: i64, name: &str) -> GroupCard {
        GroupCard {
            id,
            name: name.to_string(),
            created_by: "user123".to_string(),
        }
    }

    #[test]
    fn test_list_renders_each_card() {
        let list = GroupList::new(vec![card(1, "Trip to Goa"), card(2, "Flatmates")]);
        let html = list.render(&Renderer::new().unwrap()).unwrap();

        assert_eq!(html.matches(r#"class="group-list__item""#).count(), 2);
        assert!(html.contains("Trip to Goa"));
        assert!(html.contains("Flatmates"));
        assert!(!html.contains("group-list__empty"));
    }

    #[test]
    fn test_empty_list_shows_message() {
        let html = GroupList::new(vec![]).render(&Renderer::new().unwrap()).unwrap();
        assert!(html.contains("group-list__empty"));
        assert!(html.contains("No groups yet"));
    }
}
