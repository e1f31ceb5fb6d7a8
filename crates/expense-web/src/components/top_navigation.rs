use serde::Serialize;

use crate::error::WebError;
use crate::renderer::{Component, Renderer};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TopNavigation {
    pub title: String,
    pub links: Vec<NavLink>,
    /// `href` of the current page.
    pub active: String,
}

#[derive(Serialize)]
struct NavLinkView<'a> {
    label: &'a str,
    href: &'a str,
    active: bool,
}

#[derive(Serialize)]
struct TopNavigationView<'a> {
    title: &'a str,
    links: Vec<NavLinkView<'a>>,
}

impl TopNavigation {
    pub fn new(title: impl Into<String>, links: Vec<NavLink>, active: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            links,
            active: active.into(),
        }
    }
}

impl Component for TopNavigation {
    const NAME: &'static str = "top_navigation";
    const TEMPLATE: &'static str = include_str!("../../templates/top_navigation.hbs");

    fn render(&self, renderer: &Renderer) -> Result<String, WebError> {
        let links = self
            .links
            .iter()
            .map(|link| NavLinkView {
                label: &link.label,
                href: &link.href,
                active: link.href == self.active,
            })
            .collect();

        renderer.render_template(
            Self::NAME,
            &TopNavigationView {
                title: &self.title,
                links,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_marked() {
        let nav = TopNavigation::new(
            "Group Expense",
            vec![NavLink::new("Groups", "/groups"), NavLink::new("Health", "/health")],
            "/groups",
        );

        let html = nav.render(&Renderer::new().unwrap()).unwrap();
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        assert!(html.contains(r#"<a href="/groups" class="top-nav__link top-nav__link--active""#));
        assert!(html.contains(r#"<a href="/health" class="top-nav__link""#));
    }
}
