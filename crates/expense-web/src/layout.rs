//! Full HTML document wrapping rendered components

use serde::Serialize;

use crate::renderer::Component;

#[derive(Debug, Clone, Serialize)]
pub struct PageLayout {
    pub title: String,
    /// Pre-rendered markup, emitted unescaped.
    pub body: String,
}

impl Component for PageLayout {
    const NAME: &'static str = "layout";
    const TEMPLATE: &'static str = include_str!("../templates/layout.hbs");
}
