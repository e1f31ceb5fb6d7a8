//! Template registry shared by all components

use handlebars::Handlebars;
use serde::Serialize;

use crate::components::{
    CreateGroupModal, ErrorAlert, GroupCard, GroupList, LoadingSpinner, ProtectedRoute,
    SessionStatus, TopNavigation,
};
use crate::error::WebError;
use crate::layout::PageLayout;

/// A UI unit backed by one handlebars template.
///
/// `{{value}}` output is HTML-escaped; only pre-rendered child markup is
/// emitted raw with `{{{value}}}`.
pub trait Component: Serialize + Sized {
    const NAME: &'static str;
    const TEMPLATE: &'static str;

    fn render(&self, renderer: &Renderer) -> Result<String, WebError> {
        renderer.render_template(Self::NAME, self)
    }
}

pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, WebError> {
        let mut registry = Handlebars::new();

        register::<GroupCard>(&mut registry)?;
        register::<GroupList>(&mut registry)?;
        register::<CreateGroupModal>(&mut registry)?;
        register::<ErrorAlert>(&mut registry)?;
        register::<LoadingSpinner>(&mut registry)?;
        register::<ProtectedRoute>(&mut registry)?;
        register::<TopNavigation>(&mut registry)?;
        register::<SessionStatus>(&mut registry)?;
        register::<PageLayout>(&mut registry)?;

        Ok(Self { registry })
    }

    pub fn render_template<T: Serialize>(&self, name: &str, data: &T) -> Result<String, WebError> {
        Ok(self.registry.render(name, data)?)
    }
}

fn register<C: Component>(registry: &mut Handlebars<'static>) -> Result<(), WebError> {
    registry.register_template_string(C::NAME, C::TEMPLATE)?;
    Ok(())
}
