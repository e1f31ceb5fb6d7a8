use std::sync::Arc;

use expense_core::services::GroupService;
use expense_web::Renderer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub group_service: Arc<GroupService>,
    pub renderer: Arc<Renderer>,
}

impl AppState {
    pub fn new(group_service: GroupService, renderer: Renderer) -> Self {
        Self {
            group_service: Arc::new(group_service),
            renderer: Arc::new(renderer),
        }
    }
}
