//! Server-rendered pages

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::{error, info, warn};

use expense_core::{CreateGroupInput, DomainError, Group};
use expense_shared::Pagination;
use expense_web::components::{
    CreateGroupModal, ErrorAlert, GroupCard, GroupList, NavLink, SessionStatus, TopNavigation,
};
use expense_web::layout::PageLayout;
use expense_web::{Component, Renderer, WebError};

use crate::state::AppState;

const GROUPS_PATH: &str = "/groups";
const CREATE_FAILED_MESSAGE: &str = "Could not create group. Please try again later.";
const RENDER_FAILURE_HTML: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Error</title></head>\n<body><p>Internal server error</p></body>\n</html>\n";

/// Groups page handler - GET /groups
pub async fn groups_page(State(state): State<AppState>) -> Response {
    render_groups_page(&state, CreateGroupModal::new(GROUPS_PATH).opened(), StatusCode::OK).await
}

/// Create group form handler - POST /groups
///
/// Redirects back to the page on success; otherwise re-renders the page with
/// the submitted values and an inline error.
pub async fn create_group_form(
    State(state): State<AppState>,
    form: Result<Form<CreateGroupInput>, FormRejection>,
) -> Response {
    let input = match form {
        Ok(Form(input)) => input,
        Err(rejection) => {
            warn!("Unreadable create group form: {}", rejection.body_text());
            CreateGroupInput::default()
        }
    };

    let modal = CreateGroupModal::new(GROUPS_PATH)
        .opened()
        .with_values(
            input.name.clone().unwrap_or_default(),
            input.created_by.clone().unwrap_or_default(),
        );

    match state.group_service.create_group(input).await {
        Ok(group) => {
            info!("Group {} created from form", group.id);
            Redirect::to(GROUPS_PATH).into_response()
        }
        Err(DomainError::ValidationError(msg)) => {
            render_groups_page(&state, modal.with_error(msg), StatusCode::BAD_REQUEST).await
        }
        Err(e) => {
            error!("Failed to create group from form: {}", e);
            render_groups_page(&state, modal.with_error(CREATE_FAILED_MESSAGE), StatusCode::INTERNAL_SERVER_ERROR).await
        }
    }
}

async fn render_groups_page(state: &AppState, modal: CreateGroupModal, status: StatusCode) -> Response {
    let groups = state.group_service.list_groups(&Pagination::default()).await;
    let status = if groups.is_err() { StatusCode::INTERNAL_SERVER_ERROR } else { status };

    match compose_groups_page(&state.renderer, groups, &modal) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Failed to render groups page: {}", e);
            render_failure()
        }
    }
}

fn compose_groups_page(
    renderer: &Renderer,
    groups: Result<Vec<Group>, DomainError>,
    modal: &CreateGroupModal,
) -> Result<String, WebError> {
    let content = match groups {
        Ok(groups) => {
            let cards = groups.iter().map(GroupCard::from).collect();
            GroupList::new(cards).render(renderer)?
        }
        Err(e) => {
            error!("Failed to load groups page: {}", e);
            ErrorAlert::new("Could not load groups. Please try again later.").render(renderer)?
        }
    };

    let navigation = TopNavigation::new(
        "Group Expense",
        vec![NavLink::new("Groups", GROUPS_PATH)],
        GROUPS_PATH,
    )
    .render(renderer)?;
    let session = SessionStatus::anonymous().render(renderer)?;
    let modal = modal.render(renderer)?;

    PageLayout {
        title: "Groups".to_string(),
        body: format!("{navigation}{session}<main>{content}{modal}</main>"),
    }
    .render(renderer)
}

/// Plain HTML 500, used when the templates themselves fail.
fn render_failure() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Html(RENDER_FAILURE_HTML)).into_response()
}
