//! Barrel exports for components

mod create_group_modal;
mod error_alert;
mod group_card;
mod group_list;
mod loading_spinner;
mod protected_route;
mod session_status;
mod top_navigation;

pub use group_card::GroupCard;
pub use group_list::GroupList;
pub use create_group_modal::CreateGroupModal;
pub use error_alert::ErrorAlert;
pub use loading_spinner::LoadingSpinner;
pub use protected_route::ProtectedRoute;
pub use top_navigation::{NavLink, TopNavigation};
pub use session_status::SessionStatus;
