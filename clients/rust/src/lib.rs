mod base;
mod event;
mod status;
mod user;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use event::CalendarEventClient;
pub use event::{CreateEventInput, GetEventsByDateInput, GetEventsByMonthInput};
pub use planner_api_structs::dtos::*;
pub use planner_domain::ID;
use status::StatusClient;
use std::sync::Arc;
use user::UserClient;
pub use user::CreateUserInput;

pub use planner_api_structs::dtos::CalendarEventDTO as CalendarEvent;
pub use planner_api_structs::dtos::UserDTO as User;

/// Planner Server SDK
///
/// The SDK contains methods for interacting with the Planner server API.
#[derive(Clone)]
pub struct PlannerSDK {
    pub event: CalendarEventClient,
    pub status: StatusClient,
    pub user: UserClient,
}

impl PlannerSDK {
    pub fn new<T: Into<String>>(address: T) -> Self {
        let base = Arc::new(BaseClient::new(address.into()));
        let event = CalendarEventClient::new(base.clone());
        let status = StatusClient::new(base.clone());
        let user = UserClient::new(base);

        Self {
            event,
            status,
            user,
        }
    }
}
