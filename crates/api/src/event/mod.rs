mod create_event;
mod get_events_by_date;
mod get_events_by_month;
mod service;

use actix_web::web;
use create_event::create_event_controller;
use get_events_by_date::get_events_by_date_controller;
use get_events_by_month::get_events_by_month_controller;

pub use service::{EventQueryService, EventServiceError};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/user/{user_id}/events",
        web::post().to(create_event_controller),
    );
    cfg.route(
        "/user/{user_id}/events/day",
        web::get().to(get_events_by_date_controller),
    );
    cfg.route(
        "/user/{user_id}/events/month",
        web::get().to(get_events_by_month_controller),
    );
}
