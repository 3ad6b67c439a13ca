pub mod display_events;
pub mod not_found;
pub mod route_placeholder;

pub use display_events::DisplayEventsPage;
pub use route_placeholder::RoutePlaceholderPage;
