//! Shared model and view logic for the event board.
//!
//! Everything here compiles for both the host and `wasm32`, so the listing
//! behaviour (pagination, view toggling, the click/update/delete flows) can
//! be tested without a browser. The frontend crate only supplies browser
//! implementations of the collaborator traits in [`actions`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub mod actions;
pub mod auth;
pub mod error;
pub mod pagination;
pub mod routes;
pub mod view;

pub use actions::{
    ActionOutcome, Confirmation, CredentialProvider, DeleteResponse, EventApi, Navigator,
};
pub use auth::AuthContext;
pub use error::EventApiError;
pub use pagination::{PageCursor, PAGE_SIZE};
pub use routes::AppPath;
pub use view::{EventListState, ViewAction};

/// One event as returned by the event service.
///
/// The view never builds these itself; they only come out of
/// [`EventsResponse`] deserialization. Display fields that arrive as `null`
/// or not at all decode as empty so one sparse record cannot sink the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Service-assigned identifier, used for detail/update/delete routes.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    #[serde(rename = "eventName", default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Image URL shown on the card.
    #[serde(rename = "eventImage", default, deserialize_with = "null_as_empty")]
    pub image: String,
    /// ISO-8601 date string, formatted with the browser locale on render.
    #[serde(rename = "eventDate", default, deserialize_with = "null_as_empty")]
    pub date: String,
    /// Free-form time string, shown verbatim.
    #[serde(rename = "eventTime", default, deserialize_with = "null_as_empty")]
    pub time: String,
    /// Venue.
    #[serde(rename = "eventLocation", default, deserialize_with = "null_as_empty")]
    pub location: String,
    /// Ticket price in rupees.
    #[serde(rename = "eventTicketPrice", default)]
    pub ticket_price: TicketPrice,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Ticket price as sent by the service, which uses numbers and strings
/// interchangeably.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TicketPrice {
    /// Numeric price.
    Amount(f64),
    /// Price already formatted by the service (e.g. `"Free"`).
    Text(String),
    /// `null` or absent; renders as nothing.
    #[default]
    Missing,
}

// Beyond this, f64 no longer holds every integer and the cast would saturate.
const EXACT_INTEGER_LIMIT: f64 = 1e15;

impl fmt::Display for TicketPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketPrice::Amount(value)
                if value.fract() == 0.0 && value.abs() < EXACT_INTEGER_LIMIT =>
            {
                write!(f, "{}", *value as i64)
            }
            TicketPrice::Amount(value) => write!(f, "{value}"),
            TicketPrice::Text(text) => f.write_str(text),
            TicketPrice::Missing => Ok(()),
        }
    }
}

/// Combined payload of `GET /api/getevents`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventsResponse {
    /// Events that have not happened yet, in service order.
    #[serde(rename = "upcomingEvents", default)]
    pub upcoming_events: Vec<Event>,
    /// Past events, in service order.
    #[serde(rename = "expiredEvents", default)]
    pub expired_events: Vec<Event>,
}
