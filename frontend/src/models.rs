// Mock 数据，仅在 `mock` feature 下编译
#[cfg(feature = "mock")]
use event_board_shared::{Event, EventsResponse, TicketPrice};

/// Ten upcoming events and no expired ones: three pages, the last one half
/// full, and an empty expired tab.
#[cfg(feature = "mock")]
pub fn get_mock_events() -> EventsResponse {
    let venues = ["Bengaluru", "Pune", "Hyderabad", "Chennai"];

    let upcoming_events = (1..=10)
        .map(|i: usize| Event {
            id: format!("mock-{:03}", i),
            name: format!("Community Meetup #{}", i),
            image: format!("https://picsum.photos/seed/event-{}/640/360", i),
            date: format!("2026-12-{:02}T00:00:00.000Z", i),
            time: format!("{}:30 PM", 5 + i % 4),
            location: venues[i % venues.len()].to_string(),
            ticket_price: if i % 5 == 0 {
                TicketPrice::Text("Free".to_string())
            } else {
                TicketPrice::Amount((i * 150) as f64)
            },
        })
        .collect();

    EventsResponse {
        upcoming_events,
        expired_events: Vec::new(),
    }
}
