//! State of the event list view: the two collections, which one is active,
//! and the page cursor over it.

use tracing::debug;

use crate::{
    pagination::{page_count, page_slice, PageCursor, PAGE_SIZE},
    Event, EventsResponse,
};

/// Inputs that change [`EventListState`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    /// The initial fetch completed.
    Loaded(EventsResponse),
    /// Switch between upcoming and expired events.
    Toggle,
    /// "Prev" pressed.
    PrevPage,
    /// "Next" pressed.
    NextPage,
}

/// Local state of the event list view.
#[derive(Debug, Clone, PartialEq)]
pub struct EventListState {
    upcoming: Vec<Event>,
    expired: Vec<Event>,
    show_expired: bool,
    cursor: PageCursor,
    page_size: usize,
}

impl Default for EventListState {
    fn default() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }
}

impl EventListState {
    /// Empty state with a custom page size.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            upcoming: Vec::new(),
            expired: Vec::new(),
            show_expired: false,
            cursor: PageCursor::default(),
            page_size: page_size.max(1),
        }
    }

    /// Apply one [`ViewAction`].
    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::Loaded(response) => self.apply_loaded(response),
            ViewAction::Toggle => self.toggle(),
            ViewAction::PrevPage => self.prev_page(),
            ViewAction::NextPage => self.next_page(),
        }
    }

    /// Replace both collections wholesale.
    pub fn apply_loaded(&mut self, response: EventsResponse) {
        debug!(
            upcoming = response.upcoming_events.len(),
            expired = response.expired_events.len(),
            "events loaded"
        );
        self.upcoming = response.upcoming_events;
        self.expired = response.expired_events;
        let total = self.total_pages();
        self.cursor.clamp_to(total);
    }

    /// Flip between upcoming and expired, always back to page 1.
    pub fn toggle(&mut self) {
        self.show_expired = !self.show_expired;
        self.cursor.reset();
    }

    /// Previous page, no-op on the first.
    pub fn prev_page(&mut self) {
        self.cursor.prev();
    }

    /// Next page, no-op on the last.
    pub fn next_page(&mut self) {
        let total = self.total_pages();
        self.cursor.next(total);
    }

    /// Whether the expired collection is active.
    pub fn show_expired(&self) -> bool {
        self.show_expired
    }

    /// Upcoming events in service order.
    pub fn upcoming(&self) -> &[Event] {
        &self.upcoming
    }

    /// Expired events in service order.
    pub fn expired(&self) -> &[Event] {
        &self.expired
    }

    /// The collection currently selected by the view-mode flag.
    pub fn active(&self) -> &[Event] {
        if self.show_expired {
            &self.expired
        } else {
            &self.upcoming
        }
    }

    /// 1-based current page.
    pub fn current_page(&self) -> usize {
        self.cursor.page()
    }

    /// Page count of the active collection.
    pub fn total_pages(&self) -> usize {
        page_count(self.active().len(), self.page_size)
    }

    /// Events on the current page.
    pub fn visible(&self) -> &[Event] {
        page_slice(self.active(), self.cursor.page(), self.page_size)
    }

    /// Pagination controls only appear once the active list overflows a page.
    pub fn shows_pagination(&self) -> bool {
        self.active().len() > self.page_size
    }

    /// See [`PageCursor::prev_disabled`].
    pub fn prev_disabled(&self) -> bool {
        self.cursor.prev_disabled()
    }

    /// See [`PageCursor::next_disabled`].
    pub fn next_disabled(&self) -> bool {
        self.cursor.next_disabled(self.total_pages())
    }

    /// Heading above the grid.
    pub fn heading(&self) -> &'static str {
        if self.show_expired {
            "Expired Events"
        } else {
            "Upcoming Events"
        }
    }

    /// Label of the toggle button, naming the collection it switches to.
    pub fn toggle_label(&self) -> &'static str {
        if self.show_expired {
            "Show Upcoming Events"
        } else {
            "Show Expired Events"
        }
    }

    /// Message shown in place of the grid when the page is empty.
    pub fn empty_message(&self) -> &'static str {
        if self.show_expired {
            "No Expired events available."
        } else {
            "No Upcoming events available."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TicketPrice;

    fn events(prefix: &str, count: usize) -> Vec<Event> {
        (0..count)
            .map(|i| Event {
                id: format!("{prefix}-{i}"),
                name: format!("Event {i}"),
                image: String::new(),
                date: "2026-12-01".to_string(),
                time: "19:00".to_string(),
                location: "Bengaluru".to_string(),
                ticket_price: TicketPrice::Amount(100.0),
            })
            .collect()
    }

    fn loaded(upcoming: usize, expired: usize) -> EventListState {
        let mut state = EventListState::default();
        state.apply(ViewAction::Loaded(EventsResponse {
            upcoming_events: events("up", upcoming),
            expired_events: events("old", expired),
        }));
        state
    }

    #[test]
    fn starts_empty_on_upcoming() {
        let state = EventListState::default();
        assert!(!state.show_expired());
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 0);
        assert!(state.visible().is_empty());
        assert_eq!(state.empty_message(), "No Upcoming events available.");
        assert!(state.prev_disabled());
        assert!(state.next_disabled());
        assert!(!state.shows_pagination());
    }

    #[test]
    fn toggle_resets_cursor_from_any_page() {
        let mut state = loaded(13, 9);
        state.apply(ViewAction::NextPage);
        state.apply(ViewAction::NextPage);
        assert_eq!(state.current_page(), 3);

        state.apply(ViewAction::Toggle);
        assert!(state.show_expired());
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.heading(), "Expired Events");
        assert_eq!(state.toggle_label(), "Show Upcoming Events");

        state.apply(ViewAction::NextPage);
        state.apply(ViewAction::Toggle);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.heading(), "Upcoming Events");
    }

    #[test]
    fn page_moves_are_clamped() {
        let mut state = loaded(6, 0);
        state.apply(ViewAction::PrevPage);
        assert_eq!(state.current_page(), 1);

        state.apply(ViewAction::NextPage);
        state.apply(ViewAction::NextPage);
        assert_eq!(state.current_page(), 2);
        assert!(state.next_disabled());
        assert_eq!(state.visible().len(), 2);
        assert_eq!(state.visible()[0].id, "up-4");
    }

    #[test]
    fn pagination_hidden_until_list_overflows() {
        assert!(!loaded(4, 0).shows_pagination());
        assert!(loaded(5, 0).shows_pagination());
    }
}
