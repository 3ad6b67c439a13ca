#![allow(dead_code, reason = "string tables are shared across pages")]

pub mod common {
    pub const TERMINAL_PROMPT_CMD: &str = "$ ";
    pub const TERMINAL_PROMPT_OUTPUT: &str = "> ";
    pub const CURRENCY: &str = "₹";
}

pub mod pagination {
    pub const ARIA_NAV: &str = "Event pages";
    pub const PREV: &str = "Prev";
    pub const NEXT: &str = "Next";
    pub const PAGE_INFO_TEMPLATE: &str = "Page {} of {}";
}

pub mod event_card {
    pub const DATE_LABEL: &str = "Date: ";
    pub const TIME_LABEL: &str = "Time: ";
    pub const LOCATION_LABEL: &str = "Location: ";
    pub const PRICE_LABEL: &str = "Ticket Price: ";
    pub const BTN_UPDATE: &str = "Update";
    pub const BTN_DELETE: &str = "Delete";
    pub const ARIA_OPEN_TEMPLATE: &str = "Open {}";
}

pub mod placeholder_page {
    pub const TERMINAL_TITLE_TEMPLATE: &str = "{}.sh";
    pub const CMD_OPEN_TEMPLATE: &str = "open {}";
    pub const STATUS_LABEL: &str = "STATUS: ";
    pub const STATUS_EXTERNAL: &str = "SERVED ELSEWHERE";
    pub const DESC_DETAIL: &str = "Event details are rendered by the event detail module.";
    pub const DESC_UPDATE: &str = "Editing is handled by the event update form.";
    pub const DESC_LOGIN: &str = "Sign in through the login module to open events.";
    pub const BTN_HOME: &str = "Back to events";
}

pub mod not_found_page {
    pub const ERROR_CODE: &str = "404 - Page not found";
    pub const ERROR_DETAIL: &str = "Sorry, the page you are looking for does not exist.";
}
