//! Navigation targets used by the event list view.

use std::fmt;

/// A path the view can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppPath {
    /// `/home`
    Home,
    /// `/event`
    EventList,
    /// `/event/{id}`
    EventDetail(String),
    /// `/updateEvent/{id}`
    UpdateEvent(String),
    /// `/login`
    Login,
}

impl AppPath {
    /// Path string understood by the router.
    pub fn path(&self) -> String {
        match self {
            AppPath::Home => "/home".to_string(),
            AppPath::EventList => "/event".to_string(),
            AppPath::EventDetail(id) => format!("/event/{id}"),
            AppPath::UpdateEvent(id) => format!("/updateEvent/{id}"),
            AppPath::Login => "/login".to_string(),
        }
    }
}

impl fmt::Display for AppPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::AppPath;

    #[test]
    fn renders_paths() {
        assert_eq!(AppPath::Home.path(), "/home");
        assert_eq!(AppPath::EventList.path(), "/event");
        assert_eq!(AppPath::EventDetail("42".into()).path(), "/event/42");
        assert_eq!(AppPath::UpdateEvent("42".into()).to_string(), "/updateEvent/42");
        assert_eq!(AppPath::Login.to_string(), "/login");
    }
}
