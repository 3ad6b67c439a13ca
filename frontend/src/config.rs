//! Compile-time configuration for the frontend application.

/// Base URL of the event service.
///
/// Read from `EVENT_BOARD_API_BASE` at build time, defaulting to a local
/// backend.
pub const API_BASE: &str = match option_env!("EVENT_BOARD_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8000/api",
};

/// `localStorage` key holding the JWT issued at login.
pub const CREDENTIAL_KEY: &str = "jwt_token";

/// Log filter directive, `EVENT_BOARD_LOG` at build time.
pub const LOG_FILTER: &str = match option_env!("EVENT_BOARD_LOG") {
    Some(filter) => filter,
    None => "info",
};

/// Build an absolute API URL from a path relative to [`API_BASE`].
pub fn api_url(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}/{}", API_BASE.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::api_url;

    #[test]
    fn joins_paths_with_single_slash() {
        let base = super::API_BASE.trim_end_matches('/');
        assert_eq!(api_url("/getevents"), format!("{base}/getevents"));
        assert_eq!(api_url("delete/42"), format!("{base}/delete/42"));
    }
}
