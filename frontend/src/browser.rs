//! Browser implementations of the view's collaborators.

use event_board_shared::{AppPath, Confirmation, CredentialProvider, Navigator as AppNavigator};
use web_sys::window;
use yew_router::prelude::Navigator;

use crate::{config, router::Route};

pub fn read_local_storage(key: &str) -> Option<String> {
    window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
}

/// Reads the bearer token from `localStorage`.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalStorageCredentials {
    key: &'static str,
}

impl Default for LocalStorageCredentials {
    fn default() -> Self {
        Self {
            key: config::CREDENTIAL_KEY,
        }
    }
}

impl CredentialProvider for LocalStorageCredentials {
    fn bearer_token(&self) -> Option<String> {
        read_local_storage(self.key).filter(|token| !token.trim().is_empty())
    }
}

/// `window.confirm`. A missing window counts as "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowConfirmation;

impl Confirmation for WindowConfirmation {
    fn confirm(&self, message: &str) -> bool {
        window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Pushes [`AppPath`]s onto the yew-router history.
#[derive(Clone)]
pub struct RouterNavigator(Navigator);

impl RouterNavigator {
    pub fn new(navigator: Navigator) -> Self {
        Self(navigator)
    }
}

impl AppNavigator for RouterNavigator {
    fn navigate(&self, path: &AppPath) {
        tracing::debug!(path = %path, "navigate");
        self.0.push(&Route::from(path));
    }
}
