//! Authentication context for the page tree.

use event_board_shared::AuthContext;
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::{browser::read_local_storage, config};

/// Current capabilities, derived from the JWT in `localStorage`.
pub fn current_auth() -> AuthContext {
    let token = read_local_storage(config::CREDENTIAL_KEY);
    let now_secs = (js_sys::Date::now() / 1000.0) as i64;
    AuthContext::from_token(token.as_deref(), now_secs)
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Provides [`AuthContext`] to its children.
///
/// The token is re-read on every route change, since login and logout
/// happen on other routes.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let location = use_location();
    let auth = use_memo(location, |_| current_auth());

    html! {
        <ContextProvider<AuthContext> context={*auth}>
            { props.children.clone() }
        </ContextProvider<AuthContext>>
    }
}

/// Capabilities of the current visitor; anonymous outside an
/// [`AuthProvider`].
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_default()
}
