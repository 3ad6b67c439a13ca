//! Browser frontend of the event board: the upcoming/expired event listing
//! with client-side pagination and admin update/delete actions.

mod api;
mod auth;
mod browser;
mod components;
mod config;
mod hooks;
mod i18n;
mod logging;
mod models;
mod pages;
mod router;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    logging::init_logging();
    yew::Renderer::<App>::new().render();
}
