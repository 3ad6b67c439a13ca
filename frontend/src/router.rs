use event_board_shared::AppPath;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{auth::AuthProvider, pages};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,

    #[at("/home")]
    Home,

    #[at("/event")]
    EventList,

    #[at("/event/:id")]
    EventDetail { id: String },

    #[at("/updateEvent/:id")]
    UpdateEvent { id: String },

    #[at("/login")]
    Login,

    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<&AppPath> for Route {
    fn from(path: &AppPath) -> Self {
        match path {
            AppPath::Home => Route::Home,
            AppPath::EventList => Route::EventList,
            AppPath::EventDetail(id) => Route::EventDetail {
                id: id.clone(),
            },
            AppPath::UpdateEvent(id) => Route::UpdateEvent {
                id: id.clone(),
            },
            AppPath::Login => Route::Login,
        }
    }
}

fn switch(route: Route) -> Html {
    // Keyed so that moving between list routes remounts the page and refetches.
    match route {
        Route::Root | Route::Home => html! { <pages::DisplayEventsPage key="home" /> },
        Route::EventList => html! { <pages::DisplayEventsPage key="event" /> },
        Route::EventDetail {
            id,
        } => {
            html! { <pages::RoutePlaceholderPage target={AppPath::EventDetail(id)} /> }
        },
        Route::UpdateEvent {
            id,
        } => {
            html! { <pages::RoutePlaceholderPage target={AppPath::UpdateEvent(id)} /> }
        },
        Route::Login => html! { <pages::RoutePlaceholderPage target={AppPath::Login} /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <div class="displayevents flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                    <Switch<Route> render={switch} />
                </div>
            </AuthProvider>
        </BrowserRouter>
    }
}
