use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    i18n::current::{not_found_page as t, placeholder_page},
    router::Route,
};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("container", "mx-auto", "px-4", "py-12", "text-center")}>
            <h2 class="text-2xl font-bold mb-2">{ t::ERROR_CODE }</h2>
            <p class="mb-6 text-[var(--muted)]">{ t::ERROR_DETAIL }</p>
            <Link<Route> to={Route::Home} classes={classes!("btn-fluent-primary")}>
                { placeholder_page::BTN_HOME }
            </Link<Route>>
        </main>
    }
}
