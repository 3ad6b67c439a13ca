use event_board_shared::AppPath;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    i18n::{
        current::{common as common_text, placeholder_page as t},
        fill_one,
    },
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub target: AppPath,
}

/// Stand-in for routes owned by other modules (detail, update form, login).
/// Shows where the list view sent the visitor and links back.
#[function_component(RoutePlaceholderPage)]
pub fn route_placeholder_page(props: &Props) -> Html {
    let path = props.target.path();
    let script = match &props.target {
        AppPath::EventDetail(_) => "event-detail",
        AppPath::UpdateEvent(_) => "update-event",
        AppPath::Login => "login",
        AppPath::Home | AppPath::EventList => "events",
    };
    let description = match &props.target {
        AppPath::EventDetail(_) => t::DESC_DETAIL,
        AppPath::UpdateEvent(_) => t::DESC_UPDATE,
        _ => t::DESC_LOGIN,
    };

    html! {
        <main class={classes!(
            "container", "mx-auto", "px-4", "py-12",
            "flex", "justify-center", "items-center", "min-h-[60vh]"
        )}>
            <div class={classes!("max-w-2xl", "w-full")}>
                <div class="terminal-hero">
                    <div class="terminal-header">
                        <span class="terminal-dot terminal-dot-red"></span>
                        <span class="terminal-dot terminal-dot-yellow"></span>
                        <span class="terminal-dot terminal-dot-green"></span>
                        <span class="terminal-title">{ fill_one(t::TERMINAL_TITLE_TEMPLATE, script) }</span>
                    </div>

                    <div class="terminal-line">
                        <span class="terminal-prompt">{ common_text::TERMINAL_PROMPT_CMD }</span>
                        <span class="terminal-content">{ fill_one(t::CMD_OPEN_TEMPLATE, &path) }</span>
                    </div>

                    <div class="terminal-line" style="margin-top: 1rem;">
                        <span class="terminal-prompt" style="color: var(--warning, #f59e0b);">
                            { t::STATUS_LABEL }
                        </span>
                        <span class="terminal-content" style="color: var(--warning, #f59e0b);">
                            { t::STATUS_EXTERNAL }
                        </span>
                    </div>

                    <div class="terminal-line">
                        <span class="terminal-prompt">{ common_text::TERMINAL_PROMPT_OUTPUT }</span>
                        <span class="terminal-content">{ description }</span>
                    </div>

                    <div class={classes!("flex", "flex-wrap", "gap-3", "mt-4", "ml-8")}>
                        <Link<Route>
                            to={Route::Home}
                            classes={classes!("btn-fluent-primary", "!px-6", "!py-2.5", "!text-sm")}
                        >
                            { t::BTN_HOME }
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </main>
    }
}
