use event_board_shared::{
    actions::{request_delete, request_update, select_event},
    ViewAction,
};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::{
    api::HttpEventApi,
    auth::use_auth,
    browser::{LocalStorageCredentials, RouterNavigator, WindowConfirmation},
    components::{event_card::EventCard, pagination::Pagination},
    hooks::use_event_list,
};

/// Upcoming/expired event listing with client-side pagination.
#[function_component(DisplayEventsPage)]
pub fn display_events_page() -> Html {
    let list = use_event_list();
    let auth = use_auth();
    let navigator = use_navigator().map(RouterNavigator::new);

    let on_toggle = {
        let list = list.clone();
        Callback::from(move |_: MouseEvent| list.dispatch(ViewAction::Toggle))
    };

    let on_prev = {
        let list = list.clone();
        Callback::from(move |_: ()| list.dispatch(ViewAction::PrevPage))
    };

    let on_next = {
        let list = list.clone();
        Callback::from(move |_: ()| list.dispatch(ViewAction::NextPage))
    };

    let on_select = {
        let navigator = navigator.clone();
        Callback::from(move |id: String| {
            if let Some(nav) = navigator.as_ref() {
                select_event(auth, &id, nav);
            }
        })
    };

    let on_update = {
        let navigator = navigator.clone();
        Callback::from(move |id: String| {
            if let Some(nav) = navigator.as_ref() {
                request_update(auth, &id, nav);
            }
        })
    };

    // Overlapping deletes are not guarded against.
    let on_delete = Callback::from(move |id: String| {
        let Some(nav) = navigator.clone() else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            request_delete(
                auth,
                &id,
                &WindowConfirmation,
                &HttpEventApi,
                &LocalStorageCredentials::default(),
                &nav,
            )
            .await;
        });
    });

    let visible = list.visible();

    html! {
        <main class={classes!("displayevents-main-container", "container", "mx-auto", "px-4", "py-10")}>
            <div class="events-container">
                <div class="events-header flex flex-wrap items-center justify-between gap-4 mb-8">
                    <h1 class="header-title text-3xl font-bold">{ list.heading() }</h1>
                    <button
                        type="button"
                        class="expired-events-btn btn-fluent-primary !px-5 !py-2 !text-sm"
                        onclick={on_toggle}
                    >
                        { list.toggle_label() }
                    </button>
                </div>

                <div class="event-grid grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                    {
                        if visible.is_empty() {
                            html! { <p class="col-span-full text-[var(--muted)]">{ list.empty_message() }</p> }
                        } else {
                            visible.iter().map(|event| html! {
                                <EventCard
                                    key={event.id.clone()}
                                    event={event.clone()}
                                    auth={auth}
                                    on_select={on_select.clone()}
                                    on_update={on_update.clone()}
                                    on_delete={on_delete.clone()}
                                />
                            }).collect::<Html>()
                        }
                    }
                </div>

                if list.shows_pagination() {
                    <Pagination
                        current_page={list.current_page()}
                        total_pages={list.total_pages()}
                        prev_disabled={list.prev_disabled()}
                        next_disabled={list.next_disabled()}
                        on_prev={on_prev}
                        on_next={on_next}
                    />
                }
            </div>
        </main>
    }
}
