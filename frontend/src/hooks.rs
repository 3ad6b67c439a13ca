use std::{ops::Deref, rc::Rc};

use event_board_shared::{actions::load_events, EventListState, ViewAction};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::api::HttpEventApi;

/// Reducer wrapper so [`EventListState`] can live in `use_reducer`.
#[derive(Debug, Default, PartialEq)]
pub struct EventListStore(EventListState);

impl Deref for EventListStore {
    type Target = EventListState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for EventListStore {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(Self(next))
    }
}

/// State of the event list page.
///
/// Fetches both collections once on mount; a failed fetch is logged and the
/// lists stay empty. Scrolls back to the top whenever the page changes.
///
/// # Example
/// ```ignore
/// #[function_component(Events)]
/// fn events() -> Html {
///     let list = use_event_list();
///     let next = {
///         let list = list.clone();
///         Callback::from(move |_| list.dispatch(ViewAction::NextPage))
///     };
///     html! { <button onclick={next}>{ list.current_page() }</button> }
/// }
/// ```
#[hook]
pub fn use_event_list() -> UseReducerHandle<EventListStore> {
    let store = use_reducer(EventListStore::default);

    {
        let dispatcher = store.dispatcher();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(action) = load_events(&HttpEventApi).await {
                    dispatcher.dispatch(action);
                }
            });
            || ()
        });
    }

    {
        let page = store.current_page();
        use_effect_with(page, move |_| {
            scroll_window_to_top();
            || ()
        });
    }

    store
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
