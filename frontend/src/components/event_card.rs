use event_board_shared::{AuthContext, Event};
use js_sys::Date;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::{
        current::{common, event_card as t},
        fill_one,
    },
};

#[derive(Properties, PartialEq, Clone)]
pub struct EventCardProps {
    pub event: Event,
    #[prop_or_default]
    pub auth: AuthContext,
    pub on_select: Callback<String>,
    #[prop_or_default]
    pub on_update: Callback<String>,
    #[prop_or_default]
    pub on_delete: Callback<String>,
}

/// Locale date for an ISO date string; unparsable input is shown as-is.
fn display_date(raw: &str) -> String {
    let date = Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return raw.to_string();
    }
    date.to_locale_date_string("default", &JsValue::UNDEFINED).into()
}

/// Emit `id` on `callback` without letting the click reach the card.
fn id_click(callback: &Callback<String>, id: &str) -> Callback<MouseEvent> {
    let callback = callback.clone();
    let id = id.to_string();
    Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        callback.emit(id.clone());
    })
}

#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let event = &props.event;
    let on_card_click = id_click(&props.on_select, &event.id);

    html! {
        <div
            class={classes!(
                "event-card",
                "cursor-pointer",
                "rounded-xl",
                "overflow-hidden",
                "border",
                "border-[var(--border)]",
                "bg-[var(--surface)]",
                "transition-shadow",
                "hover:shadow-[var(--shadow)]"
            )}
            role="link"
            aria-label={fill_one(t::ARIA_OPEN_TEMPLATE, &event.name)}
            onclick={on_card_click}
        >
            <div class="image-container aspect-video overflow-hidden">
                <img
                    src={event.image.clone()}
                    alt={event.name.clone()}
                    class="event-image w-full h-full object-cover"
                    loading="lazy"
                />
            </div>
            <div class="details-container p-4 space-y-1 text-sm">
                <p class="text-base"><strong>{ &event.name }</strong></p>
                <p>{ t::DATE_LABEL }{ display_date(&event.date) }</p>
                <p>{ t::TIME_LABEL }{ &event.time }</p>
                <p>{ t::LOCATION_LABEL }{ &event.location }</p>
                <p>{ t::PRICE_LABEL }{ common::CURRENCY }{ event.ticket_price.to_string() }</p>
                {
                    if props.auth.can_manage_events() {
                        html! {
                            <div class="admin-event-actions flex gap-2 pt-3">
                                <button
                                    type="button"
                                    class="update-event-btn inline-flex items-center gap-1 px-3 py-1.5 rounded-md"
                                    onclick={id_click(&props.on_update, &event.id)}
                                >
                                    <Icon name={IconName::Pencil} class={classes!("me-1")} />
                                    { t::BTN_UPDATE }
                                </button>
                                <button
                                    type="button"
                                    class="delete-event-btn inline-flex items-center gap-1 px-3 py-1.5 rounded-md"
                                    onclick={id_click(&props.on_delete, &event.id)}
                                >
                                    <Icon name={IconName::Trash} class={classes!("me-1")} />
                                    { t::BTN_DELETE }
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
