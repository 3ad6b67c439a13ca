use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::{current::pagination as t, fill_two},
};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

/// Prev / "Page X of Y" / Next. Disabled buttons never emit.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let prev_disabled = props.prev_disabled;
    let next_disabled = props.next_disabled;

    let prev_onclick = {
        let on_prev = props.on_prev.clone();
        Callback::from(move |_: MouseEvent| {
            if !prev_disabled {
                on_prev.emit(());
            }
        })
    };

    let next_onclick = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| {
            if !next_disabled {
                on_next.emit(());
            }
        })
    };

    let btn_classes = classes!(
        "pagination-btn",
        "inline-flex",
        "items-center",
        "gap-1",
        "h-10",
        "px-4",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "text-sm",
        "font-semibold",
        "transition-all",
        "duration-200",
        "hover:border-[var(--primary)]",
        "hover:text-[var(--primary)]",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed"
    );

    html! {
        <nav class="pagination flex items-center justify-center gap-4 mt-8" aria-label={t::ARIA_NAV}>
            <button
                type="button"
                class={btn_classes.clone()}
                disabled={prev_disabled}
                onclick={prev_onclick}
            >
                <Icon name={IconName::ChevronLeft} />
                { t::PREV }
            </button>
            <span class="page-info text-sm text-[var(--muted)]">
                { fill_two(t::PAGE_INFO_TEMPLATE, props.current_page, props.total_pages) }
            </span>
            <button
                type="button"
                class={btn_classes}
                disabled={next_disabled}
                onclick={next_onclick}
            >
                { t::NEXT }
                <Icon name={IconName::ChevronRight} />
            </button>
        </nav>
    }
}
