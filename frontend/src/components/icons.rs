use yew::prelude::*;

/// Lucide Icons
/// SVG 路径来自 <https://lucide.dev>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    // Navigation
    ChevronLeft,
    ChevronRight,

    // Admin actions
    Pencil,
    Trash,
}

impl IconName {
    /// SVG path data of the icon.
    pub fn path(&self) -> &'static str {
        match self {
            IconName::ChevronLeft => "m15 18-6-6 6-6",
            IconName::ChevronRight => "m9 18 6-6-6-6",
            IconName::Pencil => "M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z",
            IconName::Trash => {
                "M3 6h18M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 \
                 2v2"
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(16)]
    pub size: u32,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        class,
    } = props;

    let stroke_width = if *size <= 16 { 2.5 } else { 2.0 };

    html! {
        <svg
            class={classes!("inline-flex", "shrink-0", class.clone())}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d={name.path()} />
        </svg>
    }
}
