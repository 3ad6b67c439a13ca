// Reusable components live here.

pub mod event_card;
pub mod icons;
pub mod pagination;
