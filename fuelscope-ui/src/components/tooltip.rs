//! Tooltip Component
//!
//! A small floating box near the pointer showing the hovered point's date
//! and value.

use leptos::*;

use crate::state::GlobalState;

/// Floating tooltip, rendered only while a point is hovered
#[component]
pub fn TooltipOverlay() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            state.tooltip.get().map(|tip| {
                view! {
                    <div
                        class="tooltip"
                        style=format!("left: {}px; top: {}px;", tip.page_x, tip.page_y)
                    >
                        <span>{tip.date_line}</span>
                        <br/>
                        <span>{tip.value_line}</span>
                    </div>
                }
            })
        }}
    }
}
