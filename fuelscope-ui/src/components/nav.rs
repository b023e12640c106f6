//! Navigation Component
//!
//! Dataset selector buttons and the "Next Event" control.

use leptos::*;

use fuelscope::dataset::Family;

use crate::state::GlobalState;

/// Control bar with the three dataset buttons and the advance button
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <nav class="controls">
            <DatasetButton family=Family::Gas label="Gas Prices" />
            <DatasetButton family=Family::Crude label="Crude Oil Prices" />
            <DatasetButton family=Family::Inflation label="Inflation" />

            <button
                class="button next-button"
                on:click=move |_| state.advance()
            >
                "Next Event"
            </button>
        </nav>
    }
}

/// One dataset selector button
#[component]
fn DatasetButton(family: Family, label: &'static str) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_memo = state.clone();
    let is_active = create_memo(move |_| state_for_memo.sequencer.get().family() == family);

    view! {
        <button
            class=move || {
                if is_active.get() {
                    "button dataset-button active"
                } else {
                    "button dataset-button"
                }
            }
            on:click=move |_| state.select_family(family)
        >
            {label}
        </button>
    }
}
