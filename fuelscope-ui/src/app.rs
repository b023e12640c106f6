//! App Root Component
//!
//! Main application component: layout plus the initial dataset loads.

use leptos::*;

use fuelscope::dataset::Family;

use crate::api;
use crate::components::{Chart, Description, Nav, TooltipOverlay};
use crate::state::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch the three CSVs once on mount. The gas chart appears as soon as
    // its file lands; the other two load behind it.
    let state_for_load = state.clone();
    create_effect(move |_| {
        let state = state_for_load.clone();
        spawn_local(async move {
            load_datasets(state).await;
        });
    });

    view! {
        <div class="page">
            <header class="header">
                <h1 class="title">
                    {move || state.sequencer.get().family().title()}
                </h1>
            </header>

            <Nav />

            {move || {
                state.loading.get().then(|| view! {
                    <p class="loading">"Loading data..."</p>
                })
            }}

            <main class="chart-area">
                <Chart />
            </main>

            <Description />

            // Hover tooltip, positioned at the pointer
            <TooltipOverlay />
        </div>
    }
}

/// Load the three series sequentially
///
/// A failed load is logged to the console and swallowed: the slot stays
/// empty and its chart renders the no-data state. No retry, no fallback.
async fn load_datasets(state: GlobalState) {
    state.loading.set(true);

    for family in Family::all() {
        match api::fetch_series(*family).await {
            Ok(series) => {
                state.store.update(|store| store.insert(series));
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("failed to load {} data: {}", family.name(), e).into(),
                );
            }
        }
    }

    state.loading.set(false);
}
