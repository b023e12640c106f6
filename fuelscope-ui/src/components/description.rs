//! Description Component
//!
//! The text panel under the chart: either the active family's landing
//! description or the narrative of the most recently revealed event, plus
//! the data and event source links.

use leptos::*;

use fuelscope::dataset::EVENT_SOURCE_URL;

use crate::state::GlobalState;

/// Description panel
#[component]
pub fn Description() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_family = state.clone();
    let family = create_memo(move |_| state_for_family.sequencer.get().family());

    view! {
        <section class="description">
            <p class="description-text">
                {move || state.description.get()}
            </p>

            <p class="sources">
                "Data Source: "
                <a href=move || family.get().data_source_url() target="_blank">
                    {move || family.get().data_source_url()}
                </a>
                <br/>
                "Event Source: "
                <a href=EVENT_SOURCE_URL target="_blank">
                    {EVENT_SOURCE_URL}
                </a>
            </p>
        </section>
    }
}
