use contracts::reports::r003_agent_performance::AgentPerformance;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::reports::r003_agent_performance::api;
use crate::reports::r003_agent_performance::state::{
    agent_table_rows, apply_result, month_names, DEFAULT_MONTH, EMPTY_TEXT, HEADERS,
};
use crate::shared::api_utils::use_api_config;
use crate::shared::report_state::ReportState;
use crate::shared::report_table::{report_body, ReportTable};

#[component]
pub fn AgentPerformanceReport() -> impl IntoView {
    let config = use_api_config();
    let month = RwSignal::new(DEFAULT_MONTH.to_string());
    let state = RwSignal::new(ReportState::<AgentPerformance>::default());

    Effect::new(move |_| {
        let month = month.get();
        state.update(|s| s.loading = true);
        let config = config.clone();
        spawn_local(async move {
            let result = api::get_agent_performance(&config, Some(&month)).await;
            state.update(|s| apply_result(s, result));
        });
    });

    let options = month_names()
        .into_iter()
        .map(|name| view! { <option value=name>{name}</option> })
        .collect_view();

    view! {
        <section class="report">
            <h2 class="report__title">"Agent Performance"</h2>
            <label class="report__field">
                "Month: "
                <select
                    prop:value=move || month.get()
                    on:change=move |ev| month.set(event_target_value(&ev))
                >
                    {options}
                </select>
            </label>
            {move || {
                state.with(|s| {
                    if s.loading {
                        return report_body(true, None, || ().into_any());
                    }
                    // Fallback rows come with the error, so show both
                    let error = s
                        .error
                        .clone()
                        .map(|e| view! { <p class="report__error">{e}</p> });
                    let table = report_body(
                        false,
                        s.rows.is_empty().then_some(EMPTY_TEXT),
                        || {
                            let rows = agent_table_rows(&s.rows).into_iter().map(Vec::from).collect();
                            view! { <ReportTable headers=HEADERS.to_vec() rows=rows /> }.into_any()
                        },
                    );
                    view! { {error} {table} }.into_any()
                })
            }}
        </section>
    }
}
