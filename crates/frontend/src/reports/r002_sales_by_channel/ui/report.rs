use contracts::reports::r002_sales_by_channel::{ChannelSales, CHANNEL_FETCH_ERROR};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::reports::r002_sales_by_channel::api;
use crate::reports::r002_sales_by_channel::state::{channel_table_rows, EMPTY_TEXT, HEADERS};
use crate::shared::api_utils::use_api_config;
use crate::shared::report_state::ReportState;
use crate::shared::report_table::{report_body, ReportTable};

#[component]
pub fn SalesByChannel() -> impl IntoView {
    let config = use_api_config();
    let state = RwSignal::new(ReportState::<ChannelSales>::default());

    Effect::new(move |_| {
        let config = config.clone();
        spawn_local(async move {
            let result = api::get_sales_by_channel(&config).await;
            state.update(|s| s.apply(result, CHANNEL_FETCH_ERROR));
        });
    });

    view! {
        <section class="report">
            <h2 class="report__title">"Sales by Channel"</h2>
            {move || {
                state.with(|s| {
                    report_body(s.loading, s.fallback_text(EMPTY_TEXT), || {
                        let rows = channel_table_rows(&s.rows).into_iter().map(Vec::from).collect();
                        view! { <ReportTable headers=HEADERS.to_vec() rows=rows /> }.into_any()
                    })
                })
            }}
        </section>
    }
}
