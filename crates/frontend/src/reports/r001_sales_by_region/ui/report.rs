use contracts::reports::r001_sales_by_region::SalespersonSales;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::reports::r001_sales_by_region::api;
use crate::reports::r001_sales_by_region::state::{
    region_table_rows, EMPTY_TEXT, HEADERS, REGIONS_FETCH_ERROR, REGION_SALES_FETCH_ERROR,
};
use crate::shared::api_utils::use_api_config;
use crate::shared::report_state::ReportState;
use crate::shared::report_table::{report_body, ReportTable};

#[component]
pub fn SalesByRegion() -> impl IntoView {
    let config = use_api_config();
    let regions = RwSignal::new(ReportState::<String>::default());
    let selected = RwSignal::new(None::<String>);
    let sales = RwSignal::new(ReportState::<SalespersonSales>::default());

    let regions_config = config.clone();
    Effect::new(move |_| {
        let config = regions_config.clone();
        spawn_local(async move {
            let result = api::get_regions(&config).await;
            regions.update(|s| s.apply(result, REGIONS_FETCH_ERROR));
        });
    });

    // Re-fetch whenever the selection changes
    Effect::new(move |_| {
        let Some(region) = selected.get() else {
            return;
        };
        sales.update(|s| s.loading = true);
        let config = config.clone();
        spawn_local(async move {
            let result = api::get_sales_by_region(&config, &region).await;
            sales.update(|s| s.apply(result, REGION_SALES_FETCH_ERROR));
        });
    });

    let region_select = move || {
        regions.with(|s| {
            report_body(s.loading, s.error.as_deref(), || {
                let options = s
                    .rows
                    .iter()
                    .map(|region| {
                        let value = region.clone();
                        view! { <option value=value>{region.clone()}</option> }
                    })
                    .collect_view();
                view! {
                    <label class="report__field">
                        "Region: "
                        <select
                            prop:value=move || selected.get().unwrap_or_default()
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                selected.set((!value.is_empty()).then_some(value));
                            }
                        >
                            <option value="">"Select a region"</option>
                            {options}
                        </select>
                    </label>
                }
                .into_any()
            })
        })
    };

    let sales_table = move || {
        if selected.with(Option::is_none) {
            return ().into_any();
        }
        sales.with(|s| {
            report_body(s.loading, s.fallback_text(EMPTY_TEXT), || {
                let rows = region_table_rows(&s.rows).into_iter().map(Vec::from).collect();
                view! { <ReportTable headers=HEADERS.to_vec() rows=rows /> }.into_any()
            })
        })
    };

    view! {
        <section class="report">
            <h2 class="report__title">"Sales by Region"</h2>
            {region_select}
            {sales_table}
        </section>
    }
}
