use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d100_overview::api;
use crate::dashboards::d100_overview::state::{
    agent_series, feedback_series, report_type_series, sales_series, ChartState,
};
use crate::shared::api_utils::use_api_config;
use crate::shared::chart::{Chart, ChartKind};

fn chart_panel(state: RwSignal<ChartState>, kind: ChartKind, title: &'static str) -> impl IntoView {
    view! {
        <div class="dashboard__panel">
            {move || {
                state.with(|s| {
                    if s.loading {
                        view! { <Spinner label=title /> }.into_any()
                    } else {
                        view! {
                            <Chart
                                kind=kind
                                title=title
                                labels=s.series.labels.clone()
                                data=s.series.data.clone()
                            />
                        }
                        .into_any()
                    }
                })
            }}
        </div>
    }
}

/// Overview: four charts, each loaded on its own
#[component]
pub fn Dashboard() -> impl IntoView {
    let config = use_api_config();
    let sales = RwSignal::new(ChartState::default());
    let agents = RwSignal::new(ChartState::default());
    let feedback = RwSignal::new(ChartState::default());
    let report_types = RwSignal::new(ChartState::default());

    Effect::new(move |_| {
        let c = config.clone();
        spawn_local(async move {
            let result = api::get_sales_data(&c).await;
            sales.update(|s| s.apply(result, |rows| sales_series(rows), "sales data"));
        });
        let c = config.clone();
        spawn_local(async move {
            let result = api::get_agent_performance(&c).await;
            agents.update(|s| s.apply(result, |rows| agent_series(rows), "agent performance data"));
        });
        let c = config.clone();
        spawn_local(async move {
            let result = api::get_customer_feedback(&c).await;
            feedback.update(|s| s.apply(result, |rows| feedback_series(rows), "customer feedback data"));
        });
        let c = config.clone();
        spawn_local(async move {
            let result = api::get_report_types(&c).await;
            report_types.update(|s| s.apply(result, report_type_series, "report types"));
        });
    });

    view! {
        <section class="dashboard">
            <h2 class="report__title">"Dashboard"</h2>
            <div class="dashboard__grid">
                {chart_panel(sales, ChartKind::Bar, "Sales by Region")}
                {chart_panel(agents, ChartKind::Line, "Agent Performance")}
                {chart_panel(feedback, ChartKind::Pie, "Customer Feedback")}
                {chart_panel(report_types, ChartKind::Doughnut, "Report Types")}
            </div>
        </section>
    }
}
