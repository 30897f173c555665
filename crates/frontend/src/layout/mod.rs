pub mod global_context;
pub mod navbar;

use crate::dashboards::Dashboard;
use crate::reports::{AgentPerformanceReport, SalesByChannel, SalesByRegion};
use global_context::{AppGlobalContext, ReportTab};
use leptos::prelude::*;
use navbar::Navbar;

/// Application shell: title bar, navigation, and the active view.
///
/// ```text
/// +------------------------------------------+
/// |               Header                     |
/// +------------------------------------------+
/// |  Navbar  |          Content              |
/// +------------------------------------------+
/// ```
///
/// Switching tabs drops the previous view together with its state.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Sales & Agent Performance Reports"</h1>
            </header>
            <div class="app-body">
                <Navbar />
                <main class="app-main">
                    {move || match ctx.active.get() {
                        ReportTab::Dashboard => view! { <Dashboard /> }.into_any(),
                        ReportTab::SalesByRegion => view! { <SalesByRegion /> }.into_any(),
                        ReportTab::SalesByChannel => view! { <SalesByChannel /> }.into_any(),
                        ReportTab::AgentPerformance => view! { <AgentPerformanceReport /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
