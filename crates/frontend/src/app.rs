use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::api_utils::ApiConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    log::info!("Report API at {}", config.base_url());
    provide_context(config);

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    view! {
        <ConfigProvider>
            <Shell />
        </ConfigProvider>
    }
}
