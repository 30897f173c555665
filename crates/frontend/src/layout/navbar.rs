use crate::layout::global_context::{AppGlobalContext, ReportTab};
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav class="main-nav-bar">
            <ul>
                {ReportTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <li
                                class:active=move || ctx.active.get() == tab
                                on:click=move |_| ctx.activate_tab(tab)
                            >
                                <span>{tab.title()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
