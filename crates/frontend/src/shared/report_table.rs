use leptos::prelude::*;
use thaw::*;

/// Plain read-only table: one header row, then text cells
#[component]
pub fn ReportTable(headers: Vec<&'static str>, rows: Vec<Vec<String>>) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    {headers
                        .into_iter()
                        .map(|h| view! { <TableHeaderCell>{h}</TableHeaderCell> })
                        .collect_view()}
                </TableRow>
            </TableHeader>
            <TableBody>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <TableRow>
                                {row
                                    .into_iter()
                                    .map(|cell| view! { <TableCell>{cell}</TableCell> })
                                    .collect_view()}
                            </TableRow>
                        }
                    })
                    .collect_view()}
            </TableBody>
        </Table>
    }
}

/// Spinner while loading, then either `content` or a message line
pub fn report_body(loading: bool, message: Option<&str>, content: impl FnOnce() -> AnyView) -> AnyView {
    if loading {
        return view! { <Spinner /> }.into_any();
    }
    match message {
        Some(text) => view! { <p class="report__message">{text.to_string()}</p> }.into_any(),
        None => content(),
    }
}
