pub mod geometry;

pub use geometry::ChartKind;

use geometry::{arc_slices, bar_rects, color, line_points, polyline};
use leptos::prelude::*;

const WIDTH: f64 = 360.0;
const HEIGHT: f64 = 200.0;

fn px(value: f64) -> String {
    format!("{:.2}", value)
}

/// One fixed chart drawn as inline SVG, with a legend of `labels`
#[component]
pub fn Chart(
    kind: ChartKind,
    #[prop(into)] title: String,
    labels: Vec<String>,
    data: Vec<f64>,
) -> impl IntoView {
    let body = match kind {
        ChartKind::Bar => bar_rects(&data, WIDTH, HEIGHT)
            .into_iter()
            .enumerate()
            .map(|(i, r)| {
                view! {
                    <rect x=px(r.x) y=px(r.y) width=px(r.width) height=px(r.height) fill=color(i) />
                }
            })
            .collect_view()
            .into_any(),
        ChartKind::Line => {
            let points = line_points(&data, WIDTH, HEIGHT);
            let markers = points
                .iter()
                .map(|(x, y)| {
                    view! { <circle cx=px(*x) cy=px(*y) r="4" fill=color(0) /> }
                })
                .collect_view();
            view! {
                <polyline points=polyline(&points) fill="none" stroke=color(0) stroke-width="2" />
                {markers}
            }
            .into_any()
        }
        ChartKind::Pie | ChartKind::Doughnut => {
            let radius = HEIGHT / 2.0 - 4.0;
            let inner = if kind == ChartKind::Doughnut { radius * 0.55 } else { 0.0 };
            arc_slices(&data, WIDTH / 2.0, HEIGHT / 2.0, radius, inner)
                .into_iter()
                .enumerate()
                .filter(|(_, slice)| !slice.path.is_empty())
                .map(|(i, slice)| {
                    view! { <path d=slice.path fill=color(i) fill-rule="evenodd" /> }
                })
                .collect_view()
                .into_any()
        }
    };

    let legend = labels
        .into_iter()
        .zip(data.iter().copied())
        .enumerate()
        .map(|(i, (label, value))| {
            let swatch = if kind == ChartKind::Line { color(0) } else { color(i) };
            view! {
                <li class="chart__legend-item">
                    <span class="chart__swatch" style=format!("background:{}", swatch)></span>
                    {format!("{}: {}", label, value)}
                </li>
            }
        })
        .collect_view();

    view! {
        <figure class="chart">
            <figcaption class="chart__title">{title}</figcaption>
            <svg
                class="chart__canvas"
                viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
                width="100%"
                role="img"
            >
                {body}
            </svg>
            <ul class="chart__legend">{legend}</ul>
        </figure>
    }
}
