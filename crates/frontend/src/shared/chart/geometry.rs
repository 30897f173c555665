//! SVG geometry for the dashboard charts

use std::f64::consts::{FRAC_PI_2, TAU};

pub const PALETTE: [&str; 6] = [
    "#3f51b5", "#ff9800", "#4caf50", "#e91e63", "#00bcd4", "#9c27b0",
];

pub fn color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Doughnut,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One pie/doughnut slice: SVG path data and share of the total
#[derive(Clone, Debug, PartialEq)]
pub struct ArcSlice {
    pub path: String,
    pub fraction: f64,
}

fn max_value(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

fn scaled(value: f64, max: f64, height: f64) -> f64 {
    if max > 0.0 {
        value.max(0.0) / max * height
    } else {
        0.0
    }
}

/// Bars scaled to the largest value, each centred in an equal slot
pub fn bar_rects(values: &[f64], width: f64, height: f64) -> Vec<Rect> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = max_value(values);
    let slot = width / values.len() as f64;
    let bar_width = slot * 0.7;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let h = scaled(*v, max, height);
            Rect {
                x: i as f64 * slot + (slot - bar_width) / 2.0,
                y: height - h,
                width: bar_width,
                height: h,
            }
        })
        .collect()
}

/// Points evenly spread over `width`; a single point sits in the middle
pub fn line_points(values: &[f64], width: f64, height: f64) -> Vec<(f64, f64)> {
    let n = values.len();
    let max = max_value(values);
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = if n > 1 {
                i as f64 * width / (n - 1) as f64
            } else {
                width / 2.0
            };
            (x, height - scaled(*v, max, height))
        })
        .collect()
}

/// `points` attribute of an SVG polyline
pub fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn point_at(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

fn full_circle(cx: f64, cy: f64, r: f64, sweep: u8) -> String {
    format!(
        "M {:.2} {:.2} A {r:.2} {r:.2} 0 1 {s} {:.2} {:.2} A {r:.2} {r:.2} 0 1 {s} {:.2} {:.2} Z",
        cx - r,
        cy,
        cx + r,
        cy,
        cx - r,
        cy,
        r = r,
        s = sweep
    )
}

/// Slices clockwise from 12 o'clock. `inner_radius > 0` cuts a doughnut hole.
///
/// Non-positive values get an empty path so slice `i` still matches label `i`.
/// A single slice covering the whole circle is drawn as a ring; the doughnut
/// variant relies on `fill-rule="evenodd"`.
pub fn arc_slices(values: &[f64], cx: f64, cy: f64, radius: f64, inner_radius: f64) -> Vec<ArcSlice> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    values
        .iter()
        .map(|v| {
            let fraction = v.max(0.0) / total;
            if fraction == 0.0 {
                return ArcSlice {
                    path: String::new(),
                    fraction,
                };
            }
            let end = start + fraction * TAU;
            let path = if fraction >= 0.9999 {
                let mut path = full_circle(cx, cy, radius, 1);
                if inner_radius > 0.0 {
                    path.push(' ');
                    path.push_str(&full_circle(cx, cy, inner_radius, 0));
                }
                path
            } else {
                let large_arc = if fraction > 0.5 { 1 } else { 0 };
                let (ox0, oy0) = point_at(cx, cy, radius, start);
                let (ox1, oy1) = point_at(cx, cy, radius, end);
                if inner_radius > 0.0 {
                    let (ix1, iy1) = point_at(cx, cy, inner_radius, end);
                    let (ix0, iy0) = point_at(cx, cy, inner_radius, start);
                    format!(
                        "M {:.2} {:.2} A {r:.2} {r:.2} 0 {la} 1 {:.2} {:.2} L {:.2} {:.2} A {ir:.2} {ir:.2} 0 {la} 0 {:.2} {:.2} Z",
                        ox0, oy0, ox1, oy1, ix1, iy1, ix0, iy0,
                        r = radius,
                        ir = inner_radius,
                        la = large_arc
                    )
                } else {
                    format!(
                        "M {:.2} {:.2} L {:.2} {:.2} A {r:.2} {r:.2} 0 {la} 1 {:.2} {:.2} Z",
                        cx, cy, ox0, oy0, ox1, oy1,
                        r = radius,
                        la = large_arc
                    )
                }
            };
            start = end;
            ArcSlice { path, fraction }
        })
        .collect()
}
