//! Chart Component
//!
//! Radar chart of base stats on an HTML5 canvas.

use leptos::*;
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use pokedex::app::StatChart;

use crate::state::GlobalState;

/// Stat value reaching the outer ring
const STAT_CEILING: f64 = 255.0;

const RINGS: usize = 4;

/// Radar chart bound to the chart signal
#[component]
pub fn StatRadar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let chart = state.chart.get();
        if let Some(canvas) = canvas_ref.get() {
            match chart {
                Some((_, chart)) => draw_radar(&canvas, &chart),
                None => clear(&canvas),
            }
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="360"
            height="320"
            class="w-full max-w-sm mx-auto"
        />
    }
}

/// Vertex positions, clockwise from twelve o'clock
pub fn radar_points(values: &[u32], cx: f64, cy: f64, radius: f64) -> Vec<(f64, f64)> {
    let n = values.len().max(1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let angle = -PI / 2.0 + 2.0 * PI * i as f64 / n;
            let r = radius * (v as f64).min(STAT_CEILING) / STAT_CEILING;
            (cx + r * angle.cos(), cy + r * angle.sin())
        })
        .collect()
}

fn context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn clear(canvas: &HtmlCanvasElement) {
    if let Some(ctx) = context(canvas) {
        ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    }
}

fn trace(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)]) {
    ctx.begin_path();
    for (i, &(x, y)) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.close_path();
}

fn draw_radar(canvas: &HtmlCanvasElement, chart: &StatChart) {
    let Some(ctx) = context(canvas) else { return };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let (cx, cy) = (width / 2.0, height / 2.0 + 10.0);
    let radius = (width.min(height) / 2.0) - 40.0;

    ctx.clear_rect(0.0, 0.0, width, height);

    ctx.set_fill_style(&"#e5e7eb".into()); // gray-200
    ctx.set_font("bold 14px sans-serif");
    ctx.set_text_align("center");
    let _ = ctx.fill_text(&chart.title, cx, 16.0);

    if chart.values.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        let _ = ctx.fill_text("No stats", cx, cy);
        return;
    }

    // Grid rings
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    for ring in 1..=RINGS {
        let level = (STAT_CEILING * ring as f64 / RINGS as f64) as u32;
        let ring_points = radar_points(&vec![level; chart.values.len()], cx, cy, radius);
        trace(&ctx, &ring_points);
        ctx.stroke();
    }

    // Axes and labels
    let outer = radar_points(&vec![STAT_CEILING as u32; chart.values.len()], cx, cy, radius);
    ctx.set_fill_style(&"#9ca3af".into()); // gray-400
    ctx.set_font("11px sans-serif");
    for ((x, y), label) in outer.iter().zip(&chart.labels) {
        ctx.begin_path();
        ctx.move_to(cx, cy);
        ctx.line_to(*x, *y);
        ctx.stroke();

        let lx = cx + (x - cx) * 1.15;
        let ly = cy + (y - cy) * 1.15 + 4.0;
        let _ = ctx.fill_text(label, lx, ly);
    }

    // Values
    let points = radar_points(&chart.values, cx, cy, radius);
    trace(&ctx, &points);
    ctx.set_fill_style(&"rgba(239, 68, 68, 0.35)".into());
    ctx.fill();
    ctx.set_stroke_style(&"#ef4444".into()); // red-500
    ctx.set_line_width(2.0);
    ctx.stroke();

    ctx.set_fill_style(&"#ef4444".into());
    for &(x, y) in &points {
        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, PI * 2.0);
        ctx.fill();
    }
}
