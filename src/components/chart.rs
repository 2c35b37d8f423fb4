//! Chart Components
//!
//! The two dashboard charts, painted onto HTML5 Canvas: monthly expenses
//! as a filled line, spending by category as a doughnut.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::format::format_dollars;
use crate::state::global::{ChartSeries, GlobalState};

/// Expense line styling
const EXPENSE_LINE: &str = "#dc3545";
const EXPENSE_FILL: &str = "rgba(220, 53, 69, 0.1)";

/// Slice palette, cycled when a series has more than ten categories
const DOUGHNUT_COLORS: [&str; 10] = [
    "#4361ee", "#3f37c9", "#4895ef", "#4cc9f0", "#f72585",
    "#b5179e", "#7209b7", "#560bad", "#480ca8", "#3a0ca3",
];

/// Muted text color for axis labels and empty-state messages
const MUTED_TEXT: &str = "#6c757d";

/// Monthly expenses line chart
#[component]
pub fn ExpensesLineChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the series changes
    create_effect(move |_| {
        let series = state.monthly_expenses.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_line_chart(&canvas, &series);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="w-100"
        />
    }
}

/// Spending-by-category doughnut with a side legend
#[component]
pub fn CategoriesDoughnut() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let series = state.category_breakdown.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_doughnut(&canvas, &series);
        }
    });

    view! {
        <div class="d-flex align-items-center flex-wrap">
            <canvas
                node_ref=canvas_ref
                width="360"
                height="360"
            />
            <DoughnutLegend />
        </div>
    }
}

/// Legend listing each slice with its dollars and share of the total
#[component]
fn DoughnutLegend() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let breakdown = state.category_breakdown;

    view! {
        <ul class="list-unstyled ms-4 mb-0">
            {move || {
                let series = breakdown.get();
                let total = series.total();
                series.labels.iter()
                    .zip(series.values.iter())
                    .enumerate()
                    .map(|(idx, (label, &value))| view! {
                        <li class="d-flex align-items-center mb-1">
                            <span
                                class="d-inline-block rounded-circle me-2"
                                style=format!(
                                    "width: 12px; height: 12px; background-color: {}",
                                    slice_color(idx)
                                )
                            ></span>
                            <span class="small">{legend_entry(label, value, total)}</span>
                        </li>
                    })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}

/// Top of the y axis: a tenth above the peak so the line clears the frame
fn axis_max(max_value: f64) -> f64 {
    if max_value <= 0.0 {
        return 100.0;
    }
    max_value * 1.1
}

/// Share of the total as a whole percentage, 0 when the total is 0
pub(crate) fn percent_of_total(value: f64, total: f64) -> u32 {
    if total <= 0.0 {
        return 0;
    }
    ((value / total) * 100.0).round() as u32
}

fn slice_color(idx: usize) -> &'static str {
    DOUGHNUT_COLORS[idx % DOUGHNUT_COLORS.len()]
}

/// Legend line for one slice
fn legend_entry(label: &str, value: f64, total: f64) -> String {
    format!(
        "{}: {} ({}%)",
        label,
        format_dollars(value),
        percent_of_total(value, total)
    )
}

/// Angular extent of each slice, clockwise from 12 o'clock.
///
/// Negative values contribute nothing; a non-positive total yields
/// empty slices so the caller can fall back to placeholder text.
fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    const TOP: f64 = -std::f64::consts::FRAC_PI_2;

    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return values.iter().map(|_| (TOP, TOP)).collect();
    }

    let mut start = TOP;
    values
        .iter()
        .map(|v| {
            let sweep = (v.max(0.0) / total) * std::f64::consts::TAU;
            let end = start + sweep;
            let angles = (start, end);
            start = end;
            angles
        })
        .collect()
}

/// Draw the monthly expenses line on canvas
fn draw_line_chart(canvas: &HtmlCanvasElement, series: &ChartSeries) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 70.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.clear_rect(0.0, 0.0, width, height);

    if series.is_empty() {
        ctx.set_fill_style(&MUTED_TEXT.into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No expense data yet", width / 2.0 - 70.0, height / 2.0);
        return;
    }

    // Y axis runs from zero up past the peak
    let y_max = axis_max(series.max_value());

    let x_at = |i: usize| {
        if series.values.len() < 2 {
            margin_left + chart_width / 2.0
        } else {
            margin_left + (i as f64 / (series.values.len() - 1) as f64) * chart_width
        }
    };
    let y_at = |value: f64| margin_top + ((y_max - value) / y_max) * chart_height;

    // Grid lines with dollar ticks
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.set_stroke_style(&"#dee2e6".into());
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&MUTED_TEXT.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format_dollars(value.round()), 5.0, y + 4.0);
    }

    // Translucent fill under the line
    let baseline = y_at(0.0);
    ctx.set_fill_style(&EXPENSE_FILL.into());
    ctx.begin_path();
    ctx.move_to(x_at(0), baseline);
    for (i, &value) in series.values.iter().enumerate() {
        ctx.line_to(x_at(i), y_at(value));
    }
    ctx.line_to(x_at(series.values.len() - 1), baseline);
    ctx.close_path();
    ctx.fill();

    // The line itself
    ctx.set_stroke_style(&EXPENSE_LINE.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, &value) in series.values.iter().enumerate() {
        let x = x_at(i);
        let y = y_at(value);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Data point markers
    ctx.set_fill_style(&EXPENSE_LINE.into());
    for (i, &value) in series.values.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(x_at(i), y_at(value), 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // Month labels along the x axis
    ctx.set_fill_style(&MUTED_TEXT.into());
    ctx.set_font("12px sans-serif");
    for (i, label) in series.labels.iter().enumerate() {
        let _ = ctx.fill_text(label, x_at(i) - 12.0, height - 10.0);
    }
}

/// Draw the category doughnut on canvas
fn draw_doughnut(canvas: &HtmlCanvasElement, series: &ChartSeries) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.clear_rect(0.0, 0.0, width, height);

    if series.is_empty() || series.total() <= 0.0 {
        ctx.set_fill_style(&MUTED_TEXT.into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No spending to break down", width / 2.0 - 90.0, height / 2.0);
        return;
    }

    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let outer_radius = width.min(height) / 2.0 - 10.0;
    // The hole spans 60% of the radius
    let inner_radius = outer_radius * 0.6;

    for (idx, (start, end)) in slice_angles(&series.values).into_iter().enumerate() {
        if end <= start {
            continue;
        }

        ctx.set_fill_style(&slice_color(idx).into());
        ctx.begin_path();
        let _ = ctx.arc(center_x, center_y, outer_radius, start, end);
        let _ = ctx.arc_with_anticlockwise(center_x, center_y, inner_radius, end, start, true);
        ctx.close_path();
        ctx.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP: f64 = -std::f64::consts::FRAC_PI_2;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_slices_cover_the_full_circle() {
        let angles = slice_angles(&[25.0, 25.0, 50.0]);

        assert!(close(angles[0].0, TOP));
        // Contiguous: each slice starts where the previous ended
        assert!(close(angles[1].0, angles[0].1));
        assert!(close(angles[2].0, angles[1].1));
        assert!(close(angles[2].1, TOP + std::f64::consts::TAU));

        let half = angles[2].1 - angles[2].0;
        assert!(close(half, std::f64::consts::PI));
    }

    #[test]
    fn test_zero_total_yields_empty_slices() {
        for (start, end) in slice_angles(&[0.0, 0.0]) {
            assert!(close(start, end));
        }
    }

    #[test]
    fn test_negative_values_contribute_nothing() {
        let angles = slice_angles(&[-10.0, 30.0]);
        assert!(close(angles[0].0, angles[0].1));
        assert!(close(angles[1].1 - angles[1].0, std::f64::consts::TAU));
    }

    #[test]
    fn test_percent_rounds_to_whole() {
        assert_eq!(percent_of_total(25.0, 100.0), 25);
        assert_eq!(percent_of_total(1.0, 3.0), 33);
        assert_eq!(percent_of_total(2.0, 3.0), 67);
        assert_eq!(percent_of_total(50.0, 0.0), 0);
    }

    #[test]
    fn test_palette_cycles_past_ten() {
        assert_eq!(slice_color(0), slice_color(10));
        assert_eq!(slice_color(3), slice_color(13));
    }

    #[test]
    fn test_legend_entry_format() {
        assert_eq!(
            legend_entry("Food", 1234.5, 4938.0),
            "Food: $1,234.50 (25%)"
        );
    }

    #[test]
    fn test_axis_max_starts_above_the_peak() {
        assert_eq!(axis_max(0.0), 100.0);
        assert!(close(axis_max(1000.0), 1100.0));
    }
}
