//! Chart Component
//!
//! Yearly time-series line chart using HTML5 Canvas. Event years get a
//! highlighted marker and a dashed reference line; hovering shows a tooltip.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use econboard::dashboard::ChartSpec;
use econboard::series::{mock_series, ChartLayout, TimeSeriesPoint, DEFAULT_SPAN_YEARS};

const CANVAS_WIDTH: u32 = 800;

const BACKGROUND: &str = "#1f2937"; // gray-800
const GRID: &str = "#374151"; // gray-700
const AXIS_TEXT: &str = "#9ca3af"; // gray-400
const EVENT_FILL: &str = "#FFD93D";
const EVENT_STROKE: &str = "#FF4757";

/// Minimum horizontal pixels between x-axis labels
const LABEL_SPACING: f64 = 40.0;

/// Time-series chart component
#[component]
pub fn TimeSeriesChart(
    spec: ChartSpec,
    /// Points to plot; a generated 20-year series when absent
    #[prop(optional)]
    data: Option<Vec<TimeSeriesPoint>>,
) -> impl IntoView {
    let points = store_value(data.unwrap_or_else(|| mock_series(DEFAULT_SPAN_YEARS)));
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (hovered, set_hovered) = create_signal(None::<usize>);

    let height = spec.height;
    let color = spec.color;

    // Redraw on mount and whenever the hovered point moves
    create_effect(move |_| {
        let hover = hovered.get();
        if let Some(canvas) = canvas_ref.get() {
            points.with_value(|points| draw_chart(&canvas, points, color, hover));
        }
    });

    let on_mouse_move = move |ev: MouseEvent| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let x = canvas_x(&canvas, ev.offset_x() as f64);
        let index = points.with_value(|points| {
            ChartLayout::new(points, canvas.width() as f64, canvas.height() as f64).nearest_index(x)
        });
        set_hovered.set(index);
    };

    let unit = spec.unit;

    view! {
        <div class="chart-container relative">
            <h3 class="text-lg font-semibold mb-4">{spec.title}</h3>
            <canvas
                node_ref=canvas_ref
                width=CANVAS_WIDTH.to_string()
                height=height.to_string()
                class="w-full rounded-lg"
                on:mousemove=on_mouse_move
                on:mouseleave=move |_| set_hovered.set(None)
            />

            // Tooltip
            {move || {
                hovered.get()
                    .and_then(|idx| points.with_value(|p| p.get(idx).cloned()))
                    .map(|point| view! {
                        <div class="absolute top-12 right-4 bg-gray-900 border border-gray-700 rounded-lg p-3 shadow-lg text-sm">
                            <p class="font-semibold">{point.period.clone()}</p>
                            <p class="text-primary">{tooltip_value(point.value, unit)}</p>
                            {point.event.clone().map(|event| view! {
                                <p class="text-xs text-decline mt-1">{format!("📍 {}", event)}</p>
                            })}
                        </div>
                    })
            }}
        </div>
    }
}

/// Convert a CSS-pixel offset into canvas coordinates
fn canvas_x(canvas: &HtmlCanvasElement, offset_x: f64) -> f64 {
    let client_width = canvas.client_width() as f64;
    if client_width > 0.0 {
        offset_x * canvas.width() as f64 / client_width
    } else {
        offset_x
    }
}

fn tooltip_value(value: f64, unit: &str) -> String {
    format!("value: {}{}", value, unit)
}

/// Draw the chart on canvas
fn draw_chart(
    canvas: &HtmlCanvasElement,
    points: &[TimeSeriesPoint],
    color: &str,
    hovered: Option<usize>,
) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let layout = ChartLayout::new(points, width, height);

    // Clear canvas
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if points.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 30.0, height / 2.0);
        return;
    }

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for value in layout.y_ticks(5) {
        let y = layout.y(value);
        ctx.begin_path();
        ctx.move_to(layout.margins.left, y);
        ctx.line_to(width - layout.margins.right, y);
        ctx.stroke();

        ctx.set_fill_style(&AXIS_TEXT.into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // X-axis labels
    let step = layout.label_step(LABEL_SPACING);
    ctx.set_fill_style(&AXIS_TEXT.into());
    for (i, point) in points.iter().enumerate().step_by(step) {
        let _ = ctx.fill_text(&point.period, layout.x(i) - 14.0, height - 10.0);
    }

    // Event reference lines
    let dash = js_sys::Array::of2(&5.0.into(), &5.0.into());
    let _ = ctx.set_line_dash(&dash);
    ctx.set_stroke_style(&EVENT_FILL.into());
    for (i, _) in points.iter().enumerate().filter(|(_, p)| p.has_event()) {
        let x = layout.x(i);
        ctx.begin_path();
        ctx.move_to(x, layout.margins.top);
        ctx.line_to(x, height - layout.margins.bottom);
        ctx.stroke();
    }
    let _ = ctx.set_line_dash(&js_sys::Array::new());

    // Hover guide
    if let Some(i) = hovered.filter(|i| *i < points.len()) {
        ctx.set_stroke_style(&GRID.into());
        let x = layout.x(i);
        ctx.begin_path();
        ctx.move_to(x, layout.margins.top);
        ctx.line_to(x, height - layout.margins.bottom);
        ctx.stroke();
    }

    // Series line
    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(3.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        let (x, y) = (layout.x(i), layout.y(point.value));
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Points
    ctx.set_line_width(2.0);
    for (i, point) in points.iter().enumerate() {
        let (x, y) = (layout.x(i), layout.y(point.value));
        ctx.begin_path();
        if point.has_event() {
            let _ = ctx.arc(x, y, 6.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.set_fill_style(&EVENT_FILL.into());
            ctx.fill();
            ctx.set_stroke_style(&EVENT_STROKE.into());
            ctx.stroke();
        } else {
            let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.set_fill_style(&color.into());
            ctx.fill();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_value() {
        assert_eq!(tooltip_value(62.5, "%"), "value: 62.5%");
        assert_eq!(tooltip_value(48.0, ""), "value: 48");
    }
}
