//! Chart Component
//!
//! Scatter/line time-series chart using HTML5 Canvas, with the annotation
//! overlay drawn on top. Scale and layout math lives in `fuelscope::chart`;
//! this module only pushes pixels.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use fuelscope::chart::{ChartLayout, LinearScale, TimeScale, Tooltip, CHART_MARGIN, POINT_RADIUS};
use fuelscope::dataset::{Family, Series, SeriesPoint};
use fuelscope::story::Annotation;

use crate::state::{GlobalState, TooltipState};

/// Fixed canvas size; annotation anchors are calibrated against it
pub const CANVAS_WIDTH: u32 = 1250;
pub const CANVAS_HEIGHT: u32 = 500;

/// Scatter point fill
const POINT_COLOR: &str = "#e3de56";
/// Series line stroke
const LINE_COLOR: &str = "#000000";
/// Axis and tick color
const AXIS_COLOR: &str = "#333333";
/// Annotation callout circle radius
const CALLOUT_RADIUS: f64 = 5.0;
/// Annotation label wrap width in pixels
const LABEL_WRAP_WIDTH: f64 = 200.0;

/// Time-series chart component
#[component]
pub fn Chart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();
    let hovering = create_rw_signal(false);

    // Redraw when the series, family, or overlay changes
    let state_for_draw = state.clone();
    create_effect(move |_| {
        let family = state_for_draw.sequencer.get().family();
        let annotations = state_for_draw.annotations.get();

        if let Some(canvas) = canvas_ref.get() {
            state_for_draw.store.with(|store| {
                draw_chart(&canvas, store.get(family), family, &annotations);
            });
        }
    });

    let state_for_hover = state.clone();
    let on_mousemove = move |ev: MouseEvent| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        // Pointer position in canvas pixels, compensating for CSS scaling
        let rect = canvas.get_bounding_client_rect();
        let scale_x = CANVAS_WIDTH as f64 / rect.width();
        let scale_y = CANVAS_HEIGHT as f64 / rect.height();
        let x = (ev.client_x() as f64 - rect.left()) * scale_x;
        let y = (ev.client_y() as f64 - rect.top()) * scale_y;

        let family = state_for_hover.sequencer.get_untracked().family();
        let hit = state_for_hover
            .store
            .with_untracked(|store| store.get(family).and_then(|s| hit_point(s, family, x, y)));

        match hit {
            Some(point) => {
                let text = Tooltip::new(point.date, point.value, family.unit());
                hovering.set(true);
                state_for_hover.tooltip.set(Some(TooltipState {
                    page_x: ev.page_x() as f64,
                    page_y: ev.page_y() as f64 - 0.7 * CHART_MARGIN,
                    date_line: text.date_line,
                    value_line: text.value_line,
                }));
            }
            None => {
                hovering.set(false);
                state_for_hover.tooltip.set(None);
            }
        }
    };

    let state_for_leave = state;
    let on_mouseleave = move |_| {
        hovering.set(false);
        state_for_leave.tooltip.set(None);
    };

    view! {
        <canvas
            node_ref=canvas_ref
            width=CANVAS_WIDTH
            height=CANVAS_HEIGHT
            class="chart-canvas"
            style=move || if hovering.get() { "cursor: help;" } else { "cursor: default;" }
            on:mousemove=on_mousemove
            on:mouseleave=on_mouseleave
        />
    }
}

/// Build the layout and scales for a series
fn geometry(series: &Series, family: Family) -> Option<(ChartLayout, TimeScale, LinearScale)> {
    let layout = ChartLayout::new(CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
    let extent = series.date_extent()?;
    let x_scale = TimeScale::new(extent, layout.plot_width());
    let y_scale = LinearScale::new(family.y_max(), layout.plot_height());
    Some((layout, x_scale, y_scale))
}

/// Find the plotted point under the pointer, if any
fn hit_point(series: &Series, family: Family, x: f64, y: f64) -> Option<SeriesPoint> {
    let (layout, x_scale, y_scale) = geometry(series, family)?;
    let pointer = layout.to_plot(x, y);

    series
        .points()
        .iter()
        .find(|p| layout.hits_point(pointer, (x_scale.position(p.date), y_scale.position(p.value))))
        .copied()
}

/// Draw the full chart: axes, series, and annotation overlay
fn draw_chart(
    canvas: &HtmlCanvasElement,
    series: Option<&Series>,
    family: Family,
    annotations: &[Annotation],
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

    // Clear canvas
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, width, height);

    let geo = series.and_then(|s| geometry(s, family).map(|g| (s, g)));
    let (series, (layout, x_scale, y_scale)) = match geo {
        Some(pair) => pair,
        None => {
            // Load failure or empty file: render the no-data state
            ctx.set_fill_style_str("#6b7280");
            ctx.set_font("16px Helvetica");
            let _ = ctx.fill_text("No data available", width / 2.0 - 70.0, height / 2.0);
            return;
        }
    };

    draw_axes(&ctx, &layout, &x_scale, &y_scale, family);
    draw_series(&ctx, &layout, &x_scale, &y_scale, series);

    for annotation in annotations {
        draw_annotation(&ctx, &layout, annotation);
    }
}

/// Axes, tick marks, tick labels, and axis captions
fn draw_axes(
    ctx: &CanvasRenderingContext2d,
    layout: &ChartLayout,
    x_scale: &TimeScale,
    y_scale: &LinearScale,
    family: Family,
) {
    let margin = layout.margin;
    let plot_w = layout.plot_width();
    let plot_h = layout.plot_height();

    ctx.set_stroke_style_str(AXIS_COLOR);
    ctx.set_fill_style_str(AXIS_COLOR);
    ctx.set_line_width(1.0);
    ctx.set_font("12px Helvetica");

    // Axis lines
    ctx.begin_path();
    ctx.move_to(margin, margin);
    ctx.line_to(margin, margin + plot_h);
    ctx.line_to(margin + plot_w, margin + plot_h);
    ctx.stroke();

    // Y ticks
    for value in y_scale.ticks(5) {
        let (tx, ty) = layout.to_canvas(0.0, y_scale.position(value));
        ctx.begin_path();
        ctx.move_to(tx - 6.0, ty);
        ctx.line_to(tx, ty);
        ctx.stroke();
        let _ = ctx.fill_text(&format!("{:.1}", value), tx - 40.0, ty + 4.0);
    }

    // X ticks
    for date in x_scale.ticks(6) {
        let (tx, ty) = layout.to_canvas(x_scale.position(date), plot_h);
        ctx.begin_path();
        ctx.move_to(tx, ty);
        ctx.line_to(tx, ty + 6.0);
        ctx.stroke();
        let _ = ctx.fill_text(&tick_label(date), tx - 18.0, ty + 20.0);
    }

    // X caption
    ctx.set_font("14px Helvetica");
    let _ = ctx.fill_text("Date", margin + plot_w / 2.0, layout.height - 10.0);

    // Y caption, rotated
    ctx.save();
    let _ = ctx.translate(20.0, margin + plot_h / 2.0);
    let _ = ctx.rotate(-std::f64::consts::FRAC_PI_2);
    ctx.set_text_align("center");
    let _ = ctx.fill_text(family.unit().axis_label(), 0.0, 0.0);
    ctx.restore();
}

/// The connecting line and the scatter points
fn draw_series(
    ctx: &CanvasRenderingContext2d,
    layout: &ChartLayout,
    x_scale: &TimeScale,
    y_scale: &LinearScale,
    series: &Series,
) {
    // Line first so the points sit on top
    ctx.set_stroke_style_str(LINE_COLOR);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in series.points().iter().enumerate() {
        let (x, y) = layout.to_canvas(x_scale.position(point.date), y_scale.position(point.value));
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    ctx.set_fill_style_str(POINT_COLOR);
    for point in series.points() {
        let (x, y) = layout.to_canvas(x_scale.position(point.date), y_scale.position(point.value));
        ctx.begin_path();
        let _ = ctx.arc(x, y, POINT_RADIUS, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
}

/// One annotation callout: circled anchor, connector line, wrapped label
fn draw_annotation(ctx: &CanvasRenderingContext2d, layout: &ChartLayout, annotation: &Annotation) {
    let color = annotation.emphasis.color();
    let (ax, ay) = layout.to_canvas(annotation.x, annotation.y);
    let (lx, ly) = (ax + annotation.dx, ay + annotation.dy);

    ctx.set_stroke_style_str(color);
    ctx.set_fill_style_str(color);
    ctx.set_line_width(1.5);

    // Circle around the anchor
    ctx.begin_path();
    let _ = ctx.arc(ax, ay, CALLOUT_RADIUS, 0.0, std::f64::consts::PI * 2.0);
    ctx.stroke();

    // Connector from the label to the circle's edge
    let dist = (annotation.dx * annotation.dx + annotation.dy * annotation.dy).sqrt();
    if dist > CALLOUT_RADIUS {
        let (ux, uy) = (annotation.dx / dist, annotation.dy / dist);
        let (ex, ey) = (ax + ux * CALLOUT_RADIUS, ay + uy * CALLOUT_RADIUS);

        ctx.begin_path();
        ctx.move_to(lx, ly);
        ctx.line_to(ex, ey);
        ctx.stroke();

        // Arrowhead at the circle end
        let angle = uy.atan2(ux) + std::f64::consts::PI;
        let spread = 0.4;
        ctx.begin_path();
        ctx.move_to(ex, ey);
        ctx.line_to(ex + 8.0 * (angle - spread).cos(), ey + 8.0 * (angle - spread).sin());
        ctx.move_to(ex, ey);
        ctx.line_to(ex + 8.0 * (angle + spread).cos(), ey + 8.0 * (angle + spread).sin());
        ctx.stroke();
    }

    // Wrapped label, offset slightly past the connector end
    ctx.set_font("13px Helvetica");
    ctx.set_text_align("center");
    let line_height = 15.0;
    let start_y = if annotation.dy < 0.0 {
        ly - line_height
    } else {
        ly + line_height
    };
    for (i, line) in wrap_text(ctx, annotation.label, LABEL_WRAP_WIDTH).iter().enumerate() {
        let _ = ctx.fill_text(line, lx, start_y + i as f64 * line_height);
    }
    ctx.set_text_align("start");
}

/// Word-wrap a label to a pixel width using canvas text metrics
fn wrap_text(ctx: &CanvasRenderingContext2d, text: &str, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        let fits = ctx
            .measure_text(&candidate)
            .map(|m| m.width() <= max_width)
            .unwrap_or(true);

        if fits {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(current);
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// X tick label: abbreviated month and two-digit year
fn tick_label(date: chrono::NaiveDate) -> String {
    date.format("%b-%y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_label() {
        let date = chrono::NaiveDate::from_ymd_opt(2013, 1, 1).unwrap();
        assert_eq!(tick_label(date), "Jan-13");
    }
}
