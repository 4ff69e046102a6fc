use dioxus::prelude::*;

use crate::domain::{ChartGeometry, CHART_HEIGHT, CHART_PADDING, CHART_WIDTH};

/// Inline SVG line chart for one market's forecast series.
#[component]
pub fn TrendChart(market_name: String, color: String, geometry: ChartGeometry) -> Element {
    let mut hovered = use_signal(|| None::<usize>);

    let axis_top = CHART_PADDING;
    let axis_left = CHART_PADDING;
    let axis_bottom = CHART_HEIGHT - CHART_PADDING;
    let axis_right = CHART_WIDTH - CHART_PADDING;
    let month_label_y = axis_bottom + 20.0;

    let y_ticks: Vec<(f64, f64, String)> = geometry
        .y_ticks
        .iter()
        .map(|tick| (axis_left - 5.0, tick.y + 4.0, tick.label.clone()))
        .collect();

    let month_labels: Vec<(f64, String, String)> = geometry
        .points
        .iter()
        .map(|point| {
            (
                point.x,
                format!("rotate(45, {}, {month_label_y})", point.x),
                point.label.clone(),
            )
        })
        .collect();

    let markers: Vec<(usize, f64, f64, f64)> = geometry
        .points
        .iter()
        .enumerate()
        .map(|(index, point)| (index, point.x, point.y, point.cost))
        .collect();

    let tooltip = hovered().and_then(|index| {
        geometry.points.get(index).map(|point| {
            (
                point.x - 45.0,
                point.y - 30.0,
                point.x,
                point.y - 16.0,
                format!("${:.2} AUD", point.cost),
            )
        })
    });

    rsx! {
        div {
            class: "space-y-2",
            h3 { class: "text-sm font-semibold text-slate-200", "{market_name}" }
            svg {
                width: "{CHART_WIDTH}",
                height: "{CHART_HEIGHT}",
                view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                class: "max-w-full",

                // Axes
                line {
                    x1: "{axis_left}", y1: "{axis_top}",
                    x2: "{axis_left}", y2: "{axis_bottom}",
                    stroke: "#475569", stroke_width: "1",
                }
                line {
                    x1: "{axis_left}", y1: "{axis_bottom}",
                    x2: "{axis_right}", y2: "{axis_bottom}",
                    stroke: "#475569", stroke_width: "1",
                }

                // Cost labels at min/mid/max
                for (x, y, label) in y_ticks {
                    text {
                        x: "{x}",
                        y: "{y}",
                        text_anchor: "end",
                        font_size: "12",
                        fill: "#94a3b8",
                        "{label}"
                    }
                }

                // Rotated month labels
                for (x, transform, label) in month_labels {
                    text {
                        x: "{x}",
                        y: "{month_label_y}",
                        text_anchor: "middle",
                        font_size: "10",
                        fill: "#94a3b8",
                        transform: "{transform}",
                        "{label}"
                    }
                }

                path {
                    d: "{geometry.line_path}",
                    fill: "none",
                    stroke: "{color}",
                    stroke_width: "2",
                }

                for (index, x, y, _cost) in markers {
                    circle {
                        cx: "{x}",
                        cy: "{y}",
                        r: if hovered() == Some(index) { "6" } else { "4" },
                        fill: "{color}",
                        onmouseenter: move |_| hovered.set(Some(index)),
                        onmouseleave: move |_| hovered.set(None),
                    }
                }

                if let Some((rect_x, rect_y, text_x, text_y, label)) = tooltip {
                    rect {
                        x: "{rect_x}",
                        y: "{rect_y}",
                        width: "90",
                        height: "20",
                        rx: "4",
                        fill: "#0f172a",
                        stroke: "{color}",
                    }
                    text {
                        x: "{text_x}",
                        y: "{text_y}",
                        text_anchor: "middle",
                        font_size: "12",
                        fill: "#e2e8f0",
                        "{label}"
                    }
                }
            }
        }
    }
}
