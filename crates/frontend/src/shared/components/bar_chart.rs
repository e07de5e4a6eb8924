//! Простая столбчатая диаграмма на SVG

use leptos::prelude::*;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 220.0;
const LABEL_SPACE: f64 = 28.0;
const BAR_GAP: f64 = 0.2;

/// Прямоугольник одного столбца в координатах SVG
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub value: f64,
}

/// Lays out bars scaled to the largest value. Negative and non-finite
/// values are drawn as zero-height bars.
pub fn layout_bars(points: &[(String, f64)], width: f64, height: f64) -> Vec<BarGeometry> {
    if points.is_empty() {
        return Vec::new();
    }
    let plot_height = (height - LABEL_SPACE).max(0.0);
    let max = points
        .iter()
        .map(|(_, v)| if v.is_finite() { *v } else { 0.0 })
        .fold(0.0_f64, f64::max);
    let slot = width / points.len() as f64;
    let bar_width = slot * (1.0 - BAR_GAP);

    points
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let clamped = if value.is_finite() { value.max(0.0) } else { 0.0 };
            let bar_height = if max > 0.0 { clamped / max * plot_height } else { 0.0 };
            BarGeometry {
                x: i as f64 * slot + (slot - bar_width) / 2.0,
                y: plot_height - bar_height,
                width: bar_width,
                height: bar_height,
                label: label.clone(),
                value: *value,
            }
        })
        .collect()
}

/// Показывать подпись не у каждого столбца, чтобы подписи не слипались
fn label_step(count: usize) -> usize {
    (count / 12).max(1)
}

#[component]
pub fn BarChart(
    /// `(подпись, значение)` для каждого столбца
    #[prop(into)]
    points: Signal<Vec<(String, f64)>>,
    /// Форматирование значения во всплывающей подсказке
    format_value: fn(f64) -> String,
    #[prop(optional, into)]
    title: String,
) -> impl IntoView {
    let view_box = format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT);

    view! {
        <div class="bar-chart">
            {(!title.is_empty()).then(|| view! { <div class="bar-chart__title">{title}</div> })}
            {move || {
                let bars = layout_bars(&points.get(), CHART_WIDTH, CHART_HEIGHT);
                if bars.is_empty() {
                    return view! { <div class="bar-chart__empty">"No data for the chart"</div> }.into_any();
                }
                let step = label_step(bars.len());
                view! {
                    <svg class="bar-chart__svg" viewBox=view_box.clone() preserveAspectRatio="none">
                        {bars
                            .into_iter()
                            .enumerate()
                            .map(|(i, bar)| {
                                let tooltip = format!("{}: {}", bar.label, format_value(bar.value));
                                let label_x = bar.x + bar.width / 2.0;
                                let show_label = i % step == 0;
                                view! {
                                    <g class="bar-chart__bar">
                                        <rect
                                            x=bar.x.to_string()
                                            y=bar.y.to_string()
                                            width=bar.width.to_string()
                                            height=bar.height.to_string()
                                        >
                                            <title>{tooltip}</title>
                                        </rect>
                                        {show_label.then(|| view! {
                                            <text
                                                class="bar-chart__label"
                                                x=label_x.to_string()
                                                y=(CHART_HEIGHT - 8.0).to_string()
                                                text-anchor="middle"
                                            >
                                                {bar.label.clone()}
                                            </text>
                                        })}
                                    </g>
                                }
                            })
                            .collect_view()}
                    </svg>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(values: &[f64]) -> Vec<(String, f64)> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("p{}", i), *v))
            .collect()
    }

    #[test]
    fn test_tallest_bar_fills_plot() {
        let bars = layout_bars(&pts(&[50.0, 100.0, 25.0]), 300.0, 128.0);
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[1].height, 100.0);
        assert_eq!(bars[1].y, 0.0);
        assert_eq!(bars[0].height, 50.0);
        assert_eq!(bars[2].height, 25.0);
        assert!(bars[0].x < bars[1].x && bars[1].x < bars[2].x);
    }

    #[test]
    fn test_all_zero_and_negative() {
        let bars = layout_bars(&pts(&[0.0, -5.0, f64::NAN]), 300.0, 128.0);
        assert!(bars.iter().all(|b| b.height == 0.0));
        assert!(layout_bars(&[], 300.0, 128.0).is_empty());
    }

    #[test]
    fn test_label_step() {
        assert_eq!(label_step(5), 1);
        assert_eq!(label_step(30), 2);
        assert_eq!(label_step(90), 7);
    }
}
