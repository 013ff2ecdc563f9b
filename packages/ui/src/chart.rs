//! Bar chart of response counts per area.
//!
//! [`ChartRenderer`] owns the single chart instance. Every update
//! discards the previous [`BarChart`] and builds a fresh one from the
//! full response set, so no stale series can survive a re-aggregation;
//! redraw work is proportional to the set size, which stays small.

use dioxus::prelude::*;
use store::aggregate::count_by_area;
use store::ResponseDoc;

/// One bar: area display name and response count.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: usize,
}

/// An immutable chart: built whole, never mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    bars: Vec<Bar>,
    max: usize,
    generation: u64,
}

impl BarChart {
    fn build(responses: &[ResponseDoc], generation: u64) -> Self {
        let bars: Vec<Bar> = count_by_area(responses)
            .into_iter()
            .map(|(area, count)| Bar {
                label: area.display_name().to_string(),
                value: count,
            })
            .collect();
        let max = bars.iter().map(|b| b.value).max().unwrap_or(0);
        Self {
            bars,
            max,
            generation,
        }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Which rebuild produced this chart.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Owner of the one live chart instance.
#[derive(Debug, Default)]
pub struct ChartRenderer {
    chart: Option<BarChart>,
    generation: u64,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the chart with one rebuilt from the full set.
    pub fn update(&mut self, responses: &[ResponseDoc]) -> &BarChart {
        // The previous instance is dropped before the new one is drawn.
        self.chart = None;
        self.generation += 1;
        self.chart
            .insert(BarChart::build(responses, self.generation))
    }

    pub fn chart(&self) -> Option<&BarChart> {
        self.chart.as_ref()
    }
}

/// SVG rendering of a [`BarChart`].
#[component]
pub fn ResponseChart(chart: BarChart) -> Element {
    let bar_width = 60.0;
    let gap = 20.0;
    let plot_height = 120.0;
    let label_band = 18.0;
    let width = (chart.bars().len() as f64) * (bar_width + gap) + gap;
    let max = chart.max().max(1) as f64;

    rsx! {
        svg {
            class: "response-chart",
            view_box: "0 0 {width} {plot_height + label_band}",
            width: "{width}",
            height: "{plot_height + label_band}",
            role: "img",

            for (i, bar) in chart.bars().iter().enumerate() {
                {
                    let height = (bar.value as f64 / max) * (plot_height - 20.0);
                    let x = gap + (i as f64) * (bar_width + gap);
                    let y = plot_height - height;
                    rsx! {
                        rect {
                            x: "{x}",
                            y: "{y}",
                            width: "{bar_width}",
                            height: "{height}",
                            fill: "rgba(75, 192, 192, 0.6)",
                        }
                        text {
                            x: "{x + bar_width / 2.0}",
                            y: "{y - 6.0}",
                            text_anchor: "middle",
                            font_size: "12",
                            "{bar.value}"
                        }
                        text {
                            x: "{x + bar_width / 2.0}",
                            y: "{plot_height + 14.0}",
                            text_anchor: "middle",
                            font_size: "11",
                            "{bar.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::models::{Answers, Area};

    fn response(area: Area) -> ResponseDoc {
        ResponseDoc {
            user_id: "u1".to_string(),
            email: "u1@example.com".to_string(),
            area,
            answers: Answers::new(),
            submitted_at: 0,
        }
    }

    #[test]
    fn test_every_update_rebuilds_the_chart_from_scratch() {
        let mut renderer = ChartRenderer::new();
        assert!(renderer.chart().is_none());

        let mut set = vec![
            response(Area::Student),
            response(Area::Student),
            response(Area::Creator),
        ];
        let first = renderer.update(&set).clone();
        assert_eq!(first.generation(), 1);
        assert_eq!(
            first
                .bars()
                .iter()
                .map(|b| (b.label.as_str(), b.value))
                .collect::<Vec<_>>(),
            vec![("Estudante", 2), ("Criador de Conteúdo", 1)]
        );

        set.push(response(Area::Student));
        let second = renderer.update(&set).clone();
        // A new instance, not a mutation of the old one.
        assert_eq!(second.generation(), 2);
        assert_eq!(second.bars()[0].value, 3);
        assert_eq!(first.bars()[0].value, 2);
    }

    #[test]
    fn test_max_tracks_the_tallest_bar() {
        let mut renderer = ChartRenderer::new();
        let chart = renderer.update(&[response(Area::Personal)]);
        assert_eq!(chart.max(), 1);

        let empty = renderer.update(&[]);
        assert_eq!(empty.max(), 0);
        assert!(empty.bars().is_empty());
    }
}
