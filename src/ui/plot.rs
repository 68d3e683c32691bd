use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints, Points};

use crate::color::ColorMap;
use crate::figure::{Chart, Panel, SpeciesSeries};

// ---------------------------------------------------------------------------
// One figure panel
// ---------------------------------------------------------------------------

/// Render a single panel's chart at the given height.
pub fn panel_plot(ui: &mut Ui, index: usize, panel: &Panel, colors: &ColorMap, height: f32) {
    let plot = Plot::new(format!("figure_panel_{index}"))
        .legend(Legend::default())
        .x_axis_label(panel.x_label)
        .y_axis_label(panel.y_label)
        .height(height)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true);

    match &panel.chart {
        Chart::Trend { categories, series } => {
            let labels: Vec<String> = categories.iter().map(|m| m.label().to_owned()).collect();
            plot.x_axis_formatter(move |mark, _range| category_label(&labels, mark))
                .show(ui, |plot_ui| {
                    for s in series {
                        let color = colors.color_for(s.species);
                        let points: Vec<[f64; 2]> = s
                            .values
                            .iter()
                            .enumerate()
                            .map(|(i, &v)| [i as f64, v])
                            .collect();
                        plot_ui.line(
                            Line::new(PlotPoints::from(points.clone()))
                                .name(s.species)
                                .color(color)
                                .width(2.0),
                        );
                        plot_ui.points(
                            Points::new(PlotPoints::from(points))
                                .name(s.species)
                                .color(color)
                                .radius(4.0),
                        );
                    }
                });
        }
        Chart::Bars { bars, .. } => {
            let labels: Vec<String> = bars.iter().map(|(s, _)| s.to_string()).collect();
            plot.x_axis_formatter(move |mark, _range| category_label(&labels, mark))
                .include_y(0.0)
                .show(ui, |plot_ui| {
                    for (i, (species, mean)) in bars.iter().enumerate() {
                        let bar = Bar::new(i as f64, *mean).width(0.6).name(species);
                        plot_ui.bar_chart(
                            BarChart::new(vec![bar])
                                .name(species)
                                .color(colors.color_for(*species))
                                .element_formatter(Box::new(|bar, _chart| {
                                    format!("{}\nmean: {:.3} cm", bar.name, bar.value)
                                })),
                        );
                    }
                });
        }
        Chart::StackedHistogram { edges, layers, .. } => {
            let charts = stacked_histogram(edges, layers, colors);
            plot.include_y(0.0).show(ui, |plot_ui| {
                for chart in charts {
                    plot_ui.bar_chart(chart);
                }
            });
        }
        Chart::Scatter { groups, .. } => {
            plot.show(ui, |plot_ui| {
                for g in groups {
                    plot_ui.points(
                        Points::new(PlotPoints::from(g.values.clone()))
                            .name(g.species)
                            .color(colors.color_for(g.species))
                            .radius(3.0),
                    );
                }
            });
        }
    }
}

/// One bar chart per species layer, each stacked on the layers before it.
fn stacked_histogram(
    edges: &[f64],
    layers: &[SpeciesSeries<usize>],
    colors: &ColorMap,
) -> Vec<BarChart> {
    let mut charts: Vec<BarChart> = Vec::with_capacity(layers.len());
    for layer in layers {
        let bars: Vec<Bar> = edges
            .windows(2)
            .zip(&layer.values)
            .map(|(edge, &count)| {
                Bar::new((edge[0] + edge[1]) / 2.0, count as f64).width(edge[1] - edge[0])
            })
            .collect();

        let chart = BarChart::new(bars)
            .name(layer.species)
            .color(colors.color_for(layer.species));
        let chart = {
            let below: Vec<&BarChart> = charts.iter().collect();
            chart.stack_on(&below)
        };
        charts.push(chart);
    }
    charts
}

/// Axis label for integer grid marks that index into `labels`.
fn category_label(labels: &[String], mark: GridMark) -> String {
    let rounded = mark.value.round();
    if (mark.value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}
