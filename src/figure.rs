use crate::data::model::{Measurement, Species, Table};
use crate::data::summary::{quantile_sorted, GroupSummary};
use crate::error::RenderError;

/// Number of panels in the composite figure (2 × 2 grid).
pub const PANEL_COUNT: usize = 4;

/// Upper bound on histogram bins, whatever the bin-width rule asks for.
pub const MAX_BINS: usize = 50;

// ---------------------------------------------------------------------------
// Figure model, independent of any drawing backend
// ---------------------------------------------------------------------------

/// Four panels in row-major order: trend, bars, histogram, scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub panels: Vec<Panel>,
    /// Number of table rows the figure was built from.
    pub row_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub chart: Chart,
}

/// A named series of values, one per category on the x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesSeries<T> {
    pub species: Species,
    pub values: Vec<T>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    /// Per-species means across the measurement columns, drawn as lines with markers.
    Trend {
        categories: Vec<Measurement>,
        series: Vec<SpeciesSeries<f64>>,
    },
    /// One bar per species.
    Bars {
        measurement: Measurement,
        bars: Vec<(Species, f64)>,
    },
    /// Histogram with one stacked layer of bin counts per species.
    StackedHistogram {
        measurement: Measurement,
        edges: Vec<f64>,
        layers: Vec<SpeciesSeries<usize>>,
    },
    /// Points colored by species.
    Scatter {
        x: Measurement,
        y: Measurement,
        groups: Vec<SpeciesSeries<[f64; 2]>>,
    },
}

impl Chart {
    /// Whether the chart has anything to draw.
    pub fn is_empty(&self) -> bool {
        match self {
            Chart::Trend { series, .. } => series.iter().all(|s| s.values.is_empty()),
            Chart::Bars { bars, .. } => bars.is_empty(),
            Chart::StackedHistogram { edges, layers, .. } => edges.len() < 2 || layers.is_empty(),
            Chart::Scatter { groups, .. } => groups.iter().all(|g| g.values.is_empty()),
        }
    }
}

impl Figure {
    /// Build the four panels from the table and its per-species means.
    pub fn build(table: &Table, groups: &GroupSummary) -> Self {
        let panels = vec![
            trend_panel(groups),
            bar_panel(groups, Measurement::SepalLength),
            histogram_panel(table, Measurement::PetalLength),
            scatter_panel(table, Measurement::SepalLength, Measurement::PetalLength),
        ];
        Figure {
            panels,
            row_count: table.len(),
        }
    }

    /// Check the figure is drawable: exactly four panels, none of them empty.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.panels.len() != PANEL_COUNT {
            return Err(RenderError::InvalidFigure(format!(
                "expected {PANEL_COUNT} panels, found {}",
                self.panels.len()
            )));
        }
        if let Some(panel) = self.panels.iter().find(|p| p.chart.is_empty()) {
            return Err(RenderError::InvalidFigure(format!(
                "panel '{}' has no data",
                panel.title
            )));
        }
        Ok(())
    }

    /// Species shown in the figure, in legend order.
    pub fn species(&self) -> Vec<Species> {
        let mut order = Vec::new();
        for panel in &self.panels {
            let found: Vec<Species> = match &panel.chart {
                Chart::Trend { series, .. } => series.iter().map(|s| s.species).collect(),
                Chart::Bars { bars, .. } => bars.iter().map(|(s, _)| *s).collect(),
                Chart::StackedHistogram { layers, .. } => layers.iter().map(|l| l.species).collect(),
                Chart::Scatter { groups, .. } => groups.iter().map(|g| g.species).collect(),
            };
            for s in found {
                if !order.contains(&s) {
                    order.push(s);
                }
            }
        }
        order
    }
}

// ---------------------------------------------------------------------------
// Panel builders
// ---------------------------------------------------------------------------

fn trend_panel(groups: &GroupSummary) -> Panel {
    let categories = Measurement::ALL.to_vec();
    let series = groups
        .groups
        .iter()
        .map(|g| SpeciesSeries {
            species: g.species,
            values: categories.iter().map(|&m| g.mean(m)).collect(),
        })
        .collect();

    Panel {
        title: "Average Measurements by Species",
        x_label: "Measurement",
        y_label: "Measurement (cm)",
        chart: Chart::Trend { categories, series },
    }
}

fn bar_panel(groups: &GroupSummary, measurement: Measurement) -> Panel {
    let bars = groups
        .groups
        .iter()
        .map(|g| (g.species, g.mean(measurement)))
        .collect();

    Panel {
        title: "Average Sepal Length by Species",
        x_label: "species",
        y_label: "Sepal Length (cm)",
        chart: Chart::Bars { measurement, bars },
    }
}

fn histogram_panel(table: &Table, measurement: Measurement) -> Panel {
    let values = table.column(measurement);
    let edges = auto_bin_edges(&values);
    log::debug!(
        "{} histogram: {} bins over {} values",
        measurement,
        edges.len().saturating_sub(1),
        values.len()
    );

    let layers = table
        .species_order()
        .into_iter()
        .map(|species| {
            let subset: Vec<f64> = table
                .rows()
                .iter()
                .filter(|f| f.species == species)
                .map(|f| f.measurement(measurement))
                .collect();
            SpeciesSeries {
                species,
                values: bin_counts(&subset, &edges),
            }
        })
        .collect();

    Panel {
        title: "Distribution of Petal Length",
        x_label: "Petal Length (cm)",
        y_label: "Count",
        chart: Chart::StackedHistogram {
            measurement,
            edges,
            layers,
        },
    }
}

fn scatter_panel(table: &Table, x: Measurement, y: Measurement) -> Panel {
    let groups = table
        .species_order()
        .into_iter()
        .map(|species| SpeciesSeries {
            species,
            values: table
                .rows()
                .iter()
                .filter(|f| f.species == species)
                .map(|f| [f.measurement(x), f.measurement(y)])
                .collect(),
        })
        .collect();

    Panel {
        title: "Sepal Length vs Petal Length",
        x_label: "sepal length (cm)",
        y_label: "petal length (cm)",
        chart: Chart::Scatter { x, y, groups },
    }
}

// ---------------------------------------------------------------------------
// Histogram binning
// ---------------------------------------------------------------------------

/// Bin edges chosen the way numpy's `"auto"` rule does: the narrower of the
/// Freedman–Diaconis and Sturges bin widths, falling back to Sturges when
/// the interquartile range is zero. The count is capped at [`MAX_BINS`].
pub fn auto_bin_edges(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let range = max - min;

    if range.abs() < f64::EPSILON {
        return vec![min - 0.5, min + 0.5];
    }

    let n = sorted.len() as f64;
    let sturges = range / (n.log2() + 1.0);
    let iqr = quantile_sorted(&sorted, 0.75) - quantile_sorted(&sorted, 0.25);
    let fd = 2.0 * iqr / n.cbrt();
    let width = if fd > 0.0 { fd.min(sturges) } else { sturges };

    let requested = (range / width).ceil();
    if requested > MAX_BINS as f64 {
        log::debug!("capping {requested} histogram bins at {MAX_BINS}");
    }
    let bins = (requested.min(MAX_BINS as f64) as usize).clamp(1, MAX_BINS);
    let step = range / bins as f64;
    (0..bins)
        .map(|i| min + i as f64 * step)
        .chain(std::iter::once(max))
        .collect()
}

/// Count `values` per bin. Bins are half-open except the last, which also
/// takes values equal to the upper edge. Values outside the edges are ignored.
pub fn bin_counts(values: &[f64], edges: &[f64]) -> Vec<usize> {
    if edges.len() < 2 {
        return Vec::new();
    }
    let bins = edges.len() - 1;
    let mut counts = vec![0; bins];
    for &v in values {
        if v < edges[0] || v > edges[bins] {
            continue;
        }
        // first edge strictly greater than v, minus one
        let idx = edges.partition_point(|&e| e <= v).saturating_sub(1).min(bins - 1);
        counts[idx] += 1;
    }
    counts
}
