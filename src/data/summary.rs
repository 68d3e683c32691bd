use super::model::{Measurement, Species, Table};

// ---------------------------------------------------------------------------
// Descriptive statistics for one numeric column
// ---------------------------------------------------------------------------

/// Count, mean, sample standard deviation, min, quartiles and max.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: f64,
    /// Uses the n - 1 denominator; NaN for a single value.
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl ColumnStats {
    /// Describe `values`. Returns `None` for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = mean(&sorted);
        let std = if count > 1 {
            let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        } else {
            f64::NAN
        };

        Some(ColumnStats {
            count,
            mean,
            std,
            min: sorted[0],
            q1: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q3: quantile_sorted(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }

    /// The statistics in `describe` row order, paired with their row labels.
    pub fn rows(&self) -> [(&'static str, f64); 8] {
        [
            ("count", self.count as f64),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.q1),
            ("50%", self.median),
            ("75%", self.q3),
            ("max", self.max),
        ]
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Quantile by linear interpolation between the two closest ranks.
/// `sorted` must be non-empty and ascending.
pub(crate) fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = (sorted.len() - 1) as f64 * q;
    let lo = pos.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    let frac = pos - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

// ---------------------------------------------------------------------------
// Overall statistics and per-species means
// ---------------------------------------------------------------------------

/// Dataset-wide statistics for every measurement column.
#[derive(Debug, Clone, PartialEq)]
pub struct OverallStats {
    pub columns: Vec<(Measurement, ColumnStats)>,
}

impl OverallStats {
    pub fn get(&self, m: Measurement) -> Option<&ColumnStats> {
        self.columns
            .iter()
            .find(|(col, _)| *col == m)
            .map(|(_, stats)| stats)
    }
}

/// Mean of each measurement for one species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesMeans {
    pub species: Species,
    pub count: usize,
    /// Indexed by [`Measurement::index`].
    pub means: [f64; 4],
}

impl SpeciesMeans {
    pub fn mean(&self, m: Measurement) -> f64 {
        self.means[m.index()]
    }
}

/// Per-species means, in the order species first appear in the table.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub groups: Vec<SpeciesMeans>,
}

impl GroupSummary {
    pub fn mean(&self, species: Species, m: Measurement) -> Option<f64> {
        self.get(species).map(|g| g.mean(m))
    }

    pub fn get(&self, species: Species) -> Option<&SpeciesMeans> {
        self.groups.iter().find(|g| g.species == species)
    }

    pub fn species(&self) -> Vec<Species> {
        self.groups.iter().map(|g| g.species).collect()
    }
}

/// Compute the overall statistics and the per-species means of `table`.
pub fn summarize(table: &Table) -> (OverallStats, GroupSummary) {
    let columns = Measurement::ALL
        .into_iter()
        .filter_map(|m| ColumnStats::from_values(&table.column(m)).map(|s| (m, s)))
        .collect();

    (OverallStats { columns }, group_means(table))
}

fn group_means(table: &Table) -> GroupSummary {
    // (species, count, running sums) in first-seen order
    let mut acc: Vec<(Species, usize, [f64; 4])> = Vec::new();
    for flower in table.rows() {
        let idx = match acc.iter().position(|(s, _, _)| *s == flower.species) {
            Some(idx) => idx,
            None => {
                acc.push((flower.species, 0, [0.0; 4]));
                acc.len() - 1
            }
        };
        let (_, count, sums) = &mut acc[idx];
        *count += 1;
        for (sum, v) in sums.iter_mut().zip(flower.measurements()) {
            *sum += v;
        }
    }

    let groups = acc
        .into_iter()
        .map(|(species, count, sums)| SpeciesMeans {
            species,
            count,
            means: sums.map(|s| s / count as f64),
        })
        .collect();

    GroupSummary { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{load, DatasetSource};
    use crate::data::model::Flower;
    use approx::assert_relative_eq;

    fn iris() -> Table {
        load(&DatasetSource::bundled()).unwrap()
    }

    #[test]
    fn quantiles_interpolate_linearly() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(quantile_sorted(&sorted, 0.0), 1.0);
        assert_relative_eq!(quantile_sorted(&sorted, 0.25), 1.75);
        assert_relative_eq!(quantile_sorted(&sorted, 0.5), 2.5);
        assert_relative_eq!(quantile_sorted(&sorted, 0.75), 3.25);
        assert_relative_eq!(quantile_sorted(&sorted, 1.0), 4.0);
    }

    #[test]
    fn column_stats_on_small_input() {
        let stats = ColumnStats::from_values(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.count, 4);
        assert_relative_eq!(stats.mean, 2.5);
        assert_relative_eq!(stats.std, (5.0f64 / 3.0).sqrt());
        assert_relative_eq!(stats.min, 1.0);
        assert_relative_eq!(stats.median, 2.5);
        assert_relative_eq!(stats.max, 4.0);
    }

    #[test]
    fn single_value_has_undefined_std() {
        let stats = ColumnStats::from_values(&[2.0]).unwrap();
        assert!(stats.std.is_nan());
        assert_relative_eq!(stats.q1, 2.0);
        assert_relative_eq!(stats.q3, 2.0);
        assert!(ColumnStats::from_values(&[]).is_none());
    }

    #[test]
    fn iris_overall_statistics() {
        let (overall, _) = summarize(&iris());
        assert_eq!(overall.columns.len(), 4);

        let sl = overall.get(Measurement::SepalLength).unwrap();
        assert_eq!(sl.count, 150);
        assert_relative_eq!(sl.mean, 5.843333, epsilon = 1e-6);
        assert_relative_eq!(sl.std, 0.828066, epsilon = 1e-6);
        assert_relative_eq!(sl.min, 4.3, epsilon = 1e-9);
        assert_relative_eq!(sl.q1, 5.1, epsilon = 1e-9);
        assert_relative_eq!(sl.median, 5.8, epsilon = 1e-9);
        assert_relative_eq!(sl.q3, 6.4, epsilon = 1e-9);
        assert_relative_eq!(sl.max, 7.9, epsilon = 1e-9);

        let pl = overall.get(Measurement::PetalLength).unwrap();
        assert_relative_eq!(pl.mean, 3.758, epsilon = 1e-6);
        assert_relative_eq!(pl.median, 4.35, epsilon = 1e-9);

        let pw = overall.get(Measurement::PetalWidth).unwrap();
        assert_relative_eq!(pw.std, 0.762238, epsilon = 1e-6);
    }

    #[test]
    fn iris_species_means() {
        let (_, groups) = summarize(&iris());
        assert_eq!(groups.species(), Species::ALL.to_vec());

        let expected = [
            (Species::Setosa, [5.006, 3.428, 1.462, 0.246]),
            (Species::Versicolor, [5.936, 2.770, 4.260, 1.326]),
            (Species::Virginica, [6.588, 2.974, 5.552, 2.026]),
        ];
        for (species, means) in expected {
            let group = groups.get(species).unwrap();
            assert_eq!(group.count, 50);
            for m in Measurement::ALL {
                assert_relative_eq!(group.mean(m), means[m.index()], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn group_mean_on_synthetic_fixture() {
        let table = Table::new(vec![
            Flower::new([1.0, 1.0, 1.0, 1.0], Species::Setosa),
            Flower::new([2.0, 1.0, 1.0, 1.0], Species::Setosa),
            Flower::new([3.0, 1.0, 1.0, 1.0], Species::Setosa),
            Flower::new([10.0, 4.0, 6.0, 8.0], Species::Virginica),
        ])
        .unwrap();
        let (_, groups) = summarize(&table);
        assert_eq!(groups.species(), vec![Species::Setosa, Species::Virginica]);
        assert_relative_eq!(
            groups.mean(Species::Setosa, Measurement::SepalLength).unwrap(),
            2.0
        );
        assert_relative_eq!(
            groups.mean(Species::Virginica, Measurement::PetalWidth).unwrap(),
            8.0
        );
        assert_eq!(groups.mean(Species::Versicolor, Measurement::SepalLength), None);
    }

    #[test]
    fn summarize_is_deterministic() {
        let table = iris();
        assert_eq!(summarize(&table), summarize(&table));
    }

    #[test]
    fn describe_rows_are_in_order() {
        let stats = ColumnStats::from_values(&[1.0, 2.0]).unwrap();
        let labels: Vec<&str> = stats.rows().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["count", "mean", "std", "min", "25%", "50%", "75%", "max"]);
    }
}
