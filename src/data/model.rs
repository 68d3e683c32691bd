use std::fmt;

use crate::error::DataUnavailableError;

// ---------------------------------------------------------------------------
// Species – the categorical column
// ---------------------------------------------------------------------------

/// One of the three iris species. The class integers follow the order of
/// the source dataset: 0 → setosa, 1 → versicolor, 2 → virginica.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    /// Map a dataset class integer to its species.
    pub fn from_class(label: i64) -> Option<Self> {
        match label {
            0 => Some(Species::Setosa),
            1 => Some(Species::Versicolor),
            2 => Some(Species::Virginica),
            _ => None,
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Species::Setosa => 0,
            Species::Versicolor => 1,
            Species::Virginica => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Measurement – the numeric columns
// ---------------------------------------------------------------------------

/// The four numeric measurement columns, all in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Measurement {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl Measurement {
    pub const ALL: [Measurement; 4] = [
        Measurement::SepalLength,
        Measurement::SepalWidth,
        Measurement::PetalLength,
        Measurement::PetalWidth,
    ];

    /// Column name as it appears in tabular output, e.g. `sepal length (cm)`.
    pub fn column_name(self) -> &'static str {
        match self {
            Measurement::SepalLength => "sepal length (cm)",
            Measurement::SepalWidth => "sepal width (cm)",
            Measurement::PetalLength => "petal length (cm)",
            Measurement::PetalWidth => "petal width (cm)",
        }
    }

    /// Short human label used on chart axes.
    pub fn label(self) -> &'static str {
        match self {
            Measurement::SepalLength => "Sepal Length",
            Measurement::SepalWidth => "Sepal Width",
            Measurement::PetalLength => "Petal Length",
            Measurement::PetalWidth => "Petal Width",
        }
    }

    /// Position of the column in a row's measurement array.
    pub fn index(self) -> usize {
        match self {
            Measurement::SepalLength => 0,
            Measurement::SepalWidth => 1,
            Measurement::PetalLength => 2,
            Measurement::PetalWidth => 3,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

// ---------------------------------------------------------------------------
// Flower – one row of the table
// ---------------------------------------------------------------------------

/// A single measured flower.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flower {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
    pub species: Species,
}

impl Flower {
    pub fn new(measurements: [f64; 4], species: Species) -> Self {
        let [sepal_length, sepal_width, petal_length, petal_width] = measurements;
        Flower {
            sepal_length,
            sepal_width,
            petal_length,
            petal_width,
            species,
        }
    }

    pub fn measurement(&self, m: Measurement) -> f64 {
        match m {
            Measurement::SepalLength => self.sepal_length,
            Measurement::SepalWidth => self.sepal_width,
            Measurement::PetalLength => self.petal_length,
            Measurement::PetalWidth => self.petal_width,
        }
    }

    /// All four measurements in column order.
    pub fn measurements(&self) -> [f64; 4] {
        [
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ]
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The loaded dataset. Non-empty, every value finite; immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: Vec<Flower>,
}

impl Table {
    /// Validate and wrap the given rows.
    pub fn new(rows: Vec<Flower>) -> Result<Self, DataUnavailableError> {
        if rows.is_empty() {
            return Err(DataUnavailableError::Empty);
        }
        for (i, flower) in rows.iter().enumerate() {
            if let Some(m) = Measurement::ALL
                .into_iter()
                .find(|&m| !flower.measurement(m).is_finite())
            {
                return Err(DataUnavailableError::NonFinite {
                    row: i + 1,
                    column: m.column_name(),
                });
            }
        }
        Ok(Table { rows })
    }

    pub fn rows(&self) -> &[Flower] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a table built through [`Table::new`].
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one measurement column, in row order.
    pub fn column(&self, m: Measurement) -> Vec<f64> {
        self.rows.iter().map(|f| f.measurement(m)).collect()
    }

    /// Species labels in the order they first appear in the table.
    pub fn species_order(&self) -> Vec<Species> {
        let mut order = Vec::with_capacity(Species::ALL.len());
        for flower in &self.rows {
            if !order.contains(&flower.species) {
                order.push(flower.species);
            }
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_mapping_is_fixed() {
        assert_eq!(Species::from_class(0), Some(Species::Setosa));
        assert_eq!(Species::from_class(1), Some(Species::Versicolor));
        assert_eq!(Species::from_class(2), Some(Species::Virginica));
        assert_eq!(Species::from_class(3), None);
        assert_eq!(Species::from_class(-1), None);
        for s in Species::ALL {
            assert_eq!(Species::from_class(i64::from(s.class())), Some(s));
        }
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(matches!(Table::new(Vec::new()), Err(DataUnavailableError::Empty)));
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let rows = vec![
            Flower::new([5.1, 3.5, 1.4, 0.2], Species::Setosa),
            Flower::new([5.1, f64::NAN, 1.4, 0.2], Species::Setosa),
        ];
        match Table::new(rows) {
            Err(DataUnavailableError::NonFinite { row, column }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "sepal width (cm)");
            }
            other => panic!("expected NonFinite, got {other:?}"),
        }
    }

    #[test]
    fn species_order_is_first_seen() {
        let rows = vec![
            Flower::new([6.3, 3.3, 6.0, 2.5], Species::Virginica),
            Flower::new([5.1, 3.5, 1.4, 0.2], Species::Setosa),
            Flower::new([6.4, 2.7, 5.3, 1.9], Species::Virginica),
        ];
        let table = Table::new(rows).unwrap();
        assert_eq!(table.species_order(), vec![Species::Virginica, Species::Setosa]);
        assert_eq!(table.column(Measurement::PetalLength), vec![6.0, 1.4, 5.3]);
    }

    #[test]
    fn measurement_index_matches_array_order() {
        let flower = Flower::new([1.0, 2.0, 3.0, 4.0], Species::Versicolor);
        for m in Measurement::ALL {
            assert_eq!(flower.measurements()[m.index()], flower.measurement(m));
        }
    }
}
