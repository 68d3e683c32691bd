use std::io::Read;
use std::path::PathBuf;

use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;

use super::model::{Flower, Measurement, Species, Table};
use crate::error::DataUnavailableError;

/// The Iris measurements shipped with the binary.
pub const BUNDLED_IRIS: &str = include_str!("../../data/iris.csv");

// ---------------------------------------------------------------------------
// Dataset source
// ---------------------------------------------------------------------------

/// Where the loader reads its table from.
///
/// Both variants use the same layout (the one scikit-learn ships):
///
/// ```text
/// 150,4,setosa,versicolor,virginica      <- n_samples, n_features, class names
/// 5.1,3.5,1.4,0.2,0                      <- four features, class integer
/// ...
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Embedded(&'static str),
    File(PathBuf),
}

impl DatasetSource {
    /// The dataset compiled into the binary.
    pub fn bundled() -> Self {
        DatasetSource::Embedded(BUNDLED_IRIS)
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and validate the table from `source`.
pub fn load(source: &DatasetSource) -> Result<Table, DataUnavailableError> {
    match source {
        DatasetSource::Embedded(text) => read_table(text.as_bytes()),
        DatasetSource::File(path) => {
            let file = std::fs::File::open(path).map_err(|source| DataUnavailableError::Open {
                path: path.clone(),
                source,
            })?;
            read_table(file)
        }
    }
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// One raw data line. Empty fields deserialize to `None`.
#[derive(Debug, Deserialize)]
struct RawRow(
    Option<f64>,
    Option<f64>,
    Option<f64>,
    Option<f64>,
    Option<i64>,
);

struct Header {
    declared_rows: usize,
}

fn read_table<R: Read>(reader: R) -> Result<Table, DataUnavailableError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut header_record = StringRecord::new();
    if !reader.read_record(&mut header_record)? {
        return Err(DataUnavailableError::MissingHeader);
    }
    let header = parse_header(&header_record)?;

    let mut rows = Vec::with_capacity(header.declared_rows);
    for (i, result) in reader.deserialize::<RawRow>().enumerate() {
        let raw = result?;
        rows.push(to_flower(raw, i + 1)?);
    }

    if rows.len() != header.declared_rows {
        return Err(DataUnavailableError::RowCount {
            declared: header.declared_rows,
            found: rows.len(),
        });
    }

    Table::new(rows)
}

fn parse_header(record: &StringRecord) -> Result<Header, DataUnavailableError> {
    let field = |idx: usize| record.get(idx).unwrap_or("");

    let declared_rows = field(0).parse::<usize>().map_err(|_| {
        DataUnavailableError::InvalidHeader(format!("'{}' is not a row count", field(0)))
    })?;

    let features = field(1).parse::<usize>().map_err(|_| {
        DataUnavailableError::InvalidHeader(format!("'{}' is not a feature count", field(1)))
    })?;
    if features != Measurement::ALL.len() {
        return Err(DataUnavailableError::InvalidHeader(format!(
            "expected {} features, found {features}",
            Measurement::ALL.len()
        )));
    }

    let names: Vec<&str> = record.iter().skip(2).collect();
    let expected: Vec<&str> = Species::ALL.iter().map(|s| s.name()).collect();
    if names != expected {
        return Err(DataUnavailableError::InvalidHeader(format!(
            "class names {names:?} do not match {expected:?}"
        )));
    }

    Ok(Header { declared_rows })
}

fn to_flower(raw: RawRow, row: usize) -> Result<Flower, DataUnavailableError> {
    let RawRow(sl, sw, pl, pw, class) = raw;

    let mut measurements = [0.0; 4];
    for (slot, (value, m)) in measurements
        .iter_mut()
        .zip([sl, sw, pl, pw].into_iter().zip(Measurement::ALL))
    {
        *slot = value.ok_or(DataUnavailableError::MissingValue {
            row,
            column: m.column_name(),
        })?;
    }

    let label = class.ok_or(DataUnavailableError::MissingValue {
        row,
        column: "target",
    })?;
    let species =
        Species::from_class(label).ok_or(DataUnavailableError::UnknownClass { row, label })?;

    Ok(Flower::new(measurements, species))
}
