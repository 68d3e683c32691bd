//! Human-readable diagnostics printed while the pipeline runs.
//!
//! Every section is turned into an Arrow [`RecordBatch`] and pretty-printed,
//! so the console output reads like a data-frame dump.

use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use crate::data::model::{Measurement, Table};
use crate::data::summary::{GroupSummary, OverallStats};

/// Number of rows shown by [`preview`].
pub const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Table → Arrow
// ---------------------------------------------------------------------------

/// Convert the table to a record batch: four Float64 columns and a Utf8
/// `species` column.
pub fn table_batch(table: &Table) -> Result<RecordBatch> {
    let mut fields: Vec<Field> = Measurement::ALL
        .iter()
        .map(|m| Field::new(m.column_name(), DataType::Float64, false))
        .collect();
    fields.push(Field::new("species", DataType::Utf8, false));

    let mut columns: Vec<ArrayRef> = Measurement::ALL
        .iter()
        .map(|&m| Arc::new(Float64Array::from(table.column(m))) as ArrayRef)
        .collect();
    columns.push(Arc::new(StringArray::from_iter_values(
        table.rows().iter().map(|f| f.species.name()),
    )));

    RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)
        .context("building record batch from table")
}

fn format_batch(batch: &RecordBatch) -> Result<String> {
    let table = pretty_format_batches(std::slice::from_ref(batch)).context("formatting table")?;
    Ok(table.to_string())
}

// ---------------------------------------------------------------------------
// Report sections
// ---------------------------------------------------------------------------

/// The first [`PREVIEW_ROWS`] rows.
pub fn preview(table: &Table) -> Result<String> {
    let batch = table_batch(table)?;
    let n = PREVIEW_ROWS.min(batch.num_rows());
    format_batch(&batch.slice(0, n))
}

/// Column names, non-null counts and Arrow data types.
pub fn schema_info(table: &Table) -> Result<String> {
    let batch = table_batch(table)?;
    let schema = batch.schema();

    let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    let non_null: Vec<u64> = batch
        .columns()
        .iter()
        .map(|c| (c.len() - c.null_count()) as u64)
        .collect();
    let dtypes: Vec<String> = schema
        .fields()
        .iter()
        .map(|f| f.data_type().to_string())
        .collect();

    let info = RecordBatch::try_from_iter(vec![
        ("column", Arc::new(StringArray::from(names)) as ArrayRef),
        ("non-null count", Arc::new(UInt64Array::from(non_null)) as ArrayRef),
        ("dtype", Arc::new(StringArray::from(dtypes)) as ArrayRef),
    ])
    .context("building schema summary")?;

    Ok(format!(
        "{} entries, {} columns\n{}",
        batch.num_rows(),
        batch.num_columns(),
        format_batch(&info)?
    ))
}

/// Missing-value count per column.
pub fn missing_values(table: &Table) -> Result<String> {
    let batch = table_batch(table)?;
    let schema = batch.schema();

    let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    let missing: Vec<u64> = batch
        .columns()
        .iter()
        .map(|c| c.null_count() as u64)
        .collect();

    let counts = RecordBatch::try_from_iter(vec![
        ("column", Arc::new(StringArray::from(names)) as ArrayRef),
        ("missing", Arc::new(UInt64Array::from(missing)) as ArrayRef),
    ])
    .context("building missing-value counts")?;
    format_batch(&counts)
}

/// The `describe` table: one row per statistic, one column per measurement.
pub fn describe(stats: &OverallStats) -> Result<String> {
    let Some((_, first)) = stats.columns.first() else {
        return Ok(String::new());
    };
    let labels: Vec<&str> = first.rows().iter().map(|(label, _)| *label).collect();

    let mut columns: Vec<(&str, ArrayRef)> =
        vec![("statistic", Arc::new(StringArray::from(labels)) as ArrayRef)];
    for (m, col) in &stats.columns {
        let values: Vec<f64> = col.rows().iter().map(|(_, v)| *v).collect();
        columns.push((m.column_name(), Arc::new(Float64Array::from(values)) as ArrayRef));
    }

    let batch = RecordBatch::try_from_iter(columns).context("building describe table")?;
    format_batch(&batch)
}

/// Per-species means, one row per species.
pub fn species_means(groups: &GroupSummary) -> Result<String> {
    let species: Vec<&str> = groups.groups.iter().map(|g| g.species.name()).collect();

    let mut columns: Vec<(&str, ArrayRef)> =
        vec![("species", Arc::new(StringArray::from(species)) as ArrayRef)];
    for m in Measurement::ALL {
        let means: Vec<f64> = groups.groups.iter().map(|g| g.mean(m)).collect();
        columns.push((m.column_name(), Arc::new(Float64Array::from(means)) as ArrayRef));
    }

    let batch = RecordBatch::try_from_iter(columns).context("building species means")?;
    format_batch(&batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{load, DatasetSource};
    use crate::data::summary::summarize;

    fn iris() -> Table {
        load(&DatasetSource::bundled()).unwrap()
    }

    #[test]
    fn table_batch_has_five_columns() {
        let batch = table_batch(&iris()).unwrap();
        assert_eq!(batch.num_rows(), 150);
        assert_eq!(batch.num_columns(), 5);
        assert_eq!(batch.schema().field(4).name(), "species");
        assert!(batch.columns().iter().all(|c| c.null_count() == 0));
    }

    #[test]
    fn preview_shows_first_rows_only() {
        let text = preview(&iris()).unwrap();
        assert!(text.contains("sepal length (cm)"));
        assert!(text.contains("5.1"));
        assert!(text.contains("setosa"));
        assert!(!text.contains("versicolor"));
    }

    #[test]
    fn schema_info_lists_types() {
        let text = schema_info(&iris()).unwrap();
        assert!(text.starts_with("150 entries, 5 columns"));
        assert!(text.contains("Float64"));
        assert!(text.contains("Utf8"));
        assert!(text.contains("150"));
    }

    #[test]
    fn missing_values_are_zero() {
        let text = missing_values(&iris()).unwrap();
        assert!(text.contains("petal width (cm)"));
        assert!(text.contains("| 0 "));
    }

    #[test]
    fn describe_and_means_render() {
        let (overall, groups) = summarize(&iris());

        let text = describe(&overall).unwrap();
        for label in ["count", "mean", "std", "min", "25%", "50%", "75%", "max"] {
            assert!(text.contains(label), "describe should list {label}");
        }
        assert!(text.contains("150"));

        let text = species_means(&groups).unwrap();
        assert!(text.contains("versicolor"));
        assert!(text.contains("5.936"));
    }
}
