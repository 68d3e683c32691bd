use std::io::Write;

use anyhow::{Context, Result};

use crate::data::loader::{load, DatasetSource};
use crate::data::summary::summarize;
use crate::figure::Figure;
use crate::render::Renderer;
use crate::report;

/// How a run ended when no unrecoverable error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Loaded, summarized and rendered.
    Completed,
    /// The dataset could not be loaded; nothing was analyzed or rendered.
    DataUnavailable,
}

/// Run load → summarize → render, writing diagnostics to `out`.
///
/// A loading failure is reported to `out` and yields
/// [`Outcome::DataUnavailable`]; render failures are returned as errors.
pub fn run<R: Renderer>(
    source: &DatasetSource,
    renderer: &mut R,
    out: &mut impl Write,
) -> Result<Outcome> {
    let table = match load(source) {
        Ok(table) => table,
        Err(e) => {
            log::error!("Failed to load dataset: {e}");
            writeln!(out, "Error loading dataset: {e}")?;
            return Ok(Outcome::DataUnavailable);
        }
    };
    log::info!(
        "Loaded {} rows covering {} species",
        table.len(),
        table.species_order().len()
    );

    writeln!(out, "Dataset loaded successfully!")?;
    writeln!(out, "\nFirst few rows of the dataset:")?;
    writeln!(out, "{}", report::preview(&table)?)?;
    writeln!(out, "\nDataset Info:")?;
    writeln!(out, "{}", report::schema_info(&table)?)?;
    writeln!(out, "\nMissing Values:")?;
    writeln!(out, "{}", report::missing_values(&table)?)?;

    let (overall, groups) = summarize(&table);
    writeln!(out, "\nBasic Statistical Description:")?;
    writeln!(out, "{}", report::describe(&overall)?)?;
    writeln!(out, "\nMean values by species:")?;
    writeln!(out, "{}", report::species_means(&groups)?)?;
    out.flush()?;

    let figure = Figure::build(&table, &groups);
    renderer
        .render(figure)
        .context("rendering the dataset overview")?;

    Ok(Outcome::Completed)
}
