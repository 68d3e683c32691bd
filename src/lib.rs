//! Loads the Iris flower measurements, prints descriptive statistics grouped
//! by species and shows a four-panel chart overview.
//!
//! ```text
//!  loader ──► Table ──► summary ──► report (stdout)
//!                  └──► figure  ──► Renderer (egui window / headless)
//! ```

pub mod app;
pub mod color;
pub mod data;
pub mod error;
pub mod figure;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod ui;

pub use data::loader::{load, DatasetSource};
pub use data::model::{Flower, Measurement, Species, Table};
pub use data::summary::{summarize, ColumnStats, GroupSummary, OverallStats};
pub use error::{DataUnavailableError, RenderError};
pub use figure::Figure;
pub use pipeline::{run, Outcome};
pub use render::{NullRenderer, Renderer};
