/// Data layer: core types, loading, and summary statistics.
///
/// Architecture:
/// ```text
///  bundled iris.csv / file on disk
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  Vec<Flower>, fixed schema
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  describe + per-species means
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod summary;
