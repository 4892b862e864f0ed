//! Data layer: core types, loading, derivation, and aggregation.
//!
//! ```text
//!  satellite catalog .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse rows → derive altitude + class → filter
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │ DebrisDataset  │  Vec<DebrisObject>
//!   └───────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  stats    │  log-spaced bins, stacked counts, LEO share
//!   └──────────┘
//! ```

pub mod derive;
pub mod loader;
pub mod model;
pub mod stats;
