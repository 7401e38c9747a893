/// Data layer: core types, loading, and the pathway/measurement join.
///
/// Architecture:
/// ```text
///   kegg.tsv              log10.txt
///      │                      │
///      ▼                      ▼
///   ┌──────────────┐   ┌───────────────────┐
///   │ load_pathways │   │ load_measurements │
///   └──────────────┘   └───────────────────┘
///      │ PathwayMembership    │ ProteinMeasurements
///      └──────────┬───────────┘
///                 ▼
///        ┌─────────────────┐
///        │ assemble_series │  pathway → (xs, ys)
///        └─────────────────┘
/// ```

pub mod assemble;
pub mod error;
pub mod loader;
pub mod model;
