//! Export runs: traversal planning and the sequential batch driver

mod exporter;
mod plan;

pub use exporter::{ExportReport, Exporter};
pub use plan::{PendingArticle, flat_plan, hierarchical_plan};
