pub mod classifier;
pub mod coordinator;
pub mod performance;
pub mod reconciler;

pub use classifier::{InvoiceClassifier, ScoringRules};
pub use coordinator::OcrRequestCoordinator;
pub use performance::{present, ChartSegment, DisplayModel, PerformanceAggregator};
pub use reconciler::reconcile;
