pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use api::{router, AppState};
pub use client::{HttpGateway, OcrGateway};
pub use config::AppConfig;
pub use error::OcrError;
pub use service::{InvoiceClassifier, OcrRequestCoordinator, PerformanceAggregator, ScoringRules};
