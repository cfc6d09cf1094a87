pub mod backend;
pub mod fields;
pub mod outcome;
pub mod response;
pub mod timing;

pub use backend::{Document, OcrBackend, PayloadKind, UnknownBackend};
pub use fields::{ExtractedFields, InvoiceId};
pub use outcome::{PersistenceStatus, SubmissionOutcome};
pub use response::{
    OcrResponse, PerformanceData, PerformanceRequest, RawOcrResponse, RawTiming,
    SaveTimeOtherRequest,
};
pub use timing::{ClassificationResult, PerformanceSnapshot, TimingRecord};
