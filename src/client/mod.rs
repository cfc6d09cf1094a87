pub mod gateway;
pub mod http;

pub use gateway::OcrGateway;
pub use http::HttpGateway;
