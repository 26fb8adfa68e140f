pub mod error;
pub mod response;

pub use error::StyleError;
pub use response::AnalysisResponse;
