use rxterms_ingest::IngestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    /// A group reached the builder without a digit width.
    #[error("no digit width recorded for display name '{display_name}'")]
    MissingDigitWidth { display_name: String },
}

pub type Result<T> = std::result::Result<T, TransformError>;
