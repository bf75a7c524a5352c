use thiserror::Error;

/// The failure taxonomy for the compression pipeline.
///
/// Each variant tags the step that failed and wraps the underlying error with
/// its full context chain. Conversion into a transport status code happens
/// only at the handler boundary; nothing below the handler looks at status
/// codes.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The trigger payload did not contain a usable source reference
    #[error("invalid event: {0:#}")]
    InvalidEvent(anyhow::Error),

    /// The source object could not be retrieved
    #[error("failed to fetch source object: {0:#}")]
    Fetch(anyhow::Error),

    /// The source bytes could not be decoded or re-encoded as an image
    #[error("failed to decode image: {0:#}")]
    Decode(anyhow::Error),

    /// The compressed artifact could not be uploaded
    #[error("failed to store compressed image: {0:#}")]
    Store(anyhow::Error),

    /// The processing record could not be persisted
    #[error("failed to record processing metadata: {0:#}")]
    Record(anyhow::Error),

    /// The completion notification could not be published
    #[error("failed to publish completion notification: {0:#}")]
    Notify(anyhow::Error),
}

impl PipelineError {
    /// Short tag for the failed step, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::InvalidEvent(_) => "invalid_event",
            PipelineError::Fetch(_) => "fetch",
            PipelineError::Decode(_) => "decode",
            PipelineError::Store(_) => "store",
            PipelineError::Record(_) => "record",
            PipelineError::Notify(_) => "notify",
        }
    }
}
