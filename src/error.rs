use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum AwbError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    /// A record field required at a submission boundary was empty. The layout
    /// engine itself never validates; absent fields render as empty text.
    #[error("missing required field: {0}")]
    InvalidRecord(&'static str),

    /// The rendered artifact could not be handed to the output sink. Fatal
    /// for the render call; the partial artifact is discarded, never exposed.
    #[error("could not persist artifact {name}")]
    Sink {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A page listed in the page order is missing from the document
    #[error("page listed in the page order is missing")]
    PageMissing,

    #[error(transparent)]
    /// The webhook payload could not be encoded
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    /// The single POST to the workflow webhook failed in transport
    Webhook(#[from] Box<ureq::Error>),
}
