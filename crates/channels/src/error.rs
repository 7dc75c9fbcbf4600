/// Crate-wide result type for delivery operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Typed failure points of the delivery pipeline.
///
/// Every fallible step maps to exactly one variant; nothing is retried or
/// recovered locally, so the variant reaching the HTTP boundary identifies
/// the step that aborted the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required record field is empty.
    #[error("missing required field: {field}")]
    Validation { field: &'static str },

    /// The package label has no entry in the catalog.
    #[error("no download link for package '{label}'")]
    UnknownPackage { label: String },

    /// The record source was unreachable, rejected the query, or returned
    /// an empty result set.
    #[error("record source query failed: {message}")]
    UpstreamQuery { message: String },

    /// The catalog URL could not be fetched.
    #[error("file download failed: {message}")]
    Download { message: String },

    /// A messaging API call (text or document send) was rejected.
    #[error("messaging channel error: {message}")]
    MessagingChannel { message: String },

    /// SMTP connection, authentication, or send failed.
    #[error("email channel error: {message}")]
    EmailChannel { message: String },
}

impl Error {
    #[must_use]
    pub fn validation(field: &'static str) -> Self {
        Self::Validation { field }
    }

    #[must_use]
    pub fn unknown_package(label: impl Into<String>) -> Self {
        Self::UnknownPackage {
            label: label.into(),
        }
    }

    #[must_use]
    pub fn upstream_query(message: impl std::fmt::Display) -> Self {
        Self::UpstreamQuery {
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn download(message: impl std::fmt::Display) -> Self {
        Self::Download {
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn messaging(message: impl std::fmt::Display) -> Self {
        Self::MessagingChannel {
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn email(message: impl std::fmt::Display) -> Self {
        Self::EmailChannel {
            message: message.to_string(),
        }
    }
}
