use super::Error;

/// How a failed remote read should be handled
#[derive(Debug, PartialEq, Eq)]
pub enum ErrorFallbackStrategy {
    /// Answer from the local cache instead (remote client/server errors)
    Fallback,
    /// Return the error to the caller unchanged
    Propagate,
}

impl Error {
    /// Determine fallback strategy based upon application Error type
    pub fn to_fallback_strategy(&self) -> ErrorFallbackStrategy {
        match self {
            // Remote directory responded with an error status
            Error::DirectoryClientError(directory_client::Error::ReqwestError(reqwest_error)) => {
                if let Some(status) = reqwest_error.status() {
                    match status {
                        // 500 - Server Error
                        //
                        // Directory is temporarily unavailable, serve the cached mirror.
                        s if s.is_server_error() => ErrorFallbackStrategy::Fallback,

                        // 400 - Client Error
                        //
                        // Includes 429 rate limiting which the public directory returns often.
                        s if s.is_client_error() => ErrorFallbackStrategy::Fallback,

                        // Unexpected status
                        _ => ErrorFallbackStrategy::Propagate,
                    }
                } else {
                    // Connection failure, timeout or unreadable body, not classified
                    ErrorFallbackStrategy::Propagate
                }
            }

            // Directory client errors - undecodable bodies, missing fields, bad config
            Self::DirectoryClientError(_) => ErrorFallbackStrategy::Propagate,

            // Domain errors - an authoritative empty answer or bad input is final
            Self::DirectoryError(_) => ErrorFallbackStrategy::Propagate,

            // Database errors - the cache itself is failing
            Self::DbErr(_) => ErrorFallbackStrategy::Propagate,

            // Configuration errors - permanent failures
            Self::ConfigError(_) => ErrorFallbackStrategy::Propagate,

            // InternalError - bug in our code
            Self::InternalError(_) => ErrorFallbackStrategy::Propagate,

            // I/O errors - only raised while serving, never by a directory read
            Self::IoError(_) => ErrorFallbackStrategy::Propagate,
        }
    }
}
