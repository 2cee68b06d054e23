use std::future::Future;

use crate::server::error::{fallback::ErrorFallbackStrategy, Error};

/// Context for read operations that may be answered from the local cache
///
/// The remote read is the primary action; the cache read is only attempted when the primary
/// fails with an error classified as [`ErrorFallbackStrategy::Fallback`].
pub struct FallbackContext<'a> {
    /// Description of the operation for logging (e.g., "employee list fetch")
    description: &'a str,
}

impl<'a> FallbackContext<'a> {
    pub fn new(description: &'a str) -> Self {
        Self { description }
    }

    /// Execute the primary future, falling back to the cache on transient remote failures
    ///
    /// # Arguments
    /// - `primary`: Remote read, including any cache population on success
    /// - `fallback`: Produces the cache read, only called when the primary failed transiently
    pub async fn execute<R, P, F, Fut>(&self, primary: P, fallback: F) -> Result<R, Error>
    where
        P: Future<Output = Result<R, Error>>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<R, Error>>,
    {
        tracing::debug!("Processing {}", self.description);

        match primary.await {
            Ok(result) => {
                tracing::debug!("Successfully processed {}", self.description);
                Ok(result)
            }
            Err(e) => match e.to_fallback_strategy() {
                ErrorFallbackStrategy::Propagate => {
                    // Domain errors are expected outcomes, not failures worth an error log
                    if !matches!(e, Error::DirectoryError(_)) {
                        tracing::error!("Permanent error for {}: {}", self.description, e);
                    }
                    Err(e)
                }
                ErrorFallbackStrategy::Fallback => {
                    tracing::warn!(
                        "Remote directory failed for {}, falling back to cache: {}",
                        self.description,
                        e
                    );
                    fallback().await
                }
            },
        }
    }
}
