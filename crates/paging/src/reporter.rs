use crate::error::PagingError;

/// Surfaces fetch failures to the user, e.g. as a toast.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &PagingError);
}

/// Default reporter: failures go to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, error: &PagingError) {
        let transient = matches!(error, PagingError::Fetch(e) if e.is_transient());
        tracing::warn!(transient, "{}", error);
    }
}

