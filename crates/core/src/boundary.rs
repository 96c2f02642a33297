//! Per-route error boundary.
//!
//! A loader that fails or panics is contained to the page it belongs to; the
//! navigation still returns, carrying a [`BoundaryFailure`] the shell can show.

use futures::FutureExt;
use serde::Serialize;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use storedesk_api::ApiResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoundaryOutcome {
    Rendered { data: serde_json::Value },
    Caught { failure: BoundaryFailure },
}

impl BoundaryOutcome {
    pub fn data(&self) -> Option<&serde_json::Value> {
        match self {
            BoundaryOutcome::Rendered { data } => Some(data),
            BoundaryOutcome::Caught { .. } => None,
        }
    }

    pub fn failure(&self) -> Option<&BoundaryFailure> {
        match self {
            BoundaryOutcome::Rendered { .. } => None,
            BoundaryOutcome::Caught { failure } => Some(failure),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundaryFailure {
    /// Registered path of the page whose loader failed.
    pub route: String,
    pub message: String,
    pub panicked: bool,
}

/// Drive `load` to completion, turning errors and panics into
/// [`BoundaryOutcome::Caught`].
pub async fn guard<F>(route: &str, load: F) -> BoundaryOutcome
where
    F: Future<Output = ApiResult<serde_json::Value>>,
{
    match AssertUnwindSafe(load).catch_unwind().await {
        Ok(Ok(data)) => BoundaryOutcome::Rendered { data },
        Ok(Err(error)) => {
            tracing::warn!(route, %error, "route loader failed");
            BoundaryOutcome::Caught {
                failure: BoundaryFailure {
                    route: route.to_string(),
                    message: error.to_string(),
                    panicked: false,
                },
            }
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::error!(route, message, "route loader panicked");
            BoundaryOutcome::Caught {
                failure: BoundaryFailure {
                    route: route.to_string(),
                    message,
                    panicked: true,
                },
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "loader panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storedesk_api::ApiError;

    #[tokio::test]
    async fn successful_load_is_rendered() {
        let outcome = guard("/orders", async { Ok(serde_json::json!({"count": 3})) }).await;
        assert_eq!(outcome.data(), Some(&serde_json::json!({"count": 3})));
        assert!(outcome.failure().is_none());
    }

    #[tokio::test]
    async fn loader_error_is_caught() {
        let outcome = guard("/orders/:id", async { Err(ApiError::NotFound("order_1".into())) }).await;
        let failure = outcome.failure().unwrap();
        assert_eq!(failure.route, "/orders/:id");
        assert!(!failure.panicked);
        assert!(failure.message.contains("order_1"));
    }

    #[tokio::test]
    async fn loader_panic_is_caught() {
        let outcome = guard("/products/:id", async {
            let parsed: Option<u32> = None;
            if parsed.is_none() {
                panic!("missing product id");
            }
            Ok(serde_json::Value::Null)
        })
        .await;

        let failure = outcome.failure().unwrap();
        assert!(failure.panicked);
        assert_eq!(failure.message, "missing product id");
    }
}
