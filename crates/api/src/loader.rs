use crate::ApiResult;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Path parameters captured while matching a route, e.g. `id` for `/orders/:id`.
pub type RouteParams = BTreeMap<String, String>;

#[async_trait]
pub trait RouteLoader: Send + Sync {
    /// Fetch the data a route needs before it renders.
    async fn load(&self, params: &RouteParams) -> ApiResult<serde_json::Value>;
}
