use crate::error::Result;
use storedesk_api::PageRequest;
use url::Url;

/// A list resource on the commerce backend, e.g. `/admin/products`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEndpoint {
    url: Url,
}

impl ListEndpoint {
    pub fn new(backend_url: &str, resource: &str) -> Result<Self> {
        let mut base = Url::parse(backend_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let url = base.join(resource.trim_start_matches('/'))?;
        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// URL for one page: `offset` and `limit` first, then filters in key order.
    pub fn page_url(&self, request: &PageRequest) -> Url {
        let mut url = self.url.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("offset", &request.offset.to_string())
                .append_pair("limit", &request.limit.to_string());
            for (key, value) in &request.filters {
                query.append_pair(key, value);
            }
        }
        url
    }
}
