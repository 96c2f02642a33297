use storedesk_api::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagingError {
    #[error("page fetch failed: {0}")]
    Fetch(#[from] ApiError),
    #[error(
        "inconsistent page: requested offset {requested}, got offset {offset} with {len} items of {count}"
    )]
    InconsistentPage {
        requested: usize,
        offset: usize,
        len: usize,
        count: usize,
    },
}
