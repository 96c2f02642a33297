pub mod error;
pub mod list;
pub mod reporter;
pub mod sentinel;
pub mod synchronizer;
pub mod types;
pub mod window;

pub use error::PagingError;
pub use list::{DynErrorReporter, DynPagedSource, DynVisibilityObserver, InfiniteList};
pub use reporter::{ErrorReporter, TracingReporter};
pub use sentinel::{NoopObserver, Sentinels, VisibilityObserver};
pub use synchronizer::{Begin, Completion, FetchTicket, Synchronizer};
pub use types::{Direction, Edge, FetchState, InfiniteListOptions, ListSnapshot, LoadOutcome};
pub use window::PageWindow;
