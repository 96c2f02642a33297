use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::error::PagingError;
use crate::reporter::{ErrorReporter, TracingReporter};
use crate::sentinel::{NoopObserver, Sentinels, VisibilityObserver};
use crate::synchronizer::{Begin, Completion, FetchTicket, Synchronizer};
use crate::types::{Direction, Edge, InfiniteListOptions, ListSnapshot, LoadOutcome};
use storedesk_api::{ApiResult, Page, PagedSource};

pub type DynPagedSource<T> = Arc<dyn PagedSource<T> + Send + Sync>;
pub type DynErrorReporter = Arc<dyn ErrorReporter + Send + Sync>;
pub type DynVisibilityObserver = Arc<dyn VisibilityObserver + Send + Sync>;

struct ListInner<T> {
    sync: Synchronizer<T>,
    sentinels: Sentinels,
}

/// Bidirectional infinite list over a paged endpoint.
///
/// The fetch state lives behind a plain mutex that is never held across an
/// `.await`; the source is awaited with the lock released and the result is
/// committed only if the ticket still belongs to the current generation.
pub struct InfiniteList<T> {
    source: DynPagedSource<T>,
    filters: BTreeMap<String, String>,
    reporter: DynErrorReporter,
    observer: DynVisibilityObserver,
    inner: Mutex<ListInner<T>>,
    snapshot_tx: watch::Sender<ListSnapshot<T>>,
}

impl<T> InfiniteList<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(source: DynPagedSource<T>, options: InfiniteListOptions) -> Self {
        let sync = Synchronizer::new(&options);
        let (snapshot_tx, _) = watch::channel(sync.snapshot());
        Self {
            source,
            filters: BTreeMap::new(),
            reporter: Arc::new(TracingReporter),
            observer: Arc::new(NoopObserver),
            inner: Mutex::new(ListInner {
                sync,
                sentinels: Sentinels::default(),
            }),
            snapshot_tx,
        }
    }

    pub fn with_filters(mut self, filters: BTreeMap<String, String>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_reporter(mut self, reporter: DynErrorReporter) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_observer(mut self, observer: DynVisibilityObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Snapshots are sent while the list is locked, so a `borrow()` of the
    /// receiver must be dropped before calling back into the list.
    pub fn subscribe(&self) -> watch::Receiver<ListSnapshot<T>> {
        self.snapshot_tx.subscribe()
    }

    pub fn snapshot(&self) -> ListSnapshot<T> {
        self.lock().sync.snapshot()
    }

    pub fn items(&self) -> Vec<T> {
        self.lock().sync.window().items().cloned().collect()
    }

    pub fn page_count(&self) -> usize {
        self.lock().sync.window().len()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().sync.is_loading()
    }

    pub fn error(&self) -> Option<PagingError> {
        self.lock().sync.error().cloned()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.lock().sync.set_enabled(enabled);
    }

    /// Fetch the first page if nothing has been loaded yet.
    pub async fn load_initial(&self) -> Result<LoadOutcome, PagingError> {
        if !self.lock().sync.is_pending() {
            return Ok(LoadOutcome::AlreadyLoaded);
        }
        self.load(Direction::Next).await
    }

    pub async fn load_next(&self) -> Result<LoadOutcome, PagingError> {
        self.load(Direction::Next).await
    }

    pub async fn load_previous(&self) -> Result<LoadOutcome, PagingError> {
        self.load(Direction::Previous).await
    }

    /// Called by the platform when the item watched for `edge` becomes visible.
    pub async fn on_visible(&self, edge: Edge) -> Result<LoadOutcome, PagingError> {
        if !self.lock().sentinels.is_armed(edge) {
            return Ok(LoadOutcome::NotArmed);
        }
        self.load(edge.direction()).await
    }

    /// Drop all pages; a fetch still in flight will be discarded.
    ///
    /// Loads requested before that fetch comes back report `InFlight`; the
    /// last one is run once the discarded response arrives.
    pub fn reset(&self) {
        let disarmed = {
            let mut inner = self.lock();
            inner.sync.reset();
            inner.sentinels.disarm()
        };
        self.disconnect(disarmed);
        self.publish();
    }

    /// Stop the list for good. Later loads are no-ops and in-flight results
    /// are ignored.
    pub fn dispose(&self) {
        let disarmed = {
            let mut inner = self.lock();
            inner.sync.dispose();
            inner.sentinels.disarm()
        };
        self.disconnect(disarmed);
        self.publish();
        tracing::debug!("infinite list disposed");
    }

    async fn load(&self, direction: Direction) -> Result<LoadOutcome, PagingError> {
        let mut direction = direction;
        loop {
            let (ticket, disarmed) = {
                let mut inner = self.lock();
                match inner.sync.begin(direction) {
                    Begin::Started(ticket) => (ticket, inner.sentinels.disarm()),
                    Begin::InFlight => return Ok(LoadOutcome::InFlight),
                    Begin::NoMorePages => return Ok(LoadOutcome::NoMorePages),
                    Begin::Disabled => return Ok(LoadOutcome::Disabled),
                    Begin::Disposed => return Ok(LoadOutcome::Disposed),
                }
            };
            self.disconnect(disarmed);
            self.publish();

            tracing::debug!(
                ?direction,
                offset = ticket.request.offset,
                limit = ticket.request.limit,
                "fetching page"
            );
            let request = ticket.request.clone().with_filters(self.filters.clone());
            let mut pending = PendingFetch {
                list: self,
                ticket: &ticket,
                settled: false,
            };
            let result = self.source.fetch_page(&request).await;
            pending.settled = true;

            match self.settle(&ticket, result)? {
                LoadOutcome::Stale => {
                    let deferred = self.lock().sync.take_deferred();
                    let Some(next) = deferred else {
                        return Ok(LoadOutcome::Stale);
                    };
                    tracing::debug!(?next, "running load deferred by reset");
                    direction = next;
                }
                outcome => return Ok(outcome),
            }
        }
    }

    fn settle(
        &self,
        ticket: &FetchTicket,
        result: ApiResult<Page<T>>,
    ) -> Result<LoadOutcome, PagingError> {
        let (completion, armed) = {
            let mut guard = self.lock();
            let inner = &mut *guard;
            let completion = inner.sync.complete(ticket, result);
            let armed = match completion {
                Completion::Stale => Vec::new(),
                _ => inner.sentinels.arm(inner.sync.window()),
            };
            (completion, armed)
        };

        match completion {
            Completion::Committed {
                offset,
                len,
                evicted,
            } => {
                tracing::debug!(offset, len, evicted, "page committed");
                self.publish();
                self.observe(armed);
                Ok(LoadOutcome::Loaded {
                    offset,
                    len,
                    evicted,
                })
            }
            Completion::Failed(error) => {
                self.reporter.report(&error);
                self.publish();
                self.observe(armed);
                Err(error)
            }
            Completion::Stale => {
                tracing::debug!(
                    offset = ticket.request.offset,
                    "discarding page for a reset or disposed list"
                );
                Ok(LoadOutcome::Stale)
            }
        }
    }

    /// Fetch future dropped before it settled.
    fn abandon(&self, ticket: &FetchTicket) {
        let armed = {
            let mut guard = self.lock();
            let inner = &mut *guard;
            if !inner.sync.abandon(ticket) {
                return;
            }
            inner.sentinels.arm(inner.sync.window())
        };
        tracing::debug!(offset = ticket.request.offset, "fetch dropped before it settled");
        self.publish();
        self.observe(armed);
    }

    /// Sent under the lock so subscribers never see an older state last.
    fn publish(&self) {
        let inner = self.lock();
        self.snapshot_tx.send_replace(inner.sync.snapshot());
    }

    fn observe(&self, armed: Vec<(Edge, usize)>) {
        for (edge, anchor) in armed {
            self.observer.observe(edge, anchor);
        }
    }

    fn disconnect(&self, disarmed: Vec<Edge>) {
        for edge in disarmed {
            self.observer.disconnect(edge);
        }
    }

    fn lock(&self) -> MutexGuard<'_, ListInner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Hands the ticket back if the fetch future is dropped mid-flight.
struct PendingFetch<'a, T>
where
    T: Clone + Send + Sync + 'static,
{
    list: &'a InfiniteList<T>,
    ticket: &'a FetchTicket,
    settled: bool,
}

impl<T> Drop for PendingFetch<'_, T>
where
    T: Clone + Send + Sync + 'static,
{
    fn drop(&mut self) {
        if !self.settled {
            self.list.abandon(self.ticket);
        }
    }
}
