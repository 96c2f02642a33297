//! Transport-free fetch state machine for an infinite list.
//!
//! A fetch is split in two halves: [`Synchronizer::begin`] decides whether a
//! fetch may start and what it should ask for, [`Synchronizer::complete`]
//! commits the response. Only one ticket can be outstanding at a time, and a
//! ticket issued before a `reset`/`dispose` no longer matches the current
//! generation, so its response is dropped. A ticket invalidated by `reset`
//! still counts as outstanding until it is completed or abandoned; a
//! `begin` in the meantime is refused and remembered as deferred.

use crate::error::PagingError;
use crate::types::{Direction, FetchState, InfiniteListOptions, ListSnapshot};
use crate::window::PageWindow;
use storedesk_api::{ApiResult, Page, PageRequest};

/// Proof that a fetch was admitted; must be handed back on completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub direction: Direction,
    pub request: PageRequest,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Begin {
    Started(FetchTicket),
    InFlight,
    NoMorePages,
    Disabled,
    Disposed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Committed {
        offset: usize,
        len: usize,
        evicted: usize,
    },
    Failed(PagingError),
    Stale,
}

#[derive(Debug)]
pub struct Synchronizer<T> {
    window: PageWindow<T>,
    state: FetchState,
    error: Option<PagingError>,
    page_size: usize,
    enabled: bool,
    generation: u64,
    disposed: bool,
    /// A ticket from an earlier generation has not come back yet.
    stale_outstanding: bool,
    deferred: Option<Direction>,
}

impl<T> Synchronizer<T> {
    pub fn new(options: &InfiniteListOptions) -> Self {
        Self {
            window: PageWindow::new(options.max_pages),
            state: FetchState::Idle,
            error: None,
            page_size: options.page_size.max(1),
            enabled: options.enabled,
            generation: 0,
            disposed: false,
            stale_outstanding: false,
            deferred: None,
        }
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    pub fn window(&self) -> &PageWindow<T> {
        &self.window
    }

    pub fn error(&self) -> Option<&PagingError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_fetching()
    }

    /// No page has been committed yet.
    pub fn is_pending(&self) -> bool {
        self.window.is_empty()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn begin(&mut self, direction: Direction) -> Begin {
        if self.disposed {
            return Begin::Disposed;
        }
        if !self.enabled {
            return Begin::Disabled;
        }
        if self.state.is_fetching() {
            return Begin::InFlight;
        }
        if self.stale_outstanding {
            self.deferred = Some(direction);
            return Begin::InFlight;
        }

        let request = match direction {
            Direction::Next => self.window.next_request(self.page_size),
            Direction::Previous => self.window.previous_request(self.page_size),
        };
        let Some(request) = request else {
            return Begin::NoMorePages;
        };

        self.state = match direction {
            Direction::Next => FetchState::FetchingNext,
            Direction::Previous => FetchState::FetchingPrevious,
        };
        Begin::Started(FetchTicket {
            direction,
            request,
            generation: self.generation,
        })
    }

    pub fn complete(&mut self, ticket: &FetchTicket, result: ApiResult<Page<T>>) -> Completion {
        if self.disposed || ticket.generation != self.generation {
            self.stale_outstanding = false;
            return Completion::Stale;
        }

        let page = match result.map_err(PagingError::from).and_then(|page| {
            self.check_page(ticket, &page)?;
            Ok(page)
        }) {
            Ok(page) => page,
            Err(error) => {
                self.state = FetchState::Error;
                self.error = Some(error.clone());
                return Completion::Failed(error);
            }
        };

        let offset = page.offset;
        let len = page.items.len();
        let evicted = match ticket.direction {
            Direction::Next => self.window.push_back(page),
            Direction::Previous => self.window.push_front(page),
        };

        self.state = FetchState::Idle;
        self.error = None;
        Completion::Committed {
            offset,
            len,
            evicted: evicted.len(),
        }
    }

    /// Give back a ticket whose fetch was dropped before it completed.
    ///
    /// Returns `true` if the ticket was the current one, in which case the
    /// list is idle again with its window untouched.
    pub fn abandon(&mut self, ticket: &FetchTicket) -> bool {
        if self.disposed || ticket.generation != self.generation {
            self.stale_outstanding = false;
            return false;
        }
        if self.state.is_fetching() {
            self.state = FetchState::Idle;
        }
        true
    }

    /// Direction of a `begin` refused while an invalidated ticket was still
    /// outstanding. Only available once that ticket has come back.
    pub fn take_deferred(&mut self) -> Option<Direction> {
        if self.stale_outstanding {
            return None;
        }
        self.deferred.take()
    }

    /// Drop every page and invalidate the outstanding ticket, if any.
    ///
    /// The invalidated ticket keeps blocking `begin` until it completes.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.stale_outstanding |= self.state.is_fetching();
        self.deferred = None;
        self.window.clear();
        self.state = FetchState::Idle;
        self.error = None;
    }

    pub fn dispose(&mut self) {
        self.generation += 1;
        self.disposed = true;
        self.stale_outstanding = false;
        self.deferred = None;
        self.window.clear();
        self.state = FetchState::Idle;
    }

    fn check_page(&self, ticket: &FetchTicket, page: &Page<T>) -> Result<(), PagingError> {
        let overlaps_window = ticket.direction == Direction::Previous
            && self
                .window
                .first()
                .is_some_and(|first| page.offset + page.items.len() > first.offset);

        if page.offset != ticket.request.offset || !page.is_consistent() || overlaps_window {
            return Err(PagingError::InconsistentPage {
                requested: ticket.request.offset,
                offset: page.offset,
                len: page.items.len(),
                count: page.count,
            });
        }
        Ok(())
    }
}

impl<T: Clone> Synchronizer<T> {
    pub fn snapshot(&self) -> ListSnapshot<T> {
        ListSnapshot {
            items: self.window.items().cloned().collect(),
            state: self.state,
            is_loading: self.is_loading(),
            is_pending: self.is_pending(),
            has_next: self.window.has_next(),
            has_previous: self.window.has_previous(),
            error: self.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storedesk_api::ApiError;

    fn options(max_pages: usize) -> InfiniteListOptions {
        InfiniteListOptions {
            page_size: 20,
            max_pages,
            enabled: true,
        }
    }

    fn serve(request: &PageRequest, count: usize) -> Page<usize> {
        let end = (request.offset + request.limit).min(count);
        Page::new(
            (request.offset..end).collect(),
            request.offset,
            request.limit,
            count,
        )
    }

    fn started(begin: Begin) -> FetchTicket {
        match begin {
            Begin::Started(ticket) => ticket,
            other => panic!("expected a started fetch, got {other:?}"),
        }
    }

    #[test]
    fn second_begin_while_fetching_is_rejected() {
        let mut sync = Synchronizer::<usize>::new(&options(5));
        let ticket = started(sync.begin(Direction::Next));
        assert_eq!(sync.state(), FetchState::FetchingNext);
        assert_eq!(sync.begin(Direction::Next), Begin::InFlight);
        assert_eq!(sync.begin(Direction::Previous), Begin::InFlight);

        let page = serve(&ticket.request, 45);
        assert!(matches!(
            sync.complete(&ticket, Ok(page)),
            Completion::Committed { offset: 0, len: 20, evicted: 0 }
        ));
        assert_eq!(sync.state(), FetchState::Idle);
    }

    #[test]
    fn walks_forward_until_count_is_reached() {
        let mut sync = Synchronizer::<usize>::new(&options(5));
        let mut offsets = Vec::new();
        while let Begin::Started(ticket) = sync.begin(Direction::Next) {
            offsets.push(ticket.request.offset);
            let page = serve(&ticket.request, 45);
            sync.complete(&ticket, Ok(page));
        }
        assert_eq!(offsets, [0, 20, 40]);
        assert_eq!(sync.begin(Direction::Next), Begin::NoMorePages);
        assert_eq!(sync.window().items().count(), 45);
    }

    #[test]
    fn failure_keeps_window_and_retry_targets_same_offset() {
        let mut sync = Synchronizer::<usize>::new(&options(5));
        let ticket = started(sync.begin(Direction::Next));
        sync.complete(&ticket, Ok(serve(&ticket.request, 45)));

        let ticket = started(sync.begin(Direction::Next));
        let failed = sync.complete(&ticket, Err(ApiError::Network("reset by peer".into())));
        assert!(matches!(failed, Completion::Failed(PagingError::Fetch(_))));
        assert_eq!(sync.state(), FetchState::Error);
        assert_eq!(sync.window().items().count(), 20);

        let retry = started(sync.begin(Direction::Next));
        assert_eq!(retry.request.offset, 20);
        sync.complete(&retry, Ok(serve(&retry.request, 45)));
        assert!(sync.error().is_none());
    }

    #[test]
    fn response_after_reset_is_stale() {
        let mut sync = Synchronizer::<usize>::new(&options(5));
        let ticket = started(sync.begin(Direction::Next));
        sync.reset();
        assert_eq!(
            sync.complete(&ticket, Ok(serve(&ticket.request, 45))),
            Completion::Stale
        );
        assert!(sync.is_pending());
    }

    #[test]
    fn reset_while_fetching_keeps_a_single_outstanding_ticket() {
        let mut sync = Synchronizer::<usize>::new(&options(5));
        let old = started(sync.begin(Direction::Next));
        sync.reset();
        assert_eq!(sync.state(), FetchState::Idle);
        assert_eq!(sync.begin(Direction::Next), Begin::InFlight);
        assert_eq!(sync.take_deferred(), None);

        assert_eq!(
            sync.complete(&old, Ok(serve(&old.request, 45))),
            Completion::Stale
        );
        assert_eq!(sync.take_deferred(), Some(Direction::Next));
        assert_eq!(sync.take_deferred(), None);

        let fresh = started(sync.begin(Direction::Next));
        assert_eq!(fresh.request.offset, 0);
        assert!(matches!(
            sync.complete(&fresh, Ok(serve(&fresh.request, 45))),
            Completion::Committed { offset: 0, .. }
        ));
    }

    #[test]
    fn reset_while_idle_does_not_block() {
        let mut sync = Synchronizer::<usize>::new(&options(5));
        let ticket = started(sync.begin(Direction::Next));
        sync.complete(&ticket, Ok(serve(&ticket.request, 45)));
        sync.reset();
        assert!(matches!(sync.begin(Direction::Next), Begin::Started(_)));
    }

    #[test]
    fn abandoned_tickets_release_the_list() {
        let mut sync = Synchronizer::<usize>::new(&options(5));
        let ticket = started(sync.begin(Direction::Next));
        assert!(sync.abandon(&ticket));
        assert_eq!(sync.state(), FetchState::Idle);

        let ticket = started(sync.begin(Direction::Next));
        sync.reset();
        assert_eq!(sync.begin(Direction::Next), Begin::InFlight);
        assert!(!sync.abandon(&ticket));
        assert!(matches!(sync.begin(Direction::Next), Begin::Started(_)));
    }

    #[test]
    fn response_after_dispose_is_stale() {
        let mut sync = Synchronizer::<usize>::new(&options(5));
        let ticket = started(sync.begin(Direction::Next));
        sync.dispose();
        assert_eq!(
            sync.complete(&ticket, Ok(serve(&ticket.request, 45))),
            Completion::Stale
        );
        assert_eq!(sync.begin(Direction::Next), Begin::Disposed);
    }

    #[test]
    fn page_at_wrong_offset_is_rejected() {
        let mut sync = Synchronizer::<usize>::new(&options(5));
        let ticket = started(sync.begin(Direction::Next));
        let wrong = Page::new(vec![1, 2, 3], 3, 20, 45);
        assert!(matches!(
            sync.complete(&ticket, Ok(wrong)),
            Completion::Failed(PagingError::InconsistentPage { requested: 0, offset: 3, .. })
        ));
        assert!(sync.is_pending());
    }

    #[test]
    fn page_exceeding_count_is_rejected() {
        let mut sync = Synchronizer::<usize>::new(&options(5));
        let ticket = started(sync.begin(Direction::Next));
        let page = Page::new((0..20).collect(), 0, 20, 10);
        assert!(matches!(
            sync.complete(&ticket, Ok(page)),
            Completion::Failed(PagingError::InconsistentPage { .. })
        ));
    }

    #[test]
    fn disabled_list_never_fetches() {
        let mut sync = Synchronizer::<usize>::new(&InfiniteListOptions {
            enabled: false,
            ..InfiniteListOptions::default()
        });
        assert_eq!(sync.begin(Direction::Next), Begin::Disabled);
        sync.set_enabled(true);
        assert!(matches!(sync.begin(Direction::Next), Begin::Started(_)));
    }

    #[test]
    fn snapshot_reflects_window_and_flags() {
        let mut sync = Synchronizer::<usize>::new(&options(5));
        assert!(sync.snapshot().is_pending);

        let ticket = started(sync.begin(Direction::Next));
        assert!(sync.snapshot().is_loading);
        sync.complete(&ticket, Ok(serve(&ticket.request, 45)));

        let snapshot = sync.snapshot();
        assert_eq!(snapshot.items.len(), 20);
        assert!(!snapshot.is_pending);
        assert!(snapshot.has_next);
        assert!(!snapshot.has_previous);
    }
}
