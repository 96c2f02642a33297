use crate::error::PagingError;

/// Direction a fetch extends the window in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Previous,
}

/// Sentinel positions around the rendered items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
}

impl Edge {
    pub fn direction(self) -> Direction {
        match self {
            Edge::Top => Direction::Previous,
            Edge::Bottom => Direction::Next,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    FetchingNext,
    FetchingPrevious,
    Error,
}

impl FetchState {
    pub fn is_fetching(self) -> bool {
        matches!(self, FetchState::FetchingNext | FetchState::FetchingPrevious)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfiniteListOptions {
    pub page_size: usize,
    pub max_pages: usize,
    pub enabled: bool,
}

impl Default for InfiniteListOptions {
    fn default() -> Self {
        Self {
            page_size: 20,
            max_pages: 5,
            enabled: true,
        }
    }
}

/// What a load call ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded {
        offset: usize,
        len: usize,
        evicted: usize,
    },
    NoMorePages,
    /// `load_initial` on a list that already holds pages.
    AlreadyLoaded,
    /// Another fetch for this list is still outstanding.
    InFlight,
    /// The sentinel for that edge is not armed.
    NotArmed,
    Disabled,
    /// The list was reset or disposed while the fetch was in flight.
    Stale,
    Disposed,
}

/// Observable view of a list, published after every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot<T> {
    pub items: Vec<T>,
    pub state: FetchState,
    pub is_loading: bool,
    pub is_pending: bool,
    pub has_next: bool,
    pub has_previous: bool,
    pub error: Option<PagingError>,
}

impl<T> Default for ListSnapshot<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            state: FetchState::Idle,
            is_loading: false,
            is_pending: true,
            has_next: true,
            has_previous: false,
            error: None,
        }
    }
}
