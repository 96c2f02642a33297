use crate::types::Edge;
use crate::window::PageWindow;

/// Platform hook that reports when a rendered item enters the viewport.
///
/// `anchor` is the absolute offset of the item to watch. The list calls
/// [`InfiniteList::on_visible`](crate::InfiniteList::on_visible) itself once
/// the platform reports an intersection.
pub trait VisibilityObserver: Send + Sync {
    fn observe(&self, edge: Edge, anchor: usize);
    fn disconnect(&self, edge: Edge);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl VisibilityObserver for NoopObserver {
    fn observe(&self, _edge: Edge, _anchor: usize) {}
    fn disconnect(&self, _edge: Edge) {}
}

/// Which edges are currently watched and at which item.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sentinels {
    top: Option<usize>,
    bottom: Option<usize>,
}

impl Sentinels {
    pub fn anchor(&self, edge: Edge) -> Option<usize> {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
        }
    }

    pub fn is_armed(&self, edge: Edge) -> bool {
        self.anchor(edge).is_some()
    }

    /// Stop watching both edges; returns the edges that were armed.
    pub fn disarm(&mut self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(2);
        if self.top.take().is_some() {
            edges.push(Edge::Top);
        }
        if self.bottom.take().is_some() {
            edges.push(Edge::Bottom);
        }
        edges
    }

    /// Watch the first and last retained items. Nothing is armed while the
    /// window holds no items.
    pub fn arm<T>(&mut self, window: &PageWindow<T>) -> Vec<(Edge, usize)> {
        self.top = window
            .pages()
            .find(|page| !page.items.is_empty())
            .map(|page| page.offset);
        self.bottom = window
            .pages()
            .rev()
            .find(|page| !page.items.is_empty())
            .map(|page| page.offset + page.items.len() - 1);

        [Edge::Top, Edge::Bottom]
            .into_iter()
            .filter_map(|edge| self.anchor(edge).map(|anchor| (edge, anchor)))
            .collect()
    }
}
