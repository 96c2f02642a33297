//! Route trie built from flat path registrations.
//!
//! Every registration is split into segments and walked from the root; nodes
//! sharing a segment at the same depth are merged, children keep the order in
//! which they were first registered. A node carries at most one leaf, so the
//! same path cannot be claimed twice.

use crate::error::{Result, RouteConfigError};
use crate::path::split_segments;
use indexmap::IndexMap;
use storedesk_api::{ComponentRef, LoaderRef, RouteParams};
use storedesk_plugin::RouteExtension;

/// Page attached to a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLeaf {
    /// Path as it was registered.
    pub path: String,
    pub component: ComponentRef,
    pub loader: Option<LoaderRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteNode {
    segment: String,
    leaf: Option<RouteLeaf>,
    children: IndexMap<String, RouteNode>,
}

impl RouteNode {
    fn new(segment: &str) -> Self {
        Self {
            segment: segment.to_string(),
            ..Self::default()
        }
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn leaf(&self) -> Option<&RouteLeaf> {
        self.leaf.as_ref()
    }

    pub fn children(&self) -> impl Iterator<Item = &RouteNode> {
        self.children.values()
    }

    pub fn child(&self, segment: &str) -> Option<&RouteNode> {
        self.children.get(segment)
    }

    /// Name of the captured parameter for `:name` segments.
    pub fn param_name(&self) -> Option<&str> {
        self.segment.strip_prefix(':')
    }

    pub fn is_splat(&self) -> bool {
        self.segment == "*"
    }

    fn leaf_count(&self) -> usize {
        let own = usize::from(self.leaf.is_some());
        own + self.children().map(RouteNode::leaf_count).sum::<usize>()
    }
}

/// A resolved navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub leaf: &'a RouteLeaf,
    pub params: RouteParams,
}

/// Immutable route hierarchy; safe to share between threads once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteTree {
    prefix: Option<String>,
    root: RouteNode,
}

impl RouteTree {
    /// Build the tree from registrations, stripping `ignore_prefix` from each
    /// path. Fails on the first malformed or duplicate path.
    pub fn assemble<'a>(
        routes: impl IntoIterator<Item = &'a RouteExtension>,
        ignore_prefix: Option<&str>,
    ) -> Result<Self> {
        let mut tree = Self {
            prefix: ignore_prefix.map(str::to_string),
            root: RouteNode::default(),
        };
        for route in routes {
            tree.insert(route)?;
        }
        tracing::info!(
            prefix = tree.prefix.as_deref().unwrap_or("/"),
            routes = tree.len(),
            top_level = tree.root.children.len(),
            "assembled route tree"
        );
        Ok(tree)
    }

    fn insert(&mut self, route: &RouteExtension) -> Result<()> {
        let segments = split_segments(&route.path, self.prefix.as_deref())?;

        let mut node = &mut self.root;
        for segment in &segments {
            node = node
                .children
                .entry(segment.clone())
                .or_insert_with(|| RouteNode::new(segment));
        }

        if let Some(existing) = &node.leaf {
            tracing::warn!(
                path = %route.path,
                existing = %existing.component,
                rejected = %route.component,
                "duplicate route registration"
            );
            return Err(RouteConfigError::DuplicatePath {
                path: route.path.clone(),
            });
        }
        node.leaf = Some(RouteLeaf {
            path: route.path.clone(),
            component: route.component.clone(),
            loader: route.loader.clone(),
        });
        Ok(())
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Page registered at `/` (or at the bare prefix).
    pub fn root_leaf(&self) -> Option<&RouteLeaf> {
        self.root.leaf()
    }

    pub fn children(&self) -> impl Iterator<Item = &RouteNode> {
        self.root.children()
    }

    /// Every registered page, depth first in registration order.
    pub fn leaves(&self) -> Vec<&RouteLeaf> {
        fn collect<'a>(node: &'a RouteNode, out: &mut Vec<&'a RouteLeaf>) {
            out.extend(node.leaf());
            for child in node.children() {
                collect(child, out);
            }
        }

        let mut out = Vec::new();
        collect(&self.root, &mut out);
        out
    }

    /// Number of registered pages.
    pub fn len(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find the page for a concrete path. Literal segments win over `:param`
    /// segments, which win over `*`.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let segments = split_segments(path, self.prefix.as_deref()).ok()?;
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
        let mut params = RouteParams::new();
        let node = match_node(&self.root, &segments, &mut params)?;
        let leaf = node.leaf.as_ref()?;
        Some(RouteMatch { leaf, params })
    }
}

fn match_node<'a>(
    node: &'a RouteNode,
    segments: &[&str],
    params: &mut RouteParams,
) -> Option<&'a RouteNode> {
    let Some((head, rest)) = segments.split_first() else {
        return node.leaf.is_some().then_some(node);
    };

    let literal = node
        .children
        .get(*head)
        .filter(|child| child.param_name().is_none() && !child.is_splat());
    if let Some(found) = literal.and_then(|child| match_node(child, rest, params)) {
        return Some(found);
    }

    for child in node.children.values() {
        let Some(name) = child.param_name() else {
            continue;
        };
        let previous = params.insert(name.to_string(), head.to_string());
        if let Some(found) = match_node(child, rest, params) {
            return Some(found);
        }
        match previous {
            Some(value) => params.insert(name.to_string(), value),
            None => params.remove(name),
        };
    }

    let splat = node.children.values().find(|child| child.is_splat())?;
    if splat.leaf.is_none() {
        return None;
    }
    params.insert("*".to_string(), segments.join("/"));
    Some(splat)
}
