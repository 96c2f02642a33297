use crate::error::Result;
use crate::path::{SETTINGS_PREFIX, is_settings_path, partition_routes};
use crate::projection::RouteObject;
use crate::tree::{RouteLeaf, RouteMatch, RouteTree};
use storedesk_plugin::RouteExtension;

/// The core tree and the settings tree, with path dispatch between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTrees {
    core: RouteTree,
    settings: RouteTree,
}

impl RouteTrees {
    /// Split registrations on the settings prefix and build both trees.
    pub fn assemble<'a>(routes: impl IntoIterator<Item = &'a RouteExtension>) -> Result<Self> {
        let (core, settings) = partition_routes(routes);
        Ok(Self {
            core: RouteTree::assemble(core, None)?,
            settings: RouteTree::assemble(settings, Some(SETTINGS_PREFIX))?,
        })
    }

    pub fn core(&self) -> &RouteTree {
        &self.core
    }

    pub fn settings(&self) -> &RouteTree {
        &self.settings
    }

    /// Every page, core pages first.
    pub fn leaves(&self) -> impl Iterator<Item = &RouteLeaf> {
        self.core.leaves().into_iter().chain(self.settings.leaves())
    }

    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        if is_settings_path(path) {
            self.settings.resolve(path)
        } else {
            self.core.resolve(path)
        }
    }

    /// Router configuration for (core, settings).
    pub fn route_objects(&self) -> (Vec<RouteObject>, Vec<RouteObject>) {
        (
            self.core.to_route_objects(),
            self.settings.to_route_objects(),
        )
    }
}
