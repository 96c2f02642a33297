pub mod error;
pub mod path;
pub mod projection;
pub mod tree;
pub mod trees;

pub use error::{Result, RouteConfigError};
pub use path::{SETTINGS_PREFIX, is_settings_path, partition_routes, split_segments};
pub use projection::RouteObject;
pub use tree::{RouteLeaf, RouteMatch, RouteNode, RouteTree};
pub use trees::RouteTrees;

use storedesk_plugin::RouteExtension;

/// Build a route tree from flat registrations.
pub fn assemble<'a>(
    routes: impl IntoIterator<Item = &'a RouteExtension>,
    ignore_prefix: Option<&str>,
) -> Result<RouteTree> {
    RouteTree::assemble(routes, ignore_prefix)
}

