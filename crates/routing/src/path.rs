use crate::error::{Result, RouteConfigError};
use storedesk_plugin::Routed;

/// Prefix shared by every settings page.
pub const SETTINGS_PREFIX: &str = "/settings";

/// Split a registration path into segments.
///
/// `ignore_prefix` is removed first when the path starts with it as whole
/// segments, so `/settingsx` keeps its first segment under `/settings`. What
/// remains must be empty, `/`, or an absolute path without empty segments;
/// a single trailing slash is tolerated. An empty result addresses the root.
pub fn split_segments(path: &str, ignore_prefix: Option<&str>) -> Result<Vec<String>> {
    let malformed = |reason| RouteConfigError::MalformedPath {
        path: path.to_string(),
        reason,
    };

    let relative = match ignore_prefix {
        Some(prefix) if !prefix.is_empty() => path
            .strip_prefix(prefix)
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
            .unwrap_or(path),
        _ => path,
    };

    if relative.is_empty() || relative == "/" {
        return Ok(Vec::new());
    }
    if !relative.starts_with('/') {
        return Err(malformed("path must start with `/`"));
    }

    let trimmed = relative.strip_suffix('/').unwrap_or(relative);
    let segments: Vec<&str> = trimmed[1..].split('/').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(malformed("path contains an empty segment"));
    }
    Ok(segments.into_iter().map(str::to_string).collect())
}

/// A settings page has at least one segment below `/settings`; `/settings`
/// and `/settings/` both name the core page at that path.
pub fn is_settings_path(path: &str) -> bool {
    path.strip_prefix(SETTINGS_PREFIX)
        .and_then(|rest| rest.strip_prefix('/'))
        .is_some_and(|rest| !rest.trim_end_matches('/').is_empty())
}

/// Split registrations into (core, settings) keeping their relative order.
pub fn partition_routes<R>(routes: impl IntoIterator<Item = R>) -> (Vec<R>, Vec<R>)
where
    R: Routed,
{
    routes
        .into_iter()
        .partition(|route| !is_settings_path(route.path()))
}
