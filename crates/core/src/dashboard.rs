//! The assembled admin shell: route trees, navigation links, widget slots and
//! the loaders backing each page.

use crate::boundary::{self, BoundaryOutcome};
use crate::config::DashboardConfig;
use crate::endpoint::ListEndpoint;
use crate::error::{CoreError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use storedesk_api::{ComponentRef, LoaderRef, RouteLoader, RouteParams};
use storedesk_paging::{DynPagedSource, InfiniteList};
use storedesk_plugin::{ExtensionSet, InjectionZone, MenuLink, WidgetRegistry};
use storedesk_routing::{RouteMatch, RouteObject, RouteTree, RouteTrees, partition_routes};

pub type DynRouteLoader = Arc<dyn RouteLoader + Send + Sync>;

pub struct DashboardBuilder {
    config: DashboardConfig,
    extensions: ExtensionSet,
    loaders: HashMap<LoaderRef, DynRouteLoader>,
}

impl DashboardBuilder {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            extensions: ExtensionSet::new(),
            loaders: HashMap::new(),
        }
    }

    pub fn with_extensions(mut self, extensions: ExtensionSet) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_loader(mut self, name: impl Into<LoaderRef>, loader: DynRouteLoader) -> Self {
        self.loaders.insert(name.into(), loader);
        self
    }

    /// Assemble both route trees and check that every page's loader exists.
    pub fn build(self) -> Result<Dashboard> {
        let routes = RouteTrees::assemble(self.extensions.routes())?;

        for leaf in routes.leaves() {
            if let Some(loader) = &leaf.loader
                && !self.loaders.contains_key(loader)
            {
                return Err(CoreError::UnknownLoader {
                    path: leaf.path.clone(),
                    loader: loader.to_string(),
                });
            }
        }

        let (core_links, settings_links) = partition_routes(self.extensions.links().cloned());
        let widgets = self.extensions.widget_registry();

        tracing::info!(
            extensions = self.extensions.manifests().len(),
            core_routes = routes.core().len(),
            settings_routes = routes.settings().len(),
            widgets = widgets.len(),
            "dashboard assembled"
        );

        Ok(Dashboard {
            config: self.config,
            routes,
            core_links,
            settings_links,
            widgets,
            loaders: self.loaders,
        })
    }
}

/// Result of navigating to a concrete path.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    /// Path the page was registered under.
    pub route: String,
    pub component: ComponentRef,
    pub params: RouteParams,
    /// `None` for pages without a loader.
    pub outcome: Option<BoundaryOutcome>,
}

pub struct Dashboard {
    config: DashboardConfig,
    routes: RouteTrees,
    core_links: Vec<MenuLink>,
    settings_links: Vec<MenuLink>,
    widgets: WidgetRegistry,
    loaders: HashMap<LoaderRef, DynRouteLoader>,
}

impl Dashboard {
    pub fn builder(config: DashboardConfig) -> DashboardBuilder {
        DashboardBuilder::new(config)
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteTrees {
        &self.routes
    }

    pub fn core_routes(&self) -> &RouteTree {
        self.routes.core()
    }

    pub fn settings_routes(&self) -> &RouteTree {
        self.routes.settings()
    }

    pub fn core_links(&self) -> &[MenuLink] {
        &self.core_links
    }

    pub fn settings_links(&self) -> &[MenuLink] {
        &self.settings_links
    }

    pub fn widgets_for(&self, zone: InjectionZone) -> &[ComponentRef] {
        self.widgets.widgets_for(zone)
    }

    /// Router configuration for the core pages and the settings pages.
    pub fn route_objects(&self) -> (Vec<RouteObject>, Vec<RouteObject>) {
        self.routes.route_objects()
    }

    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.routes.resolve(path)
    }

    /// Resolve `path` and run its loader inside the page's error boundary.
    pub async fn navigate(&self, path: &str) -> Result<Navigation> {
        let matched = self
            .resolve(path)
            .ok_or_else(|| CoreError::NotFound(path.to_string()))?;
        let leaf = matched.leaf;
        tracing::debug!(path, route = %leaf.path, "navigating");

        let outcome = match &leaf.loader {
            Some(name) => {
                let loader = self.loaders.get(name).ok_or_else(|| CoreError::UnknownLoader {
                    path: leaf.path.clone(),
                    loader: name.to_string(),
                })?;
                Some(boundary::guard(&leaf.path, loader.load(&matched.params)).await)
            }
            None => None,
        };

        Ok(Navigation {
            route: leaf.path.clone(),
            component: leaf.component.clone(),
            params: matched.params,
            outcome,
        })
    }

    pub fn endpoint(&self, resource: &str) -> Result<ListEndpoint> {
        ListEndpoint::new(&self.config.backend_url, resource)
    }

    /// Infinite list sized by the configured paging options.
    pub fn infinite_list<T>(&self, source: DynPagedSource<T>) -> InfiniteList<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        InfiniteList::new(source, self.config.list_options())
    }
}
