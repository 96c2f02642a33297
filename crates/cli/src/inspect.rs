use storedesk_core::{CoreError, DashboardConfig};
use storedesk_plugin::WidgetRegistry;
use storedesk_routing::{RouteTree, RouteTrees};
use tabled::{Table, Tabled, settings::Style};

/// Route trees and widget slots, assembled without any loaders attached.
struct Catalog {
    routes: RouteTrees,
    widgets: WidgetRegistry,
}

impl Catalog {
    fn load(config: &DashboardConfig) -> storedesk_core::Result<Self> {
        let extensions = storedesk_runtime::load_extensions(config)?;
        Ok(Self {
            routes: RouteTrees::assemble(extensions.routes())?,
            widgets: extensions.widget_registry(),
        })
    }
}

#[derive(Tabled, Debug, PartialEq)]
struct RouteRow {
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Component")]
    component: String,
    #[tabled(rename = "Loader")]
    loader: String,
}

#[derive(Tabled, Debug, PartialEq)]
struct WidgetRow {
    #[tabled(rename = "Zone")]
    zone: String,
    #[tabled(rename = "Widgets")]
    widgets: String,
}

fn route_rows(tree: &RouteTree) -> Vec<RouteRow> {
    tree.leaves()
        .into_iter()
        .map(|leaf| RouteRow {
            path: leaf.path.clone(),
            component: leaf.component.to_string(),
            loader: leaf
                .loader
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

fn widget_rows(widgets: &WidgetRegistry) -> Vec<WidgetRow> {
    widgets
        .occupied_zones()
        .into_iter()
        .map(|zone| WidgetRow {
            zone: zone.to_string(),
            widgets: widgets
                .widgets_for(zone)
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

pub fn routes(
    config: &DashboardConfig,
    settings: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::load(config)?;
    let tree = if settings {
        catalog.routes.settings()
    } else {
        catalog.routes.core()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&tree.to_route_objects())?);
        return Ok(());
    }

    let rows = route_rows(tree);
    if rows.is_empty() {
        println!("No routes registered.");
    } else {
        println!("{}", Table::new(rows).with(Style::psql()));
    }
    Ok(())
}

pub fn resolve(config: &DashboardConfig, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::load(config)?;
    let matched = catalog
        .routes
        .resolve(path)
        .ok_or_else(|| CoreError::NotFound(path.to_string()))?;

    println!("Route:     {}", matched.leaf.path);
    println!("Component: {}", matched.leaf.component);
    if let Some(loader) = &matched.leaf.loader {
        println!("Loader:    {}", loader);
    }
    for (name, value) in &matched.params {
        println!("  {} = {}", name, value);
    }
    Ok(())
}

pub fn widgets(config: &DashboardConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::load(config)?;
    let rows = widget_rows(&catalog.widgets);
    if rows.is_empty() {
        println!("No widgets registered.");
    } else {
        println!("{}", Table::new(rows).with(Style::psql()));
    }
    Ok(())
}
