use std::path::Path;

use storedesk_api::LoaderRef;
use storedesk_core::{Dashboard, DashboardConfig, DynRouteLoader, LoggingConfig};
use storedesk_plugin::{ExtensionInfo, ExtensionManifest, ExtensionSet, MenuLink, RouteExtension};
use tracing_appender::non_blocking::WorkerGuard;

/// Id of the manifest carrying the dashboard's own pages.
pub const BUILTIN_EXTENSION_ID: &str = "storedesk";

const CORE_PAGES: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/orders", "OrderList"),
    ("/orders/:id", "OrderDetail"),
    ("/orders/:id/returns", "OrderCreateReturn"),
    ("/products", "ProductList"),
    ("/products/create", "ProductCreate"),
    ("/products/:id", "ProductDetail"),
    ("/products/:id/edit", "ProductEdit"),
    ("/products/:id/variants/:variant_id", "ProductVariantDetail"),
    ("/categories", "CategoryList"),
    ("/categories/:id", "CategoryDetail"),
    ("/collections", "CollectionList"),
    ("/collections/:id", "CollectionDetail"),
    ("/inventory", "InventoryList"),
    ("/inventory/:id", "InventoryDetail"),
    ("/reservations", "ReservationList"),
    ("/customers", "CustomerList"),
    ("/customers/:id", "CustomerDetail"),
    ("/customer-groups", "CustomerGroupList"),
    ("/customer-groups/:id", "CustomerGroupDetail"),
    ("/promotions", "PromotionList"),
    ("/promotions/:id", "PromotionDetail"),
    ("/campaigns", "CampaignList"),
    ("/campaigns/:id", "CampaignDetail"),
    ("/price-lists", "PriceListList"),
    ("/price-lists/:id", "PriceListDetail"),
    ("/settings", "SettingsIndex"),
];

const SETTINGS_PAGES: &[(&str, &str)] = &[
    ("/settings/profile", "ProfileDetail"),
    ("/settings/store", "StoreDetail"),
    ("/settings/users", "UserList"),
    ("/settings/users/:id", "UserDetail"),
    ("/settings/regions", "RegionList"),
    ("/settings/regions/:id", "RegionDetail"),
    ("/settings/tax-regions", "TaxRegionList"),
    ("/settings/tax-regions/:id", "TaxRegionDetail"),
    ("/settings/locations", "LocationList"),
    ("/settings/locations/:location_id", "LocationDetail"),
    ("/settings/sales-channels", "SalesChannelList"),
    ("/settings/sales-channels/:id", "SalesChannelDetail"),
    ("/settings/api-key-management", "ApiKeyManagementList"),
];

const MAIN_MENU: &[(&str, &str)] = &[
    ("/orders", "Orders"),
    ("/products", "Products"),
    ("/inventory", "Inventory"),
    ("/customers", "Customers"),
    ("/promotions", "Promotions"),
    ("/price-lists", "Price Lists"),
    ("/settings/store", "Store"),
    ("/settings/users", "Users"),
    ("/settings/regions", "Regions"),
    ("/settings/tax-regions", "Tax Regions"),
    ("/settings/locations", "Locations & Shipping"),
    ("/settings/sales-channels", "Sales Channels"),
];

/// Manifest describing the pages that ship with the dashboard.
pub fn builtin_manifest() -> ExtensionManifest {
    let mut manifest = ExtensionManifest::new(ExtensionInfo {
        id: BUILTIN_EXTENSION_ID.to_string(),
        name: "Storedesk".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: Some("Built-in admin pages".to_string()),
    });
    manifest.routes = CORE_PAGES
        .iter()
        .chain(SETTINGS_PAGES)
        .map(|&(path, component)| RouteExtension::new(path, component))
        .collect();
    manifest.links = MAIN_MENU
        .iter()
        .map(|&(path, label)| MenuLink {
            path: path.to_string(),
            label: label.to_string(),
            icon: None,
        })
        .collect();
    manifest
}

/// Built-in pages followed by every manifest in `extensions_dir`.
pub fn load_extensions(config: &DashboardConfig) -> storedesk_core::Result<ExtensionSet> {
    let mut extensions = ExtensionSet::new();
    extensions.add(builtin_manifest())?;

    if let Some(dir) = &config.extensions_dir {
        let loaded = extensions.load_dir(dir)?;
        tracing::info!("Loaded {} extension manifest(s) from {}", loaded, dir.display());
    }
    Ok(extensions)
}

/// Read the config file if one is given, otherwise start from defaults.
/// Environment overrides apply either way.
pub fn load_config(path: Option<&Path>) -> storedesk_core::Result<DashboardConfig> {
    match path {
        Some(path) => DashboardConfig::load(path),
        None => {
            let mut config = DashboardConfig::default();
            config.apply_env();
            Ok(config)
        }
    }
}

/// Bootstraps a dashboard with the built-in pages, the configured extensions
/// and the given route loaders.
pub fn build_dashboard(
    config: DashboardConfig,
    loaders: impl IntoIterator<Item = (LoaderRef, DynRouteLoader)>,
) -> storedesk_core::Result<Dashboard> {
    let extensions = load_extensions(&config)?;
    let mut builder = Dashboard::builder(config).with_extensions(extensions);
    for (name, loader) in loaders {
        builder = builder.with_loader(name, loader);
    }
    builder.build()
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, config: &LoggingConfig) -> WorkerGuard {
    storedesk_core::logging::init_logging(component, config.to_stderr, config.filter.as_deref())
}
