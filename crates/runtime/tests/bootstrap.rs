use std::fs;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use storedesk_api::{ApiResult, LoaderRef, RouteLoader, RouteParams};
use storedesk_core::{CoreError, DashboardConfig, DynRouteLoader};
use storedesk_plugin::{InjectionZone, PluginError};
use storedesk_runtime::{BUILTIN_EXTENSION_ID, build_dashboard, builtin_manifest, load_extensions};

const REVIEWS: &str = r#"{
    "info": { "id": "reviews", "name": "Reviews", "version": "0.3.0" },
    "routes": [
        { "path": "/reviews", "component": "ReviewList" },
        { "path": "/reviews/:id", "component": "ReviewDetail", "loader": "review" },
        { "path": "/settings/reviews", "component": "ReviewSettings" }
    ],
    "links": [ { "path": "/reviews", "label": "Reviews" } ],
    "widgets": [ { "zone": "product.details.after", "component": "ReviewSummary" } ]
}"#;

struct ReviewLoader;

#[async_trait]
impl RouteLoader for ReviewLoader {
    async fn load(&self, params: &RouteParams) -> ApiResult<Value> {
        Ok(json!({ "review": params.get("id") }))
    }
}

fn review_loader() -> Vec<(LoaderRef, DynRouteLoader)> {
    vec![(LoaderRef::from("review"), Arc::new(ReviewLoader) as DynRouteLoader)]
}

#[test]
fn builtin_pages_assemble_without_conflicts() {
    let manifest = builtin_manifest();
    assert_eq!(manifest.info.id, BUILTIN_EXTENSION_ID);

    let dashboard = build_dashboard(DashboardConfig::default(), Vec::new()).unwrap();
    let settings_pages = manifest
        .routes
        .iter()
        .filter(|r| r.path.starts_with("/settings/"))
        .count();
    assert_eq!(dashboard.settings_routes().len(), settings_pages);
    assert_eq!(
        dashboard.core_routes().len() + dashboard.settings_routes().len(),
        manifest.routes.len()
    );
    assert!(dashboard.settings_links().iter().any(|l| l.label == "Regions"));
    assert!(dashboard.core_links().iter().all(|l| !l.path.starts_with("/settings/")));
}

#[tokio::test]
async fn extensions_dir_contributes_pages() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("reviews.json"), REVIEWS).unwrap();
    fs::write(dir.path().join("README.md"), "not a manifest").unwrap();

    let config = DashboardConfig {
        extensions_dir: Some(dir.path().to_path_buf()),
        ..DashboardConfig::default()
    };
    let dashboard = build_dashboard(config, review_loader()).unwrap();

    let navigation = dashboard.navigate("/reviews/rev_7").await.unwrap();
    assert_eq!(navigation.component.as_str(), "ReviewDetail");
    let data = navigation.outcome.as_ref().and_then(|o| o.data()).unwrap();
    assert_eq!(data["review"], "rev_7");

    let settings = dashboard.navigate("/settings/reviews").await.unwrap();
    assert_eq!(settings.component.as_str(), "ReviewSettings");

    assert_eq!(
        dashboard.widgets_for(InjectionZone::ProductDetailsAfter)[0].as_str(),
        "ReviewSummary"
    );
    assert_eq!(
        dashboard.core_links().last().map(|l| l.label.as_str()),
        Some("Reviews")
    );
}

#[test]
fn extension_reusing_builtin_id_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = REVIEWS.replace(r#""id": "reviews""#, r#""id": "storedesk""#);
    fs::write(dir.path().join("reviews.json"), manifest).unwrap();

    let config = DashboardConfig {
        extensions_dir: Some(dir.path().to_path_buf()),
        ..DashboardConfig::default()
    };
    let err = load_extensions(&config).unwrap_err();
    assert!(matches!(
        err,
        CoreError::Plugin(PluginError::DuplicateExtension(id)) if id == BUILTIN_EXTENSION_ID
    ));
}

#[test]
fn missing_extensions_dir_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = DashboardConfig {
        extensions_dir: Some(dir.path().join("absent")),
        ..DashboardConfig::default()
    };
    assert!(matches!(
        build_dashboard(config, Vec::new()),
        Err(CoreError::Plugin(PluginError::Io(_)))
    ));
}
