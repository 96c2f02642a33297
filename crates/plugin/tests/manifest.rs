use std::fs;

use storedesk_plugin::{ExtensionManifest, ExtensionSet, InjectionZone, PluginError};

const LOYALTY: &str = r#"{
    "info": { "id": "loyalty", "name": "Loyalty", "version": "1.2.0" },
    "routes": [
        { "path": "/loyalty", "component": "LoyaltyOverview" },
        { "path": "/loyalty/:id", "component": "LoyaltyDetail", "loader": "loyalty-detail" },
        { "path": "/settings/loyalty", "component": "LoyaltySettings" }
    ],
    "links": [ { "path": "/loyalty", "label": "Loyalty" } ],
    "widgets": [ { "zone": "customer.details.after", "component": "LoyaltyBadge" } ]
}"#;

#[test]
fn parses_manifest_with_all_contributions() {
    let manifest = ExtensionManifest::from_json(LOYALTY).unwrap();
    assert_eq!(manifest.info.id, "loyalty");
    assert_eq!(manifest.info.description, None);
    assert_eq!(manifest.routes.len(), 3);
    assert_eq!(
        manifest.routes[1].loader.as_ref().map(|l| l.as_str()),
        Some("loyalty-detail")
    );
    assert_eq!(manifest.widgets[0].zone, InjectionZone::CustomerDetailsAfter);
}

#[test]
fn manifest_with_unknown_zone_fails_to_parse() {
    let source = r#"{
        "info": { "id": "x", "name": "X", "version": "0.1.0" },
        "widgets": [ { "zone": "order.footer", "component": "Nope" } ]
    }"#;
    let err = ExtensionManifest::from_json(source).unwrap_err();
    assert!(matches!(err, PluginError::Manifest(_)));
}

#[test]
fn duplicate_extension_ids_are_rejected() {
    let mut set = ExtensionSet::new();
    set.add(ExtensionManifest::from_json(LOYALTY).unwrap()).unwrap();
    let err = set
        .add(ExtensionManifest::from_json(LOYALTY).unwrap())
        .unwrap_err();
    assert!(matches!(err, PluginError::DuplicateExtension(id) if id == "loyalty"));
}

#[test]
fn load_dir_reads_json_manifests_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b-loyalty.json"), LOYALTY).unwrap();
    fs::write(
        dir.path().join("a-reviews.json"),
        r#"{
            "info": { "id": "reviews", "name": "Reviews", "version": "0.3.0" },
            "routes": [ { "path": "/reviews", "component": "Reviews" } ],
            "widgets": [ { "zone": "customer.details.after", "component": "ReviewCount" } ]
        }"#,
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let mut set = ExtensionSet::new();
    assert_eq!(set.load_dir(dir.path()).unwrap(), 2);

    let paths: Vec<_> = set.routes().map(|r| r.path.as_str()).collect();
    assert_eq!(
        paths,
        ["/reviews", "/loyalty", "/loyalty/:id", "/settings/loyalty"]
    );

    let registry = set.widget_registry();
    let widgets: Vec<_> = registry
        .widgets_for(InjectionZone::CustomerDetailsAfter)
        .iter()
        .map(|c| c.as_str())
        .collect();
    assert_eq!(widgets, ["ReviewCount", "LoyaltyBadge"]);
    assert_eq!(set.links().count(), 1);
}
