use crate::error::{PluginError, Result};
use crate::route::{MenuLink, RouteExtension};
use crate::widget::{WidgetRegistration, WidgetRegistry};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Metadata for an extension (the extension's own information).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExtensionInfo {
    pub id: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Everything one extension contributes to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExtensionManifest {
    pub info: ExtensionInfo,
    #[serde(default)]
    pub routes: Vec<RouteExtension>,
    #[serde(default)]
    pub links: Vec<MenuLink>,
    #[serde(default)]
    pub widgets: Vec<WidgetRegistration>,
}

impl ExtensionManifest {
    pub fn new(info: ExtensionInfo) -> Self {
        Self {
            info,
            routes: Vec::new(),
            links: Vec::new(),
            widgets: Vec::new(),
        }
    }

    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let manifest = Self::from_json(&source)?;
        tracing::debug!(
            "Loaded extension manifest {} from {}",
            manifest.info.id,
            path.display()
        );
        Ok(manifest)
    }
}

/// Ordered collection of manifests. Built-in pages go first, extensions
/// follow in load order, which is the order routes attach to the tree.
#[derive(Debug, Clone, Default)]
pub struct ExtensionSet {
    manifests: Vec<ExtensionManifest>,
    ids: HashSet<String>,
}

impl ExtensionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, manifest: ExtensionManifest) -> Result<()> {
        if !self.ids.insert(manifest.info.id.clone()) {
            return Err(PluginError::DuplicateExtension(manifest.info.id));
        }
        tracing::info!(
            "Registered extension {} v{} ({} routes, {} links, {} widgets)",
            manifest.info.id,
            manifest.info.version,
            manifest.routes.len(),
            manifest.links.len(),
            manifest.widgets.len()
        );
        self.manifests.push(manifest);
        Ok(())
    }

    /// Load every `*.json` manifest in `dir`, sorted by file name.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            self.add(ExtensionManifest::from_path(path)?)?;
        }
        Ok(paths.len())
    }

    pub fn manifests(&self) -> &[ExtensionManifest] {
        &self.manifests
    }

    pub fn routes(&self) -> impl Iterator<Item = &RouteExtension> {
        self.manifests.iter().flat_map(|m| m.routes.iter())
    }

    pub fn links(&self) -> impl Iterator<Item = &MenuLink> {
        self.manifests.iter().flat_map(|m| m.links.iter())
    }

    pub fn widget_registry(&self) -> WidgetRegistry {
        WidgetRegistry::from_registrations(
            self.manifests.iter().flat_map(|m| m.widgets.iter().cloned()),
        )
    }
}
