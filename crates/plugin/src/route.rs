use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use storedesk_api::{ComponentRef, LoaderRef};

/// One navigable page contributed by the dashboard itself or by an extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RouteExtension {
    /// Absolute, slash separated, e.g. `/products/:id/edit`.
    pub path: String,
    pub component: ComponentRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loader: Option<LoaderRef>,
}

impl RouteExtension {
    pub fn new(path: impl Into<String>, component: impl Into<ComponentRef>) -> Self {
        Self {
            path: path.into(),
            component: component.into(),
            loader: None,
        }
    }

    pub fn with_loader(mut self, loader: impl Into<LoaderRef>) -> Self {
        self.loader = Some(loader.into());
        self
    }
}

/// Sidebar entry pointing at a contributed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MenuLink {
    pub path: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<ComponentRef>,
}

/// Anything addressed by an absolute dashboard path.
pub trait Routed {
    fn path(&self) -> &str;
}

impl Routed for RouteExtension {
    fn path(&self) -> &str {
        &self.path
    }
}

impl Routed for MenuLink {
    fn path(&self) -> &str {
        &self.path
    }
}

impl<T: Routed + ?Sized> Routed for &T {
    fn path(&self) -> &str {
        (**self).path()
    }
}
