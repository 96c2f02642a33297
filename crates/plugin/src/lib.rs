pub mod error;
pub mod manifest;
pub mod route;
pub mod widget;
pub mod zone;

pub use error::{PluginError, Result};
pub use manifest::{ExtensionInfo, ExtensionManifest, ExtensionSet};
pub use route::{MenuLink, RouteExtension, Routed};
pub use widget::{WidgetRegistration, WidgetRegistry};
pub use zone::InjectionZone;
