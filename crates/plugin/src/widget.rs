use crate::zone::InjectionZone;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use storedesk_api::ComponentRef;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WidgetRegistration {
    #[schemars(with = "String")]
    pub zone: InjectionZone,
    pub component: ComponentRef,
}

/// Typed slots: each injection zone maps to the widgets rendered there, in
/// registration order.
#[derive(Debug, Clone, Default)]
pub struct WidgetRegistry {
    slots: HashMap<InjectionZone, Vec<ComponentRef>>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_registrations(registrations: impl IntoIterator<Item = WidgetRegistration>) -> Self {
        let mut registry = Self::new();
        for WidgetRegistration { zone, component } in registrations {
            registry.register(zone, component);
        }
        registry
    }

    pub fn register(&mut self, zone: InjectionZone, component: ComponentRef) {
        tracing::trace!(zone = %zone, component = %component, "registering widget");
        self.slots.entry(zone).or_default().push(component);
    }

    pub fn widgets_for(&self, zone: InjectionZone) -> &[ComponentRef] {
        self.slots.get(&zone).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Zones with at least one widget, in declaration order.
    pub fn occupied_zones(&self) -> Vec<InjectionZone> {
        InjectionZone::ALL
            .iter()
            .copied()
            .filter(|zone| self.slots.contains_key(zone))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
