//! Global, name-ordered catalog of fixtures.
//!
//! The process-wide registry is created on first access and immediately
//! populated from the built-in fixture list in [`crate::suites`]. Code outside
//! this crate adds its own fixtures through [`Registry::register`] before the
//! run starts. Fixtures are never removed.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use crate::fixture::Fixture;

/// Constructor for a fixture that registers at startup.
pub type FixtureCtor = fn() -> Arc<dyn Fixture>;

/// Global registry shared across the crate.
static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    for ctor in crate::suites::BUILTIN {
        registry.register(ctor());
    }
    tracing::debug!(fixtures = registry.len(), "fixture registry initialized");
    registry
});

/// Access the global registry.
pub fn global() -> &'static Registry {
    &REGISTRY
}

/// Append-only set of fixtures sorted by class name.
#[derive(Default)]
pub struct Registry {
    fixtures: RwLock<BTreeMap<String, Arc<dyn Fixture>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fixture under its class name.
    ///
    /// Class names are unique by construction. Should a name repeat anyway,
    /// the first fixture stays registered and the duplicate is dropped with a
    /// warning.
    pub fn register(&self, fixture: Arc<dyn Fixture>) {
        let name = fixture.class_name().to_string();
        let mut fixtures = self
            .fixtures
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if fixtures.contains_key(&name) {
            tracing::warn!(fixture = %name, "duplicate fixture class name ignored");
            return;
        }
        tracing::trace!(fixture = %name, "fixture registered");
        fixtures.insert(name, fixture);
    }

    /// Snapshot of every fixture in class-name order.
    pub fn all_fixtures(&self) -> Vec<Arc<dyn Fixture>> {
        self.fixtures
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .values()
            .cloned()
            .collect()
    }

    /// Class names in registry order.
    pub fn class_names(&self) -> Vec<String> {
        self.fixtures
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .keys()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.fixtures
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
