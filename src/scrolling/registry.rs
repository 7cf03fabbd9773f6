//! Scrolling style registry
//!
//! Maps style names to factories so styles can be selected by name.
//! Names are case-sensitive and may be qualified with the registry namespace
//! (`ScrollingStyle.Jumping` resolves like `Jumping`).

use super::styles::{All, Elastic, Jumping, Sliding};
use super::types::ScrollingStyle;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};
use tracing::debug;

/// Namespace the built-in styles live under
pub const DEFAULT_NAMESPACE: &str = "ScrollingStyle";

/// Factory producing a scrolling style instance
pub type StyleFactory = Arc<dyn Fn() -> Arc<dyn ScrollingStyle> + Send + Sync>;

/// Shared registry holding the built-in styles
static BUILTIN_REGISTRY: LazyLock<Arc<ScrollingStyleRegistry>> =
    LazyLock::new(|| Arc::new(ScrollingStyleRegistry::with_builtins()));

/// Name → factory lookup for scrolling styles
#[derive(Clone)]
pub struct ScrollingStyleRegistry {
    namespace: String,
    factories: HashMap<String, StyleFactory>,
}

impl Default for ScrollingStyleRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for ScrollingStyleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollingStyleRegistry")
            .field("namespace", &self.namespace)
            .field("styles", &self.names())
            .finish()
    }
}

impl ScrollingStyleRegistry {
    /// Create an empty registry under the default namespace
    pub fn new() -> Self {
        Self::with_namespace(DEFAULT_NAMESPACE)
    }

    /// Create an empty registry under a custom namespace
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            factories: HashMap::new(),
        }
    }

    /// Create a registry holding All, Elastic, Jumping and Sliding
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register("All", || Arc::new(All))
            .register("Elastic", || Arc::new(Elastic))
            .register("Jumping", || Arc::new(Jumping))
            .register("Sliding", || Arc::new(Sliding));
        registry
    }

    /// Shared, immutable registry of the built-in styles
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN_REGISTRY)
    }

    /// Namespace accepted as a name qualifier
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Register a factory under a name, replacing any previous entry.
    ///
    /// A `<namespace>.` qualifier is stripped, so the entry resolves by both
    /// its plain and its qualified name.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Arc<dyn ScrollingStyle> + Send + Sync + 'static,
    {
        let name = name.into();
        let name = self.unqualify(&name).to_string();
        debug!(style = %name, namespace = %self.namespace, "Registering scrolling style");
        self.factories.insert(name, Arc::new(factory));
        self
    }

    /// Register a ready-made style under its own name
    pub fn register_style(&mut self, style: Arc<dyn ScrollingStyle>) -> &mut Self {
        let name = style.name().to_string();
        self.register(name, move || Arc::clone(&style))
    }

    /// Check whether a name resolves
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(self.unqualify(name))
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    /// Instantiate the style registered under `name`
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn ScrollingStyle>> {
        let key = self.unqualify(name);
        let factory = self
            .factories
            .get(key)
            .ok_or_else(|| Error::unknown_style(name, &self.names()))?;

        debug!(style = %key, "Resolved scrolling style");
        Ok(factory())
    }

    /// Strip a leading `<namespace>.` qualifier
    fn unqualify<'a>(&self, name: &'a str) -> &'a str {
        name.strip_prefix(self.namespace.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(name)
    }
}
