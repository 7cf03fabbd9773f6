//! Scrolling style types and traits
//!
//! Defines the strategy abstraction shared by all window styles and the
//! selector callers use to pick one.

use crate::error::{Error, Result};
use crate::paginator::Paginator;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Core trait for scrolling styles
///
/// A scrolling style decides which page numbers appear as navigation
/// shortcuts for the paginator's current page. Implementations hold no state
/// and are shared freely between paginators.
pub trait ScrollingStyle: Send + Sync {
    /// Name the style is registered under
    fn name(&self) -> &str;

    /// Return the ordered page numbers of the window.
    ///
    /// `page_range` overrides the paginator's configured range for styles
    /// that honour it.
    fn pages(&self, paginator: &Paginator, page_range: Option<i64>) -> Vec<u64>;
}

impl fmt::Debug for dyn ScrollingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollingStyle")
            .field("name", &self.name())
            .finish()
    }
}

/// Which scrolling style to use when building a page window
#[derive(Clone, Default)]
pub enum ScrollingStyleSelector {
    /// Use the factory's default style name
    #[default]
    Default,

    /// Look the style up by registered name
    Named(String),

    /// Use this style directly
    Instance(Arc<dyn ScrollingStyle>),
}

impl ScrollingStyleSelector {
    /// Select a style by name
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Select a concrete style instance
    pub fn instance(style: impl ScrollingStyle + 'static) -> Self {
        Self::Instance(Arc::new(style))
    }
}

impl fmt::Debug for ScrollingStyleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Instance(style) => f.debug_tuple("Instance").field(&style.name()).finish(),
        }
    }
}

impl From<&str> for ScrollingStyleSelector {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for ScrollingStyleSelector {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<Option<&str>> for ScrollingStyleSelector {
    fn from(name: Option<&str>) -> Self {
        name.map_or(Self::Default, Self::from)
    }
}

impl From<Arc<dyn ScrollingStyle>> for ScrollingStyleSelector {
    fn from(style: Arc<dyn ScrollingStyle>) -> Self {
        Self::Instance(style)
    }
}

/// Build a selector from loosely typed input (request params, JSON config).
///
/// Strings select by name and `null` selects the default; anything else is
/// rejected.
impl TryFrom<&Value> for ScrollingStyleSelector {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::Default),
            Value::String(name) => Ok(Self::Named(name.clone())),
            other => Err(Error::invalid_argument(format!(
                "scrolling style must be a style name or a ScrollingStyle instance, got {}",
                json_type_name(other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
