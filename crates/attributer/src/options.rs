//! Attribute construction options and column-name resolution.
//!
//! Options are a named structure rather than a positional list so new
//! settings can be added without breaking existing call sites. The column
//! name is resolved once when an attribute is built.

use serde::Deserialize;
use tracing::debug;

use crate::error::AttrError;

/// Options accepted when constructing an attribute.
///
/// # Example
///
/// ```
/// use attributer::AttrOptions;
///
/// let options = AttrOptions::new().with_column_name("user_id");
/// assert_eq!(options.resolve_column_name("id"), "user_id");
/// assert_eq!(AttrOptions::new().resolve_column_name("id"), "id");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct AttrOptions {
    /// Explicit column name overriding the attribute name.
    #[serde(default)]
    pub column_name: Option<String>,
}

impl AttrOptions {
    /// Creates options with every setting left at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the column-name override.
    #[must_use]
    pub fn with_column_name(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = Some(column_name.into());
        self
    }

    /// Builds options from positional string arguments.
    ///
    /// The first argument becomes the column-name override; any further
    /// arguments are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use attributer::AttrOptions;
    ///
    /// let options = AttrOptions::from_args(["user_id", "ignored"]);
    /// assert_eq!(options.column_name.as_deref(), Some("user_id"));
    /// ```
    #[must_use]
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        args.into_iter()
            .next()
            .map_or_else(Self::default, |column_name| {
                Self::default().with_column_name(column_name)
            })
    }

    /// Parses options from a JSON object such as `{"columnName": "user_id"}`.
    ///
    /// # Errors
    ///
    /// Returns [`AttrError::InvalidOptions`] when the JSON is malformed or
    /// contains unknown fields.
    pub fn from_json(json: &str) -> Result<Self, AttrError> {
        serde_json::from_str(json).map_err(|err| {
            debug!(error = %err, "rejected attribute options");
            AttrError::InvalidOptions {
                message: err.to_string(),
            }
        })
    }

    /// Resolves the column name for an attribute called `name`.
    ///
    /// A blank override counts as no override.
    #[must_use]
    pub fn resolve_column_name(&self, name: &str) -> String {
        self.column_override().unwrap_or(name).to_owned()
    }

    /// Consumes the options, yielding the resolved column name.
    pub(crate) fn into_column_name(self, name: &str) -> String {
        self.resolve_column_name(name)
    }

    fn column_override(&self) -> Option<&str> {
        self.column_name
            .as_deref()
            .filter(|column_name| !column_name.trim().is_empty())
    }
}
