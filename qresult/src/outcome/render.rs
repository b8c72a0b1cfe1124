//! Canonical diagnostic rendering of outcomes.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Cause;
use crate::location::CallerLocation;
use crate::value::Value;

/// Controls the optional parts of an outcome's rendering.
///
/// The options deserialize with defaults for missing fields, so host
/// applications can embed them in their own configuration:
///
/// ```rust
/// use qresult::RenderOptions;
///
/// let options: RenderOptions = serde_json::from_str(r#"{ "include_caller": false }"#)?;
/// assert!(options.include_type);
/// assert!(!options.include_caller);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Prefix the rendering with `<TypeName> `.
    pub include_type: bool,
    /// Append the caller location of failures built without a cause.
    pub include_caller: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_type: true,
            include_caller: true,
        }
    }
}

impl RenderOptions {
    /// Renders the body and reason only.
    #[must_use]
    pub const fn bare() -> Self {
        Self {
            include_type: false,
            include_caller: false,
        }
    }

    /// Sets whether the type name prefix is included.
    #[must_use]
    pub const fn with_type(mut self, include: bool) -> Self {
        self.include_type = include;
        self
    }

    /// Sets whether the caller location is included.
    #[must_use]
    pub const fn with_caller(mut self, include: bool) -> Self {
        self.include_caller = include;
        self
    }
}

/// Punctuation family. The two outcome families keep distinct wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Style {
    Plain,
    Coded,
}

/// Body of the rendering, exactly one of which applies.
pub(super) enum Head<'a> {
    Ok(Value),
    Err(&'a Cause),
    Fail,
}

/// Everything a rendering needs, borrowed from an outcome.
pub(super) struct Rendering<'a> {
    pub(super) type_name: &'static str,
    pub(super) style: Style,
    pub(super) head: Head<'a>,
    pub(super) code: Option<Cow<'a, str>>,
    pub(super) reason: Option<&'a str>,
    pub(super) caller: Option<&'a CallerLocation>,
    pub(super) options: RenderOptions,
}

impl fmt::Display for Rendering<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.options.include_type {
            write!(f, "<{}> ", self.type_name)?;
        }

        let code = self.code.as_deref().unwrap_or_default();
        match (self.style, &self.head) {
            (Style::Coded, Head::Ok(value)) => write!(f, "OK result={value}")?,
            (Style::Coded, Head::Err(cause)) => write!(f, "ERR code: {code}, ex: {cause}")?,
            (Style::Coded, Head::Fail) => write!(f, "FAIL code: {code}")?,
            (Style::Plain, Head::Ok(value)) => write!(f, "OK result: `{value}`")?,
            (Style::Plain, Head::Err(cause)) => write!(f, "ERR ex: `{cause}`")?,
            (Style::Plain, Head::Fail) => f.write_str("FAIL")?,
        }

        if let Some(reason) = self.reason.filter(|reason| !reason.is_empty()) {
            match self.style {
                Style::Coded => write!(f, " reason: {reason}")?,
                Style::Plain => write!(f, " reason: `{reason}`")?,
            }
        }

        if self.options.include_caller
            && let Some(caller) = self.caller
        {
            write!(f, " caller: {caller}")?;
        }
        Ok(())
    }
}
