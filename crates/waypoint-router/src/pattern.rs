//! Route pattern parsing and validation.
//!
//! A pattern is a path template like `/player/:name`: literal segments must
//! match a navigation path exactly, while `:`-prefixed segments capture any
//! non-empty path segment under the given name. Patterns are validated when
//! the table is built, so a malformed template is a startup fault rather
//! than a silent never-matching entry.

use std::fmt;

/// One component of a parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must match the corresponding path segment exactly.
    Literal(String),
    /// Matches any non-empty path segment, capturing it under this name.
    Param(String),
}

impl Segment {
    /// Returns the capture name if this is a named segment.
    #[must_use]
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Self::Param(name) => Some(name),
            Self::Literal(_) => None,
        }
    }
}

/// A parsed, validated path template.
///
/// The root pattern `/` parses to an empty segment list and matches only
/// the root path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parses and validates a path template.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if the template does not start with `/`,
    /// contains an empty segment, names a parameter with an empty or
    /// non-identifier name, or binds the same parameter name twice.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let err = |kind| PatternError {
            pattern: pattern.to_string(),
            kind,
        };

        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(err(PatternErrorKind::MissingLeadingSlash));
        };

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for part in rest.split('/') {
                if part.is_empty() {
                    return Err(err(PatternErrorKind::EmptySegment));
                }
                if let Some(name) = part.strip_prefix(':') {
                    if name.is_empty() {
                        return Err(err(PatternErrorKind::EmptyParamName));
                    }
                    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                        return Err(err(PatternErrorKind::InvalidParamName {
                            name: name.to_string(),
                        }));
                    }
                    if segments.iter().any(|s: &Segment| s.param_name() == Some(name)) {
                        return Err(err(PatternErrorKind::DuplicateParamName {
                            name: name.to_string(),
                        }));
                    }
                    segments.push(Segment::Param(name.to_string()));
                } else {
                    segments.push(Segment::Literal(part.to_string()));
                }
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// Returns the original template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the capture names in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::param_name)
    }

    /// Attempts to match a path against this pattern.
    ///
    /// `path` must be the path portion only (query string and fragment
    /// already removed). On success, returns the captured parameters as
    /// `(name, value)` pairs in segment order; values borrow from `path`.
    /// Named segments refuse empty values, so a trailing slash fails the
    /// final parameter rather than capturing `""`.
    #[must_use]
    pub fn match_path<'a>(&'a self, path: &'a str) -> Option<Vec<(&'a str, &'a str)>> {
        let rest = path.strip_prefix('/')?;
        if self.segments.is_empty() {
            return rest.is_empty().then(Vec::new);
        }
        if rest.is_empty() {
            return None;
        }

        let mut params = Vec::new();
        let mut parts = rest.split('/');
        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(lit) => {
                    if lit != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    params.push((name.as_str(), part));
                }
            }
        }

        // Path must not have segments left over.
        if parts.next().is_some() {
            return None;
        }

        Some(params)
    }

    /// Substitutes parameter values into the template, producing a path.
    ///
    /// `lookup` is consulted once per named segment; returning `None` means
    /// the value is missing. Empty values are rejected because a pattern
    /// never matches an empty segment, so the produced path would not route
    /// back to this pattern.
    pub(crate) fn fill<'v, F>(&self, mut lookup: F) -> Result<String, FillError>
    where
        F: FnMut(&str) -> Option<&'v str>,
    {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(lit) => out.push_str(lit),
                Segment::Param(name) => {
                    let value = lookup(name).ok_or_else(|| FillError::Missing {
                        name: name.clone(),
                    })?;
                    if value.is_empty() {
                        return Err(FillError::Empty { name: name.clone() });
                    }
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Strips the query string and fragment from a navigation path.
///
/// Route matching operates on the path portion only; the host's history
/// mechanism may hand over a full location string.
#[must_use]
pub(crate) fn path_portion(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// A parameter substitution failure, produced by [`RoutePattern::fill`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FillError {
    /// No value was supplied for a named segment.
    Missing { name: String },
    /// The supplied value was empty.
    Empty { name: String },
}

/// A malformed route pattern, detected at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternError {
    /// The offending template text.
    pub pattern: String,
    /// What was wrong with it.
    pub kind: PatternErrorKind,
}

/// The ways a route pattern can be malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternErrorKind {
    /// The template does not start with `/`.
    MissingLeadingSlash,
    /// The template contains an empty segment (`//` or a trailing slash).
    EmptySegment,
    /// A named segment is a bare `:`.
    EmptyParamName,
    /// A parameter name contains characters outside `[A-Za-z0-9_]`.
    InvalidParamName { name: String },
    /// The same parameter name is bound twice in one template.
    DuplicateParamName { name: String },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern = &self.pattern;
        match &self.kind {
            PatternErrorKind::MissingLeadingSlash => {
                write!(f, "invalid route pattern {pattern:?}: must start with '/'")
            }
            PatternErrorKind::EmptySegment => {
                write!(f, "invalid route pattern {pattern:?}: empty segment")
            }
            PatternErrorKind::EmptyParamName => {
                write!(f, "invalid route pattern {pattern:?}: ':' without a name")
            }
            PatternErrorKind::InvalidParamName { name } => {
                write!(
                    f,
                    "invalid route pattern {pattern:?}: parameter name {name:?} \
                     must be alphanumeric or '_'"
                )
            }
            PatternErrorKind::DuplicateParamName { name } => {
                write!(
                    f,
                    "invalid route pattern {pattern:?}: parameter {name:?} bound twice"
                )
            }
        }
    }
}

impl std::error::Error for PatternError {}
