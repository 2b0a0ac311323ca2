//! The route table: ordered entries, built once, read-only thereafter.

use std::fmt;

use log::{debug, trace};

use crate::pattern::{FillError, PatternError, RoutePattern, path_portion};
use crate::r#match::{RouteLookup, RouteMatch};

/// One entry in the table: a pattern, a unique name, and the view handle
/// the host renders when the entry matches.
///
/// `V` is opaque to the router; the table never inspects it.
#[derive(Debug, Clone)]
pub struct Route<V> {
    pattern: RoutePattern,
    name: String,
    view: V,
}

impl<V> Route<V> {
    /// The parsed path template.
    #[must_use]
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// The unique route name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The view handle.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }
}

/// An ordered route table.
///
/// Insertion order is match precedence: [`RouteTable::lookup`] scans entries
/// in declaration order and the first full match wins. The table is
/// process-wide configuration state, constructed once at startup via
/// [`RouteTable::builder`] and immutable afterwards.
///
/// # Example
///
/// ```
/// use waypoint_router::{RouteLookup, RouteTable};
///
/// let table = RouteTable::builder()
///     .route("/player/:name", "player", "player-profile")
///     .build()?;
///
/// match table.lookup("/player/alice") {
///     RouteLookup::Match(m) => {
///         assert_eq!(m.route.name(), "player");
///         assert_eq!(m.get_param("name"), Some("alice"));
///     }
///     RouteLookup::NotFound => unreachable!(),
/// }
/// # Ok::<(), waypoint_router::TableError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteTable<V> {
    /// Starts declaring a table.
    #[must_use]
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder::new()
    }

    /// Finds the first entry matching a navigation path.
    ///
    /// The query string and fragment are stripped before matching; the
    /// remainder is compared segment by segment against each pattern in
    /// declaration order. Pure lookup, no side effects.
    #[must_use]
    pub fn lookup<'a>(&'a self, path: &'a str) -> RouteLookup<'a, V> {
        let path = path_portion(path);
        for route in &self.routes {
            if let Some(params) = route.pattern.match_path(path) {
                trace!("path {path:?} matched route {:?}", route.name);
                return RouteLookup::Match(RouteMatch { route, params });
            }
        }
        trace!("path {path:?} matched no route");
        RouteLookup::NotFound
    }

    /// Finds an entry by its unique name.
    #[must_use]
    pub fn route(&self, name: &str) -> Option<&Route<V>> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Builds a navigable path for a named route.
    ///
    /// Each `:param` in the route's pattern is replaced by the value under
    /// the same key in `params`.
    ///
    /// # Errors
    ///
    /// [`BuildPathError::UnknownRoute`] if no entry has that name;
    /// [`BuildPathError::MissingParam`] / [`BuildPathError::EmptyParam`] if
    /// `params` lacks a required value or supplies an empty one.
    pub fn path_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String, BuildPathError> {
        let route = self.route(name).ok_or_else(|| BuildPathError::UnknownRoute {
            name: name.to_string(),
        })?;
        route
            .pattern
            .fill(|key| {
                params
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| *v)
            })
            .map_err(|e| match e {
                FillError::Missing { name: param } => BuildPathError::MissingParam {
                    route: name.to_string(),
                    param,
                },
                FillError::Empty { name: param } => BuildPathError::EmptyParam {
                    route: name.to_string(),
                    param,
                },
            })
    }

    /// The entries, in declaration order.
    #[must_use]
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// A builder accumulating route declarations.
///
/// Declarations are validated in [`build`](Self::build), so a malformed
/// pattern or duplicate name surfaces as an error at startup rather than a
/// panic mid-declaration.
#[derive(Debug)]
pub struct RouteTableBuilder<V> {
    declarations: Vec<(String, String, V)>,
}

impl<V> RouteTableBuilder<V> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            declarations: Vec::new(),
        }
    }

    /// Declares a route binding `pattern` to `view` under a unique `name`.
    ///
    /// Declaration order is match precedence.
    #[must_use]
    pub fn route(mut self, pattern: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        self.declarations.push((pattern.into(), name.into(), view));
        self
    }

    /// Parses and validates every declaration, producing the table.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidPattern`] for a malformed template;
    /// [`TableError::DuplicateName`] if two declarations share a name.
    pub fn build(self) -> Result<RouteTable<V>, TableError> {
        let mut routes: Vec<Route<V>> = Vec::with_capacity(self.declarations.len());
        for (pattern, name, view) in self.declarations {
            if routes.iter().any(|r| r.name == name) {
                return Err(TableError::DuplicateName { name });
            }
            let pattern = RoutePattern::parse(&pattern)?;
            routes.push(Route {
                pattern,
                name,
                view,
            });
        }
        debug!("route table built with {} entries", routes.len());
        Ok(RouteTable { routes })
    }
}

impl<V> Default for RouteTableBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// A configuration-time fault while building the table.
///
/// Both variants should abort startup; a table with a malformed pattern or
/// an ambiguous name cannot be navigated reliably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A declaration's path template failed to parse.
    InvalidPattern(PatternError),
    /// Two declarations share a route name.
    DuplicateName {
        /// The name declared twice.
        name: String,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern(e) => write!(f, "{e}"),
            Self::DuplicateName { name } => {
                write!(f, "duplicate route name {name:?}")
            }
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern(e) => Some(e),
            Self::DuplicateName { .. } => None,
        }
    }
}

impl From<PatternError> for TableError {
    fn from(e: PatternError) -> Self {
        Self::InvalidPattern(e)
    }
}

/// A reverse-lookup failure, produced by [`RouteTable::path_for`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildPathError {
    /// No entry has the requested name.
    UnknownRoute { name: String },
    /// The route's pattern names a parameter the caller did not supply.
    MissingParam { route: String, param: String },
    /// The caller supplied an empty value, which no pattern can match back.
    EmptyParam { route: String, param: String },
}

impl fmt::Display for BuildPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRoute { name } => write!(f, "no route named {name:?}"),
            Self::MissingParam { route, param } => {
                write!(f, "route {route:?} requires parameter {param:?}")
            }
            Self::EmptyParam { route, param } => {
                write!(f, "route {route:?}: parameter {param:?} must be non-empty")
            }
        }
    }
}

impl std::error::Error for BuildPathError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternErrorKind;

    fn player_table() -> RouteTable<&'static str> {
        RouteTable::builder()
            .route("/player/:name", "player", "player-profile")
            .build()
            .unwrap()
    }

    #[test]
    fn test_lookup_captures_named_segment() {
        let table = player_table();
        let m = table.lookup("/player/alice").into_match().unwrap();
        assert_eq!(m.route.name(), "player");
        assert_eq!(m.params, vec![("name", "alice")]);
        assert_eq!(*m.view(), "player-profile");
    }

    #[test]
    fn test_lookup_empty_named_segment_is_not_found() {
        let table = player_table();
        assert!(!table.lookup("/player/").is_match());
    }

    #[test]
    fn test_lookup_unknown_path_is_not_found() {
        let table = player_table();
        assert!(!table.lookup("/unknown").is_match());
    }

    #[test]
    fn test_lookup_strips_query_and_fragment() {
        let table = player_table();
        let m = table.lookup("/player/alice?tab=stats#top").into_match().unwrap();
        assert_eq!(m.get_param("name"), Some("alice"));
    }

    #[test]
    fn test_declaration_order_precedence_param_first() {
        let table = RouteTable::builder()
            .route("/player/:name", "player", "profile")
            .route("/player/settings", "settings", "settings")
            .build()
            .unwrap();

        // The param route is declared first, so it shadows the literal.
        let m = table.lookup("/player/settings").into_match().unwrap();
        assert_eq!(m.route.name(), "player");
        assert_eq!(m.get_param("name"), Some("settings"));
    }

    #[test]
    fn test_declaration_order_precedence_literal_first() {
        let table = RouteTable::builder()
            .route("/player/settings", "settings", "settings")
            .route("/player/:name", "player", "profile")
            .build()
            .unwrap();

        let m = table.lookup("/player/settings").into_match().unwrap();
        assert_eq!(m.route.name(), "settings");
        assert!(m.params.is_empty());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = RouteTable::<&str>::builder()
            .route("/player/:name", "player", "a")
            .route("/team/:name", "player", "b")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            TableError::DuplicateName {
                name: "player".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = RouteTable::<&str>::builder()
            .route("player/:name", "player", "a")
            .build()
            .unwrap_err();
        match err {
            TableError::InvalidPattern(e) => {
                assert_eq!(e.kind, PatternErrorKind::MissingLeadingSlash);
            }
            TableError::DuplicateName { .. } => panic!("wrong error: {err}"),
        }
    }

    #[test]
    fn test_route_by_name() {
        let table = player_table();
        assert_eq!(table.route("player").unwrap().pattern().as_str(), "/player/:name");
        assert!(table.route("missing").is_none());
    }

    #[test]
    fn test_path_for_substitutes_params() {
        let table = player_table();
        let path = table.path_for("player", &[("name", "alice")]).unwrap();
        assert_eq!(path, "/player/alice");
        // The generated path routes back to the same entry.
        let m = table.lookup(&path).into_match().unwrap();
        assert_eq!(m.route.name(), "player");
    }

    #[test]
    fn test_path_for_unknown_route() {
        let table = player_table();
        let err = table.path_for("missing", &[]).unwrap_err();
        assert_eq!(
            err,
            BuildPathError::UnknownRoute {
                name: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_path_for_missing_param() {
        let table = player_table();
        let err = table.path_for("player", &[]).unwrap_err();
        assert_eq!(
            err,
            BuildPathError::MissingParam {
                route: "player".to_string(),
                param: "name".to_string()
            }
        );
    }

    #[test]
    fn test_path_for_empty_param() {
        let table = player_table();
        let err = table.path_for("player", &[("name", "")]).unwrap_err();
        assert_eq!(
            err,
            BuildPathError::EmptyParam {
                route: "player".to_string(),
                param: "name".to_string()
            }
        );
    }

    #[test]
    fn test_empty_table() {
        let table = RouteTable::<()>::builder().build().unwrap();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(!table.lookup("/").is_match());
    }
}
