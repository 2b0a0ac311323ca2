//! Route lookup result.

use crate::table::Route;

/// A matched route with extracted parameters.
///
/// Constructed transiently per navigation event; borrows the matched entry
/// from the table and the captured values from the input path.
#[derive(Debug)]
pub struct RouteMatch<'a, V> {
    /// The matched route.
    pub route: &'a Route<V>,
    /// Extracted path parameters, in segment order.
    pub params: Vec<(&'a str, &'a str)>,
}

impl<'a, V> RouteMatch<'a, V> {
    /// Get a parameter value by name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    /// The view handle bound to the matched route.
    #[must_use]
    pub fn view(&self) -> &'a V {
        self.route.view()
    }
}

/// Result of attempting to locate a route for a navigation path.
///
/// `NotFound` is an expected outcome, not a fault: the host decides what to
/// render when no entry matches (typically a fallback view).
#[derive(Debug)]
pub enum RouteLookup<'a, V> {
    /// A route matched the path.
    Match(RouteMatch<'a, V>),
    /// No route matched the path.
    NotFound,
}

impl<'a, V> RouteLookup<'a, V> {
    /// Returns the match, if any.
    #[must_use]
    pub fn into_match(self) -> Option<RouteMatch<'a, V>> {
        match self {
            Self::Match(m) => Some(m),
            Self::NotFound => None,
        }
    }

    /// Whether a route matched.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }
}
