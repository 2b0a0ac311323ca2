//! Declarative route configuration.
//!
//! A route table is configuration: a host can declare it in JSON or TOML
//! and deserialize it here instead of writing builder chains. View handles
//! cannot live in a config file, so declarations carry a view *key* and the
//! host injects a resolver mapping keys to whatever its rendering layer
//! uses as a handle. The resolver is passed in explicitly; there is no
//! registry singleton.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};
use waypoint_router::{RouteTable, TableError};

/// One declared route: a path template, a unique name, and a view key.
///
/// The equivalent of one entry in a hand-written route table:
///
/// ```json
/// { "path": "/player/:name", "name": "player", "view": "player-profile" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDef {
    /// Path template with `:name` segments.
    pub path: String,
    /// Unique route name.
    pub name: String,
    /// Key the view resolver maps to a renderable handle.
    pub view: String,
}

/// A declared route table, in precedence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Route declarations; earlier entries win ties.
    pub routes: Vec<RouteDef>,
}

impl RouteConfig {
    /// Converts the declarations into a validated [`RouteTable`].
    ///
    /// `resolve` maps each declaration's view key to a view handle; it is
    /// called once per declaration, in order. Returning `None` fails the
    /// conversion with [`ConfigError::UnknownView`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownView`] for an unresolvable view key, or
    /// [`ConfigError::Table`] when a pattern is malformed or a name is
    /// declared twice.
    pub fn into_table<V, F>(self, mut resolve: F) -> Result<RouteTable<V>, ConfigError>
    where
        F: FnMut(&str) -> Option<V>,
    {
        debug!("building route table from {} declarations", self.routes.len());
        let mut builder = RouteTable::builder();
        for def in self.routes {
            let view = resolve(&def.view).ok_or_else(|| ConfigError::UnknownView {
                route: def.name.clone(),
                view: def.view.clone(),
            })?;
            builder = builder.route(def.path, def.name, view);
        }
        Ok(builder.build()?)
    }
}

/// A configuration-time fault while turning declarations into a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A declaration's view key has no handle in the resolver.
    UnknownView {
        /// The declaring route's name.
        route: String,
        /// The unresolvable key.
        view: String,
    },
    /// The declarations themselves are invalid.
    Table(TableError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownView { route, view } => {
                write!(f, "route {route:?} references unknown view {view:?}")
            }
            Self::Table(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Table(e) => Some(e),
            Self::UnknownView { .. } => None,
        }
    }
}

impl From<TableError> for ConfigError {
    fn from(e: TableError) -> Self {
        Self::Table(e)
    }
}
