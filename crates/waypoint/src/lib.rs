//! Declarative client-side route tables with typed view handles.
//!
//! waypoint binds URL path patterns like `/player/:name` to opaque view
//! handles in an ordered table, then answers navigation events with the
//! matching entry and its captured parameters. It does exactly the route
//! table's job and nothing around it: no history management, no data
//! fetching, no rendering — those stay with the host.
//!
//! # Quick Start
//!
//! ```
//! use waypoint::prelude::*;
//!
//! #[derive(Debug)]
//! enum View {
//!     PlayerProfile,
//! }
//!
//! let table = RouteTable::builder()
//!     .route("/player/:name", "player", View::PlayerProfile)
//!     .build()?;
//!
//! if let RouteLookup::Match(m) = table.lookup("/player/alice") {
//!     assert_eq!(m.get_param("name"), Some("alice"));
//! }
//! # Ok::<(), waypoint::TableError>(())
//! ```
//!
//! # Design Philosophy
//!
//! 1. **No ambient state** — the table is a plain value the host constructs
//!    and owns; nothing global, nothing registered behind the scenes
//! 2. **Startup faults fail loudly** — malformed patterns and duplicate
//!    names are `Err` at build time, never a route that silently can't match
//! 3. **Declaration order is precedence** — the first matching entry wins,
//!    exactly as written
//! 4. **Views stay opaque** — `RouteTable<V>` never inspects the handle it
//!    hands back
//!
//! # Crate Structure
//!
//! - [`waypoint_router`] — the route table, patterns, and matching core
//! - [`config`] — serde-declared tables with injected view resolution

#![forbid(unsafe_code)]

// Re-export crates
pub use waypoint_router as router;

// Re-export commonly used types
pub use waypoint_router::{
    BuildPathError, PatternError, PatternErrorKind, Route, RouteLookup, RouteMatch, RoutePattern,
    RouteTable, RouteTableBuilder, Segment, TableError,
};

pub mod config;

pub use config::{ConfigError, RouteConfig, RouteDef};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        BuildPathError, ConfigError, PatternError, Route, RouteConfig, RouteDef, RouteLookup,
        RouteMatch, RoutePattern, RouteTable, RouteTableBuilder, TableError,
    };
}
