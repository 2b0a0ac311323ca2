//! Declaration-order route table.
//!
//! This crate provides the route-matching core of waypoint: an ordered
//! collection of path patterns, each bound to a name and an opaque view
//! handle, with first-match-wins lookup.
//!
//! # Features
//!
//! - Path parameter extraction (`/player/:name`)
//! - Declaration-order match precedence
//! - Reverse URL generation from route names
//! - Registration-time pattern validation

#![warn(unsafe_code)]

mod r#match;
mod pattern;
mod table;

pub use pattern::{PatternError, PatternErrorKind, RoutePattern, Segment};
pub use r#match::{RouteLookup, RouteMatch};
pub use table::{BuildPathError, Route, RouteTable, RouteTableBuilder, TableError};
