//! Declaring a table in JSON and navigating it through the facade.

use waypoint::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    PlayerProfile,
    Fallback,
}

fn resolve(key: &str) -> Option<View> {
    match key {
        "player-profile" => Some(View::PlayerProfile),
        _ => None,
    }
}

const ROUTES_JSON: &str = r#"
{
    "routes": [
        { "path": "/player/:name", "name": "player", "view": "player-profile" }
    ]
}
"#;

fn table_from_json() -> RouteTable<View> {
    let config: RouteConfig = serde_json::from_str(ROUTES_JSON).expect("valid JSON");
    config.into_table(resolve).expect("valid declarations")
}

#[test]
fn test_declared_route_matches() {
    let table = table_from_json();
    let m = match table.lookup("/player/alice") {
        RouteLookup::Match(m) => m,
        RouteLookup::NotFound => panic!("expected a match"),
    };
    assert_eq!(m.route.name(), "player");
    assert_eq!(*m.view(), View::PlayerProfile);
    assert_eq!(m.get_param("name"), Some("alice"));
}

#[test]
fn test_not_found_falls_back_to_host_view() {
    let table = table_from_json();
    // NotFound is expected: the host picks the fallback view itself.
    let view = match table.lookup("/unknown") {
        RouteLookup::Match(m) => *m.view(),
        RouteLookup::NotFound => View::Fallback,
    };
    assert_eq!(view, View::Fallback);

    let view = match table.lookup("/player/") {
        RouteLookup::Match(m) => *m.view(),
        RouteLookup::NotFound => View::Fallback,
    };
    assert_eq!(view, View::Fallback);
}

#[test]
fn test_config_round_trips_through_serde() {
    let config: RouteConfig = serde_json::from_str(ROUTES_JSON).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    let again: RouteConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, again);
}

#[test]
fn test_unknown_view_key_aborts_startup() {
    let json = r#"{ "routes": [ { "path": "/x", "name": "x", "view": "nope" } ] }"#;
    let config: RouteConfig = serde_json::from_str(json).unwrap();
    let err = config.into_table(resolve).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownView { .. }));
}

#[test]
fn test_path_for_named_route() {
    let table = table_from_json();
    assert_eq!(
        table.path_for("player", &[("name", "alice")]).unwrap(),
        "/player/alice"
    );
}
