mod common;

use roadtrip_lib::{find_route_dijkstra, shortest_path, Error, NO_DISTANCE};

use common::{fixture_roadtrip, roadtrip_from, triangle_records};

#[test]
fn route_through_neighbour_beats_direct_border() {
    let trip = roadtrip_from(triangle_records());
    let path = trip.shortest_path("A", "C").expect("path");
    let hops: Vec<(&str, &str, u32)> = path
        .steps
        .iter()
        .map(|s| (s.from.as_str(), s.to.as_str(), s.distance_km))
        .collect();
    assert_eq!(hops, vec![("A", "B", 100), ("B", "C", 50)]);
    assert_eq!(trip.total_distance("A", "C").expect("distance"), 150);
}

#[test]
fn isolated_country_is_unreachable() {
    let trip = roadtrip_from(triangle_records());
    assert!(trip.is_valid("D"));
    assert!(trip.shortest_path("A", "D").expect("path").is_empty());
    assert_eq!(trip.total_distance("A", "D").expect("distance"), NO_DISTANCE);
}

#[test]
fn unknown_name_is_invalid_and_has_no_distance() {
    let trip = fixture_roadtrip();
    assert_eq!(trip.resolve("Atlantis"), None);
    assert_eq!(trip.total_distance("Atlantis", "France").expect("distance"), NO_DISTANCE);
    assert!(trip.shortest_path("Atlantis", "France").expect("path").is_empty());
}

#[test]
fn same_country_has_zero_distance_and_empty_path() {
    let trip = fixture_roadtrip();
    for country in ["France", "Iceland", "US"] {
        assert!(trip.shortest_path(country, country).expect("path").is_empty());
        assert_eq!(trip.total_distance(country, country).expect("distance"), 0);
    }
}

#[test]
fn fixture_route_takes_micro_state_shortcuts() {
    let trip = fixture_roadtrip();
    let plan = trip.plan_route("Portugal", "Germany").expect("route");
    let countries: Vec<&str> = std::iter::once(plan.start.as_str())
        .chain(plan.path.steps.iter().map(|s| s.to.as_str()))
        .collect();
    assert_eq!(
        countries,
        vec!["Portugal", "Spain", "Andorra", "France", "Luxembourg", "Germany"]
    );
    assert_eq!(plan.total_km(), 1540);
}

#[test]
fn distance_is_symmetric() {
    let trip = fixture_roadtrip();
    let pairs = [
        ("Portugal", "Denmark"),
        ("Italy", "Czech Republic"),
        ("Canada", "Mexico"),
        ("Belgium", "Slovenia"),
    ];
    for (a, b) in pairs {
        let there = trip.total_distance(a, b).expect("distance");
        let back = trip.total_distance(b, a).expect("distance");
        assert!(there > 0, "{a} -> {b} should be connected");
        assert_eq!(there, back, "{a} <-> {b}");
    }
}

#[test]
fn triangle_inequality_holds() {
    let trip = fixture_roadtrip();
    let countries = [
        "Portugal",
        "France",
        "Germany",
        "Austria",
        "Italy",
        "Poland",
        "Netherlands",
    ];
    for a in countries {
        for b in countries {
            for c in countries {
                let ac = trip.total_distance(a, c).expect("distance");
                let ab = trip.total_distance(a, b).expect("distance");
                let bc = trip.total_distance(b, c).expect("distance");
                assert!(ac <= ab + bc, "{a}->{c} = {ac} > {a}->{b}->{c} = {}", ab + bc);
            }
        }
    }
}

#[test]
fn disconnected_components_have_no_route() {
    let trip = fixture_roadtrip();
    assert_eq!(trip.total_distance("Turkey", "Germany").expect("distance"), NO_DISTANCE);
    assert!(matches!(
        trip.plan_route("Turkey", "Germany"),
        Err(Error::RouteNotFound { .. })
    ));
}

#[test]
fn aliases_resolve_to_same_country() {
    let trip = fixture_roadtrip();
    assert_eq!(trip.resolve("Turkiye"), trip.resolve("Turkey"));
    assert_eq!(trip.total_distance("Turkiye", "Greece").expect("distance"), 192);
    assert_eq!(trip.resolve("Ceuta").as_deref(), Some("Spain"));
    // Alias targets missing from the graph do not resolve.
    assert_eq!(trip.resolve("Kaliningrad"), None);
    assert_eq!(trip.resolve("Holy See"), None);
}

#[test]
fn exact_match_wins_over_alias_table() {
    let trip = fixture_roadtrip();
    assert_eq!(trip.resolve("France").as_deref(), Some("France"));
}

#[test]
fn united_states_and_us_are_interchangeable() {
    let trip = fixture_roadtrip();
    assert_eq!(trip.resolve("United States").as_deref(), Some("US"));
    assert_eq!(trip.resolve("US").as_deref(), Some("US"));
    assert_eq!(
        trip.total_distance("United States", "Canada").expect("distance"),
        trip.total_distance("US", "Canada").expect("distance")
    );
    assert_eq!(trip.total_distance("Canada", "Mexico").expect("distance"), 12046);
}

#[test]
fn unknown_country_error_offers_suggestions() {
    let trip = fixture_roadtrip();
    let err = trip.plan_route("Germny", "France").expect_err("typo");
    let message = err.to_string();
    assert!(message.contains("unknown country name: Germny"));
    assert!(message.contains("Did you mean"));
    assert!(message.contains("'Germany'"));
}

#[test]
fn repeated_queries_are_identical() {
    let trip = fixture_roadtrip();
    let first = trip.shortest_path("Portugal", "Denmark").expect("path");
    for _ in 0..10 {
        assert_eq!(trip.shortest_path("Portugal", "Denmark").expect("path"), first);
    }
    assert_eq!(first.total_km, 1680);
}

#[test]
fn path_finder_does_not_resolve_aliases() {
    let trip = fixture_roadtrip();
    assert_eq!(find_route_dijkstra(trip.graph(), "Turkiye", "Greece"), None);
    assert!(shortest_path(trip.graph(), "france", "Spain")
        .expect("path")
        .is_empty());
}
