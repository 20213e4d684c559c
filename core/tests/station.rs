use std::path::PathBuf;
use std::thread;

use wayfind_core::{load_graph, reachable_from, shortest_path, AccessMode, Facility, Graph};

fn station() -> Graph {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data/station.json");
    load_graph(path).unwrap()
}

fn route_ids(g: &Graph, from: &str, to: &str, mode: AccessMode) -> Option<(Vec<String>, f64)> {
    shortest_path(g, from, to, mode)
        .unwrap()
        .map(|r| (r.ids().map(str::to_string).collect(), r.total_cost))
}

#[test_log::test]
fn entry_to_platform_one_takes_stairs() {
    let g = station();
    let (ids, cost) = route_ids(&g, "entry", "p1_top", AccessMode::All).unwrap();
    assert_eq!(ids, ["entry", "security", "p1_bottom", "p1_top"]);
    assert_eq!(cost, 510.0);
}

#[test_log::test]
fn entry_to_platform_one_step_free_uses_ramp_and_lift() {
    let g = station();
    let (ids, cost) = route_ids(&g, "entry", "p1_top", AccessMode::StepFree).unwrap();
    assert_eq!(ids, ["entry", "ramp", "security", "lift_p1", "p1_top"]);
    assert_eq!(cost, 584.0);
}

#[test_log::test]
fn entry_to_platform_two_crosses_bridge() {
    let g = station();
    let (ids, _) = route_ids(&g, "entry", "p2_top", AccessMode::All).unwrap();
    assert_eq!(
        ids,
        ["entry", "security", "p1_bottom", "fob_start", "fob_mid", "p2_top"]
    );

    let (ids, cost) = route_ids(&g, "entry", "p2_top", AccessMode::StepFree).unwrap();
    assert_eq!(
        ids,
        ["entry", "ramp", "security", "lift_p1", "fob_start", "fob_mid", "lift_p2", "p2_top"]
    );
    assert_eq!(cost, 984.0);
}

#[test_log::test]
fn platform_three_has_no_step_free_route() {
    let g = station();
    assert!(route_ids(&g, "entry", "p3_top", AccessMode::All).is_some());
    assert!(route_ids(&g, "entry", "p3_top", AccessMode::StepFree).is_none());
}

#[test_log::test]
fn step_free_every_edge_on_route_is_accessible() {
    let g = station();
    for node in g.nodes() {
        if let Some(route) = shortest_path(&g, "entry", &node.id, AccessMode::StepFree).unwrap() {
            assert_eq!(route.first().unwrap().id, "entry");
            assert_eq!(route.last().unwrap().id, node.id);
            assert!(route.steps.iter().skip(1).all(|s| s.leg_accessible == Some(true)));
        }
    }
}

#[test_log::test]
fn step_free_never_cheaper_than_unrestricted() {
    let g = station();
    for a in g.nodes() {
        for b in g.nodes() {
            let all = route_ids(&g, &a.id, &b.id, AccessMode::All);
            let sf = route_ids(&g, &a.id, &b.id, AccessMode::StepFree);
            if let Some((_, sf_cost)) = sf {
                let (_, all_cost) = all.expect("step-free route implies a route");
                assert!(sf_cost >= all_cost, "{} -> {}", a.id, b.id);
            }
        }
    }
}

#[test_log::test]
fn costs_are_symmetric() {
    let g = station();
    for mode in [AccessMode::All, AccessMode::StepFree] {
        for a in g.nodes() {
            for b in g.nodes() {
                let fwd = route_ids(&g, &a.id, &b.id, mode).map(|(_, c)| c);
                let rev = route_ids(&g, &b.id, &a.id, mode).map(|(_, c)| c);
                assert_eq!(fwd, rev, "{} <-> {} ({:?})", a.id, b.id, mode);
            }
        }
    }
}

#[test_log::test]
fn facilities_resolve_to_nodes() {
    let g = station();
    assert_eq!(g.facility(Facility::Restroom).unwrap().id, "toilet");
    assert_eq!(g.facility(Facility::Lift).unwrap().id, "lift_p1");
    assert_eq!(g.facility(Facility::Dining).unwrap().id, "food");
    let medical = g.facility(Facility::Medical).unwrap();
    assert_eq!((medical.x, medical.y), (920.0, 180.0));
}

#[test_log::test]
fn reachable_step_free_excludes_stair_only_platforms() {
    let g = station();
    let all = reachable_from(&g, "entry", AccessMode::All).unwrap();
    let sf = reachable_from(&g, "entry", AccessMode::StepFree).unwrap();
    assert_eq!(all.len(), g.node_count() - 1);
    assert!(sf.iter().all(|r| r.id != "p3_top"));
    assert!(sf.len() < all.len());
    assert_eq!(all[0].id, "ramp");
}

#[test_log::test]
fn concurrent_queries_share_one_graph() {
    let g = station();
    let expected = route_ids(&g, "entry", "toilet", AccessMode::StepFree);
    let shared = &g;
    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(move || route_ids(shared, "entry", "toilet", AccessMode::StepFree)))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
