//! Concurrent access to the namespace registry
//!
//! Many pathfinding workers resolve models and walk routes while a config
//! loader keeps re-registering namespaces. Readers must always observe a
//! complete namespace, and per-worker accumulators must never interfere.

use imputed_cost_core_rs::{
    CostNamespace, CostParameters, ImputedCostAccumulator, ImputedCostManager, ImputedCostModel,
    MilliSatoshi, Vertex,
};
use std::thread;

fn node(id: u8) -> Vertex {
    Vertex::new([id; 33])
}

/// Namespace whose default and 1->2 override differ only by `version`
fn versioned_namespace(version: i64) -> CostNamespace {
    CostNamespace::new(CostParameters::new(0, version, 0, 0)).with_pair(
        node(1),
        node(2),
        CostParameters::new(0, version + 1, 0, 0),
    )
}

#[test]
fn test_concurrent_readers_with_writer() {
    let manager = ImputedCostManager::new();
    manager.insert_namespace("live", versioned_namespace(0));

    thread::scope(|s| {
        s.spawn(|| {
            for version in 1..=200 {
                manager.insert_namespace("live", versioned_namespace(version * 10));
            }
        });

        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..500 {
                    let model = manager.get_namespaced_model("live").unwrap();
                    let default = model.get_cost(&node(3), &node(4), MilliSatoshi::ZERO);
                    let pair = model.get_cost(&node(1), &node(2), MilliSatoshi::ZERO);
                    // One model is one snapshot: override is always default + 1
                    assert_eq!(pair.as_u64(), default.as_u64() + 1);
                }
            });
        }
    });

    let model = manager.get_namespaced_model("live").unwrap();
    assert_eq!(
        model.get_cost(&node(3), &node(4), MilliSatoshi::ZERO),
        MilliSatoshi::new(2000)
    );
}

#[test]
fn test_workers_share_control_with_private_accumulators() {
    let manager = ImputedCostManager::new();
    manager.insert_namespace("flat", CostNamespace::new(CostParameters::new(0, 10, 0, 1)));
    let control = manager.get_namespaced_control("flat", None, None).unwrap();

    let totals: Vec<ImputedCostAccumulator> = thread::scope(|s| {
        let handles: Vec<_> = (1..=4u8)
            .map(|hops| {
                let control = &control;
                s.spawn(move || {
                    let mut acc = ImputedCostAccumulator::default();
                    for hop in 0..hops {
                        control
                            .process_pair(&node(hop), &node(hop + 1), MilliSatoshi::ZERO, 0, 0, &mut acc)
                            .unwrap();
                    }
                    acc
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, acc) in totals.iter().enumerate() {
        let hops = i as u64 + 1;
        assert_eq!(acc.cost, MilliSatoshi::new(10 * hops));
        assert_eq!(acc.attempt_cost, MilliSatoshi::new(hops));
    }
}
