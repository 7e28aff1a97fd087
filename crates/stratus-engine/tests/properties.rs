use proptest::prelude::*;
use std::collections::HashSet;
use stratus_core::catalog::labels::*;
use stratus_core::{ComponentSequence, Dimension, FocusCategory, PriorityVector};
use stratus_engine::{build_graph, compose, select};

fn focus() -> impl Strategy<Value = FocusCategory> {
    prop::sample::select(FocusCategory::ALL.to_vec())
}

fn priorities() -> impl Strategy<Value = PriorityVector> {
    prop::array::uniform6(0i64..=10).prop_map(|v| PriorityVector::from_values(v).unwrap())
}

/// Use-case text built from trigger words, filler and arbitrary characters.
fn use_case() -> impl Strategy<Value = String> {
    let words = prop::collection::vec(
        prop::sample::select(vec![
            "Real-Time", "stream", "ML", "recommend", "forecast", "patient", "PII", "audit",
            "dashboard", "webhook", "queue", "batch", "global", "orders", "the", "platform",
        ]),
        0..8,
    )
    .prop_map(|w| w.join(" "));
    prop_oneof![words, ".{0,60}"]
}

/// Caller-supplied sequences mixing catalog and unknown labels.
fn components() -> impl Strategy<Value = ComponentSequence> {
    prop::collection::vec(
        prop::sample::select(vec![
            CLOUDFRONT, ALB, API_GATEWAY, LAMBDA, FARGATE, KINESIS, SQS, S3, AURORA, GLUE,
            ATHENA, FEATURE_STORE, TRAINING, MODEL_REGISTRY, ENDPOINT, MODEL_MONITOR, KMS,
            CLOUDWATCH, "Legacy ERP", "Partner SFTP",
        ]),
        1..16,
    )
    .prop_map(|labels| ComponentSequence::from_labels(labels).unwrap())
}

fn assert_well_formed(seq: &ComponentSequence) {
    let graph = build_graph(seq);
    assert_eq!(graph.nodes().len(), seq.len());
    assert!(graph.is_connected(), "unreachable nodes for {:?}", seq.labels());
    assert!(!graph.has_dangling_edges());
    assert!(graph.is_acyclic(), "cycle for {:?}", seq.labels());
    assert_eq!(graph.in_degree(graph.entry()), 0);
}

proptest! {
    #[test]
    fn selection_is_deterministic(f in focus(), p in priorities(), text in use_case()) {
        prop_assert_eq!(select(f, &p, &text), select(f, &p, &text));
    }

    #[test]
    fn selection_is_nonempty_and_duplicate_free(f in focus(), p in priorities(), text in use_case()) {
        let seq = select(f, &p, &text);
        prop_assert!(!seq.is_empty());
        let unique: HashSet<_> = seq.iter().collect();
        prop_assert_eq!(unique.len(), seq.len());
    }

    #[test]
    fn selected_graphs_are_connected_dags(f in focus(), p in priorities(), text in use_case()) {
        assert_well_formed(&select(f, &p, &text));
    }

    #[test]
    fn caller_sequences_build_connected_dags(seq in components()) {
        assert_well_formed(&seq);
    }

    #[test]
    fn graph_building_is_deterministic(seq in components()) {
        prop_assert_eq!(build_graph(&seq), build_graph(&seq));
    }

    #[test]
    fn raising_security_never_removes_components(
        f in focus(),
        p in priorities(),
        text in use_case(),
    ) {
        let low = select(f, &p.with(Dimension::Security, 0).unwrap(), &text);
        let high = select(f, &p.with(Dimension::Security, 10).unwrap(), &text);
        for label in &low {
            prop_assert!(high.contains(label), "{} dropped", label);
        }
        prop_assert!(high.contains(&KMS.into()));
        prop_assert!(high.contains(&CLOUDTRAIL.into()));
    }

    #[test]
    fn composition_is_idempotent(f in focus(), p in priorities(), text in use_case()) {
        let seq = select(f, &p, &text);
        let (t1, d1) = compose(&text, f, &seq, &p);
        let (t2, d2) = compose(&text, f, &seq, &p);
        prop_assert!(t1.content_eq(&t2));
        prop_assert!(d1.content_eq(&d2));
        prop_assert_eq!(t1.body(), t2.body());
        prop_assert_eq!(d1.body(), d2.body());
    }
}
