//! Tests for the tracing-backed build observer.

use graphgen_core::{GraphGenBuilder, NoopObserver, TracingObserver};
use graphgen_test_support::tracing::capture;
use rstest::{fixture, rstest};
use tracing::Level;

#[fixture]
fn generator() -> graphgen_core::GraphGenerator {
    GraphGenBuilder::new(10, 3)
        .build()
        .expect("configuration must be valid")
}

#[rstest]
fn tracing_observer_reports_each_visit(generator: graphgen_core::GraphGenerator) {
    let (graph, layer) = capture(|| generator.generate_with_seed(31, &mut TracingObserver));

    let visits = layer.events_with_message("selecting partners");
    let saturated = layer.events_with_message("node saturated; skipping");
    assert_eq!(visits.len() + saturated.len(), graph.node_count() - 1);
    for event in &visits {
        assert_eq!(event.level, Level::INFO);
        assert!(event.field("node").is_some());
        assert!(event.field("candidates").is_some());
        assert!(event.field("needed").is_some());
    }

    let hubs = layer.events_with_message("hub fan-out placed");
    assert_eq!(hubs.len(), 1);
    assert_eq!(hubs[0].field("count"), Some("1"));
}

#[rstest]
fn generation_runs_inside_an_instrumented_span(generator: graphgen_core::GraphGenerator) {
    let (_graph, layer) = capture(|| generator.generate_with_seed(2, &mut NoopObserver));
    assert!(layer.span_names().iter().any(|name| name == "core.generate"));
    assert!(layer.events_with_message("selecting partners").is_empty());
}

#[rstest]
fn tracing_observer_leaves_the_graph_unchanged(generator: graphgen_core::GraphGenerator) {
    let (observed, _layer) = capture(|| generator.generate_with_seed(64, &mut TracingObserver));
    let silent = generator.generate_with_seed(64, &mut NoopObserver);
    assert_eq!(observed, silent);
}
