#![no_main]

use libfuzzer_sys::fuzz_target;
use strum::IntoEnumIterator;
use topograph::{run, Algorithm, AlgorithmRequest, Graph};

fuzz_target!(|data: &[u8]| {
    let Ok(graph) = serde_json::from_slice::<Graph>(data) else {
        return;
    };
    let first = graph.nodes.first().map(|node| node.id.clone());
    let last = graph.nodes.last().map(|node| node.id.clone());

    for algorithm in Algorithm::iter() {
        let request = AlgorithmRequest {
            algorithm,
            start: first.clone(),
            end: last.clone(),
        };
        let result = run(&graph, &request);
        assert_eq!(result.logs.len(), result.steps.len());
    }
});
