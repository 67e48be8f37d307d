#![no_main]

use edgewise::{
    graph::algorithms::kruskal_mst, DfsStrategy, EngineConfig, FrontierSelection, Graph,
};
use libfuzzer_sys::fuzz_target;

// Layout: [vertex_count, (src, dest, weight, directed)*]
fuzz_target!(|data: &[u8]| {
    let Some((&count, rest)) = data.split_first() else {
        return;
    };
    let vertex_count = usize::from(count % 64);

    let mut graph: Graph<u32> = Graph::new(vertex_count);
    for chunk in rest.chunks_exact(4) {
        // Out-of-range endpoints must be rejected without touching the graph
        let _ = graph.add_edge_with(
            usize::from(chunk[0]),
            usize::from(chunk[1]),
            u32::from(chunk[2]),
            chunk[3] & 1 == 1,
        );
    }

    let recursive = EngineConfig::default().with_dfs(DfsStrategy::Recursive);
    let heap = EngineConfig::default().with_frontier(FrontierSelection::BinaryHeap);

    for start in 0..vertex_count {
        assert_eq!(graph.dfs(start).ok(), graph.dfs_with(&recursive, start).ok());

        let linear = graph.dijkstra(start).ok();
        let heaped = graph.dijkstra_with(&heap, start).ok();
        assert_eq!(
            linear.as_ref().map(|p| p.distances()),
            heaped.as_ref().map(|p| p.distances())
        );
    }

    if let Ok(forest) = kruskal_mst(&graph.edges(), vertex_count) {
        assert!(forest.accepted_count() < vertex_count);
        assert_eq!(
            forest.accepted_count() + forest.component_count(),
            vertex_count
        );
    }
});
