use graphstore::SqliteStore;

fn main() {
    if let Err(err) = run() {
        eprintln!("basic_usage error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open_in_memory()?;
    let engine = store.engine();

    let nodes = engine.create_nodes(3)?;
    let (a, b, c) = (nodes[0].id, nodes[1].id, nodes[2].id);
    let edges = engine.create_edges(&[(a, b), (b, c)])?;
    println!("created {} nodes, {} edges", nodes.len(), edges.len());

    let reachable = engine.reachable_nodes(a)?;
    println!(
        "reachable from {a}: {:?}",
        reachable.iter().map(|n| n.id).collect::<Vec<_>>()
    );

    let swapped = engine.swap_edge_directions(&[edges[0].id])?;
    println!(
        "edge {} now runs {} -> {}",
        swapped[0].id, swapped[0].from_node_id, swapped[0].to_node_id
    );

    let service = store.service();
    let seeded = service.seed()?;
    println!(
        "seeded graph: {} nodes, {} edges",
        seeded.nodes.len(),
        seeded.edges.len()
    );
    Ok(())
}
