use graphstore::SqliteStore;

fn store_with_nodes(count: usize) -> (SqliteStore, Vec<i64>) {
    let store = SqliteStore::open_in_memory().expect("store");
    let ids = store
        .create_nodes(count)
        .expect("nodes")
        .into_iter()
        .map(|node| node.id)
        .collect();
    (store, ids)
}

#[test]
fn test_create_nodes_assigns_ascending_ids() {
    let (_store, ids) = store_with_nodes(5);
    assert_eq!(ids.len(), 5);
    for pair in ids.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_create_zero_nodes_returns_empty_batch() {
    let store = SqliteStore::open_in_memory().expect("store");
    let nodes = store.create_nodes(0).expect("nodes");
    assert!(nodes.is_empty());
}

#[test]
fn test_node_ids_are_not_reused_after_delete() {
    let (store, ids) = store_with_nodes(3);
    let max_id = *ids.last().expect("ids");
    store.delete_nodes(&ids).expect("delete");
    let fresh = store.create_nodes(1).expect("nodes");
    assert!(fresh[0].id > max_id);
}

#[test]
fn test_get_nodes_omits_missing_ids() {
    let (store, ids) = store_with_nodes(2);
    let request = vec![ids[0], ids[1] + 100, ids[1]];
    let found = store.get_nodes(&request).expect("nodes");
    let found_ids: Vec<i64> = found.iter().map(|node| node.id).collect();
    assert_eq!(found_ids, vec![ids[0], ids[1]]);
}

#[test]
fn test_delete_node_cascades_incident_edges() {
    let (store, ids) = store_with_nodes(3);
    let (a, b, c) = (ids[0], ids[1], ids[2]);
    store
        .create_edges(&[(a, b), (b, c), (c, a)])
        .expect("edges");
    store.delete_nodes(&[b]).expect("delete");
    let remaining = store.get_all_edges().expect("edges");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].from_node_id, c);
    assert_eq!(remaining[0].to_node_id, a);
}

#[test]
fn test_delete_absent_node_is_noop() {
    let (store, ids) = store_with_nodes(2);
    store.delete_nodes(&[ids[1] + 50]).expect("delete");
    assert_eq!(store.get_all_nodes().expect("nodes").len(), 2);
}

#[test]
fn test_delete_all_nodes_clears_edges_too() {
    let (store, ids) = store_with_nodes(3);
    store
        .create_edges(&[(ids[0], ids[1]), (ids[1], ids[2])])
        .expect("edges");
    store.delete_all_nodes().expect("clear");
    assert!(store.get_all_nodes().expect("nodes").is_empty());
    assert!(store.get_all_edges().expect("edges").is_empty());
}

#[test]
fn test_create_edges_allows_self_loops_and_duplicates() {
    let (store, ids) = store_with_nodes(2);
    let (a, b) = (ids[0], ids[1]);
    let edges = store
        .create_edges(&[(a, a), (a, b), (a, b)])
        .expect("edges");
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[0].from_node_id, edges[0].to_node_id);
    assert_eq!(store.get_all_edges().expect("edges").len(), 3);
}

#[test]
fn test_swap_reverses_endpoints_and_swap_again_restores() {
    let (store, ids) = store_with_nodes(2);
    let edge = store.create_edges(&[(ids[0], ids[1])]).expect("edges")[0].clone();
    let swapped = store.swap_edge_directions(&[edge.id]).expect("swap");
    assert_eq!(swapped[0].from_node_id, ids[1]);
    assert_eq!(swapped[0].to_node_id, ids[0]);
    let restored = store.swap_edge_directions(&[edge.id]).expect("swap");
    assert_eq!(restored[0], edge);
}

#[test]
fn test_swap_leaves_self_loop_unchanged() {
    let (store, ids) = store_with_nodes(1);
    let edge = store.create_edges(&[(ids[0], ids[0])]).expect("edges")[0].clone();
    let swapped = store.swap_edge_directions(&[edge.id]).expect("swap");
    assert_eq!(swapped[0], edge);
}

#[test]
fn test_swap_returns_edges_in_stored_id_order() {
    let (store, ids) = store_with_nodes(3);
    let created = store
        .create_edges(&[(ids[0], ids[1]), (ids[1], ids[2])])
        .expect("edges");
    let (first, second) = (created[0].id, created[1].id);
    let swapped = store.swap_edge_directions(&[second, first]).expect("swap");
    assert_eq!(swapped[0].id, first);
    assert_eq!(swapped[1].id, second);
}

#[test]
fn test_delete_absent_edge_is_noop() {
    let (store, ids) = store_with_nodes(2);
    let edge = store.create_edges(&[(ids[0], ids[1])]).expect("edges")[0].clone();
    store.delete_edges(&[edge.id + 10]).expect("delete");
    assert_eq!(store.get_all_edges().expect("edges").len(), 1);
}

#[test]
fn test_get_edge_roundtrip() {
    let (store, ids) = store_with_nodes(2);
    let created = store.create_edges(&[(ids[0], ids[1])]).expect("edges")[0].clone();
    let stored = store.get_edge(created.id).expect("edge").expect("present");
    assert_eq!(stored, created);
    assert!(store.get_edge(created.id + 7).expect("edge").is_none());
}
