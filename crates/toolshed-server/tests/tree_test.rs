//! Tree, breadcrumb and option-list tests over an imported taxonomy

mod common;

use toolshed_server::taxonomy::{
    get_breadcrumbs, get_tree, taxonomy_options, InMemoryTaxonomyStore, TaxonomyRecord,
    TaxonomyStore,
};

fn child_ids(node: &toolshed_server::taxonomy::TaxonomyNode) -> Vec<i64> {
    node.children
        .as_ref()
        .map(|c| c.iter().map(|n| n.external_id).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_roots_and_children() {
    let store = common::seeded_taxonomy();

    let roots = store.get_children(None).await.unwrap();
    let names: Vec<&str> = roots.iter().map(|n| n.path.as_str()).collect();
    assert_eq!(names, vec!["Garden", "Power Tools"]);

    let children = store.get_children(Some(1)).await.unwrap();
    let ids: Vec<i64> = children.iter().map(|n| n.external_id).collect();
    assert_eq!(ids, vec![2, 4]);
}

#[tokio::test]
async fn test_tree_depth_is_bounded() {
    let store = common::seeded_taxonomy();

    let tree = get_tree(store.as_ref(), 1, 1).await.unwrap().unwrap();
    assert_eq!(child_ids(&tree), vec![2, 4]);
    let drills = &tree.children.as_ref().unwrap()[0];
    assert!(drills.children.is_none());

    let full = get_tree(store.as_ref(), 1, 3).await.unwrap().unwrap();
    let drills = &full.children.as_ref().unwrap()[0];
    assert_eq!(child_ids(drills), vec![3]);
    let cordless = &drills.children.as_ref().unwrap()[0];
    assert_eq!(cordless.children.as_deref(), Some(&[][..]));
}

#[tokio::test]
async fn test_tree_of_missing_node() {
    let store = common::seeded_taxonomy();
    assert!(get_tree(store.as_ref(), 404, 2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_tree_survives_parent_cycle() {
    let store = InMemoryTaxonomyStore::with_records(&[
        TaxonomyRecord::new(1, "Loop A", Some(2), 1),
        TaxonomyRecord::new(2, "Loop A > Loop B", Some(1), 2),
    ]);

    let tree = get_tree(&store, 1, 10).await.unwrap().unwrap();
    assert_eq!(child_ids(&tree), vec![2]);
    let b = &tree.children.as_ref().unwrap()[0];
    assert!(b.children.as_ref().is_some_and(|c| c.is_empty()));

    let crumbs = get_breadcrumbs(&store, 2).await.unwrap();
    assert_eq!(crumbs.len(), 2);
}

#[tokio::test]
async fn test_breadcrumbs_run_root_to_node() {
    let store = common::seeded_taxonomy();

    let crumbs = get_breadcrumbs(store.as_ref(), 3).await.unwrap();
    let ids: Vec<i64> = crumbs.iter().map(|n| n.external_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(crumbs[0].parent_id, None);

    assert!(get_breadcrumbs(store.as_ref(), 404).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_deactivated_parent_turns_child_into_root() {
    let store = common::seeded_taxonomy();
    store.set_active(2, false);

    let crumbs = get_breadcrumbs(store.as_ref(), 3).await.unwrap();
    let ids: Vec<i64> = crumbs.iter().map(|n| n.external_id).collect();
    assert_eq!(ids, vec![3]);

    let roots: Vec<i64> = store
        .get_children(None)
        .await
        .unwrap()
        .iter()
        .map(|n| n.external_id)
        .collect();
    assert!(roots.contains(&3));
}

#[tokio::test]
async fn test_options_are_indented_depth_first() {
    let store = common::seeded_taxonomy();

    let options = taxonomy_options(store.as_ref(), 2).await.unwrap();
    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Garden",
            "  Lawn Mowers",
            "Power Tools",
            "  Drills & Drivers",
            "    Cordless Drills",
            "  Saws",
        ]
    );

    let shallow = taxonomy_options(store.as_ref(), 1).await.unwrap();
    assert!(shallow.iter().all(|o| o.depth <= 1));
    assert_eq!(shallow.len(), 5);
}

#[tokio::test]
async fn test_search_and_stats() {
    let store = common::seeded_taxonomy();

    let hits = store.search_by_path("drill", 10).await.unwrap();
    let ids: Vec<i64> = hits.iter().map(|n| n.external_id).collect();
    assert_eq!(ids, vec![2, 3]);

    let by_id = store.search_by_path("6", 10).await.unwrap();
    assert_eq!(by_id[0].external_id, 6);

    let stats = store.stats().await.unwrap();
    assert_eq!(stats.total_categories, 6);
    assert_eq!(stats.active_categories, 6);
    assert_eq!(stats.levels.get(&1), Some(&2));
    assert_eq!(stats.levels.get(&2), Some(&3));
    assert_eq!(stats.levels.get(&3), Some(&1));
}
