use card_catalog::storage::memory::MemoryStorage;
use card_catalog::storage::CardStore;
use card_catalog::test_utils::{card, get_test_config, numbered_catalog, sample_catalog};
use card_catalog::{CardField, CatalogError, OrderBy, Predicate, QueryEngine};
use assert_matches::assert_matches;
use futures::future::join_all;
use std::sync::Arc;

#[tokio::test]
async fn test_fail_on_query_and_clear() {
    let storage = MemoryStorage::with_cards(sample_catalog());

    storage.set_fail_on_query();
    assert_matches!(storage.count(&Predicate::MatchAll).await, Err(CatalogError::StorageError(_)));
    assert_matches!(storage.fetch_by_uuid("0001").await, Err(CatalogError::StorageError(_)));

    storage.clear_fail_on_query();
    assert_eq!(storage.count(&Predicate::MatchAll).await.unwrap(), 8);
}

#[tokio::test]
async fn test_count_and_fetch_agree() {
    let storage = MemoryStorage::with_cards(sample_catalog());
    let predicates = [
        Predicate::MatchAll,
        Predicate::set_equals("M20"),
        Predicate::name_contains("shock"),
        Predicate::name_contains("dragon").and(Predicate::set_equals("XLN")),
        Predicate::set_equals("nope"),
    ];

    for predicate in &predicates {
        let count = storage.count(predicate).await.unwrap();
        let fetched = storage.fetch(predicate, OrderBy::Name, 0, u64::MAX).await.unwrap();
        assert_eq!(count, fetched.len() as u64, "disagreement for {}", predicate);
        assert!(fetched.iter().all(|c| predicate.matches(c)));
    }
}

#[tokio::test]
async fn test_fetch_window() {
    let storage = MemoryStorage::with_cards(numbered_catalog(10, "M20"));
    let all = storage.fetch(&Predicate::MatchAll, OrderBy::Name, 0, 10).await.unwrap();
    let window = storage.fetch(&Predicate::MatchAll, OrderBy::Name, 3, 4).await.unwrap();
    assert_eq!(window, all[3..7].to_vec());
    assert!(storage.fetch(&Predicate::MatchAll, OrderBy::Name, 10, 4).await.unwrap().is_empty());
    assert!(storage.fetch(&Predicate::MatchAll, OrderBy::Name, 0, 0).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_insert_replaces_by_uuid() {
    let storage = MemoryStorage::new();
    storage.insert_card(card("1", "Opt", "XLN"));
    storage.insert_card(card("1", "Opt", "DOM"));
    assert_eq!(storage.len(), 1);
    assert_eq!(storage.distinct_values(CardField::SetCode).await.unwrap(), vec!["DOM"]);

    storage.clear();
    assert!(storage.is_empty());
}

#[tokio::test]
async fn test_distinct_values_skip_empty() {
    let storage = MemoryStorage::with_cards(vec![card("1", "Opt", "XLN"), card("2", "Token", ""), card("3", "Shock", "XLN")]);
    assert_eq!(storage.distinct_values(CardField::SetCode).await.unwrap(), vec!["XLN"]);
    assert_eq!(storage.distinct_values(CardField::Uuid).await.unwrap(), vec!["1", "2", "3"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_queries() {
    let storage = Arc::new(MemoryStorage::with_cards(numbered_catalog(500, "M20")));
    let engine = QueryEngine::new(storage, Arc::new(get_test_config().clone()));

    let tasks = (1..=5i64).map(|page| {
        let engine = engine.clone();
        tokio::spawn(async move { engine.list_cards(page, None).await })
    });
    let results = join_all(tasks).await;

    let mut total_items = 0;
    for result in results {
        let page = result.unwrap().unwrap();
        assert_eq!(page.total, 500);
        total_items += page.items.len();
    }
    assert_eq!(total_items, 500);
}
