//! Initial Load Scenarios
//!
//! Seed fetch + merge + persist against an in-memory slot.

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use crate::{
        load_seed, JsonSlotRepository, MemorySlot, RemoteTodo, SeedSource, StoreConfig, StoreError,
        StoreResult, TextSlot, Todo, TodoBoard, TodoRepository,
    };

    enum FakeSeed {
        Items(Vec<RemoteTodo>),
        Fails(StoreError),
    }

    #[async_trait(?Send)]
    impl SeedSource for FakeSeed {
        async fn fetch(&self) -> StoreResult<Vec<RemoteTodo>> {
            match self {
                FakeSeed::Items(items) => Ok(items.clone()),
                FakeSeed::Fails(err) => Err(err.clone()),
            }
        }
    }

    fn remote(count: u64) -> Vec<RemoteTodo> {
        (1..=count)
            .map(|id| RemoteTodo {
                id,
                title: if id == 1 { "A".to_string() } else { format!("Remote {}", id) },
                completed: id % 2 == 0,
            })
            .collect()
    }

    async fn run_initial_load(
        config: &StoreConfig,
        repo: &JsonSlotRepository<MemorySlot>,
        source: &FakeSeed,
    ) -> TodoBoard {
        let mut board = TodoBoard::new(config);
        assert!(board.begin_load());
        let seed = load_seed(source, config).await;
        board.apply_seed(repo, seed);
        board
    }

    #[tokio::test]
    async fn test_empty_storage_takes_ten_external() {
        let config = StoreConfig::default();
        let repo = JsonSlotRepository::new(MemorySlot::new());

        let board = run_initial_load(&config, &repo, &FakeSeed::Items(remote(10))).await;

        assert_eq!(board.items().len(), 10);
        let expected_ids: Vec<String> = (1..=10).map(|n| format!("external-{}", n)).collect();
        let ids: Vec<String> = board.items().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, expected_ids);
        assert!(board.items()[1].completed);
        assert!(board.error().is_none());
        assert_eq!(repo.read(), board.items());
    }

    #[tokio::test]
    async fn test_local_duplicate_title_wins() {
        let config = StoreConfig::default();
        let repo = JsonSlotRepository::new(MemorySlot::new());
        repo.write(&[Todo::new("x", "A").with_completed(true)]).unwrap();

        let board = run_initial_load(&config, &repo, &FakeSeed::Items(remote(10))).await;

        let titled_a: Vec<&Todo> = board.items().iter().filter(|t| t.title == "A").collect();
        assert_eq!(titled_a, vec![&Todo::new("x", "A").with_completed(true)]);
        assert_eq!(board.items().len(), 10);
        assert_eq!(board.items()[0].id, "x");
        assert_eq!(repo.read(), board.items());
    }

    #[tokio::test]
    async fn test_fetch_failure_sets_error_and_keeps_empty() {
        let config = StoreConfig::default();
        let repo = JsonSlotRepository::new(MemorySlot::new());
        repo.write(&[Todo::new("x", "Local only")]).unwrap();
        let err = StoreError::Network("Network response was not ok (500)".into());
        let source = FakeSeed::Fails(err);

        let board = run_initial_load(&config, &repo, &source).await;

        assert!(!board.error().unwrap().is_empty());
        assert!(board.items().is_empty());
        // Persisted data is untouched
        assert_eq!(repo.read(), vec![Todo::new("x", "Local only")]);
    }

    #[tokio::test]
    async fn test_fetch_failure_with_local_fallback() {
        let config = StoreConfig::default().with_local_fallback(true);
        let repo = JsonSlotRepository::new(MemorySlot::new());
        repo.write(&[Todo::new("x", "Local only")]).unwrap();
        let source = FakeSeed::Fails(StoreError::Network("offline".into()));

        let board = run_initial_load(&config, &repo, &source).await;

        assert_eq!(board.error(), Some("Network error: offline"));
        assert_eq!(board.items(), &[Todo::new("x", "Local only")][..]);
    }

    #[tokio::test]
    async fn test_seed_capped_at_limit() {
        let config = StoreConfig::default().with_seed_limit(3);
        let seed = load_seed(&FakeSeed::Items(remote(8)), &config).await.unwrap();
        let ids: Vec<&str> = seed.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["external-1", "external-2", "external-3"]);
    }

    #[tokio::test]
    async fn test_corrupt_storage_is_treated_as_empty() {
        let config = StoreConfig::default();
        let slot = MemorySlot::new();
        slot.store("{broken").unwrap();
        let repo = JsonSlotRepository::new(slot.clone());

        let board = run_initial_load(&config, &repo, &FakeSeed::Items(remote(2))).await;

        assert!(board.error().is_none());
        assert_eq!(board.items().len(), 2);
        let stored = slot.load().unwrap().unwrap();
        let parsed: Vec<Todo> = serde_json::from_str(&stored).unwrap();
        assert_eq!(parsed, board.items());
    }

    #[tokio::test]
    async fn test_second_mount_does_not_duplicate() {
        let config = StoreConfig::default();
        let repo = JsonSlotRepository::new(MemorySlot::new());
        let source = FakeSeed::Items(remote(10));

        let mut first = run_initial_load(&config, &repo, &source).await;
        first.delete(&repo, "external-5");
        first.start_edit(first.items()[0].clone());
        first.set_draft_title("A renamed");
        first.save_edit(&repo);

        let second = run_initial_load(&config, &repo, &source).await;

        // Renamed item keeps its id and is not re-added; deleted item comes back
        assert_eq!(second.items().len(), 10);
        assert_eq!(second.items()[0], Todo::new("external-1", "A renamed"));
        assert_eq!(second.items()[9].id, "external-5");
    }
}
