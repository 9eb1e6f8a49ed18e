use super::{Tea, TeaDraft, TeaId, TeaRepository};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local store backed by a vector and a monotonically increasing id counter.
#[derive(Debug)]
pub struct InMemoryTeaStore {
    state: RwLock<StoreState>,
}

#[derive(Debug)]
struct StoreState {
    teas: Vec<Tea>,
    next_id: TeaId,
}

impl InMemoryTeaStore {
    /// Create an empty store whose first record will receive id 1.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                teas: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryTeaStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TeaRepository for InMemoryTeaStore {
    async fn insert(&self, draft: TeaDraft) -> Tea {
        let mut state = self.state.write().await;
        let tea = Tea {
            id: state.next_id,
            name: draft.name,
            price: draft.price,
        };
        state.next_id += 1;
        state.teas.push(tea.clone());
        tracing::debug!(id = tea.id, total = state.teas.len(), "Inserted tea");
        tea
    }

    async fn list(&self) -> Vec<Tea> {
        self.state.read().await.teas.clone()
    }

    async fn find(&self, id: TeaId) -> Option<Tea> {
        self.state
            .read()
            .await
            .teas
            .iter()
            .find(|tea| tea.id == id)
            .cloned()
    }

    async fn update(&self, id: TeaId, draft: TeaDraft) -> Option<Tea> {
        let mut state = self.state.write().await;
        let tea = state.teas.iter_mut().find(|tea| tea.id == id)?;
        tea.name = draft.name;
        tea.price = draft.price;
        tracing::debug!(id, "Updated tea");
        Some(tea.clone())
    }

    async fn remove(&self, id: TeaId) -> Option<Tea> {
        let mut state = self.state.write().await;
        let index = state.teas.iter().position(|tea| tea.id == id)?;
        let removed = state.teas.remove(index);
        tracing::debug!(id, remaining = state.teas.len(), "Removed tea");
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(name: &str, price: i64) -> TeaDraft {
        TeaDraft {
            name: Some(json!(name)),
            price: Some(json!(price)),
        }
    }

    #[tokio::test]
    async fn ids_keep_increasing_across_deletes() {
        let store = InMemoryTeaStore::new();
        let first = store.insert(draft("Green Tea", 5)).await;
        let second = store.insert(draft("Black Tea", 4)).await;
        assert_eq!((first.id, second.id), (1, 2));

        store.remove(2).await.expect("second tea present");
        let third = store.insert(draft("Black Tea", 4)).await;
        assert_eq!(third.id, 3);

        store.remove(1).await.expect("first tea present");
        store.remove(3).await.expect("third tea present");
        let fourth = store.insert(draft("Chai", 3)).await;
        assert_eq!(fourth.id, 4);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order_without_gaps() {
        let store = InMemoryTeaStore::new();
        for (name, price) in [("a", 1), ("b", 2), ("c", 3)] {
            store.insert(draft(name, price)).await;
        }
        store.remove(2).await;

        let ids: Vec<TeaId> = store.list().await.iter().map(|tea| tea.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn update_replaces_both_fields() {
        let store = InMemoryTeaStore::new();
        store.insert(draft("Green Tea", 5)).await;

        let updated = store
            .update(
                1,
                TeaDraft {
                    name: Some(json!("Oolong")),
                    price: None,
                },
            )
            .await
            .expect("tea exists");
        assert_eq!(updated.name, Some(json!("Oolong")));
        assert_eq!(updated.price, None);
        assert_eq!(store.find(1).await, Some(updated));
    }

    #[tokio::test]
    async fn missing_ids_report_none() {
        let store = InMemoryTeaStore::new();
        assert!(store.find(1).await.is_none());
        assert!(store.update(1, TeaDraft::default()).await.is_none());
        assert!(store.remove(1).await.is_none());
        // lookups never consume ids
        assert_eq!(store.insert(TeaDraft::default()).await.id, 1);
    }
}
