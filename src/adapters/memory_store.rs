use crate::domain::model::{NewOffer, OfferRecord, RecordId};
use crate::domain::ports::OfferStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::Mutex;

/// In-process offers table. Used for `--dry-run` and in tests.
#[derive(Debug)]
pub struct MemoryStore {
    rows: Mutex<Vec<OfferRecord>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub async fn records(&self) -> Vec<OfferRecord> {
        self.rows.lock().await.clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OfferStore for MemoryStore {
    async fn insert_offer(&self, offer: &NewOffer) -> Result<OfferRecord> {
        let record = OfferRecord {
            id: RecordId::Int(self.next_id.fetch_add(1, Ordering::SeqCst)),
            created_at: Some(Utc::now()),
            offer: offer.clone(),
        };

        self.rows.lock().await.push(record.clone());
        tracing::debug!("Stored offer {} in memory", record.id);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Selection;

    #[tokio::test]
    async fn test_ids_are_assigned_sequentially() {
        let store = MemoryStore::new();
        let offer = Selection::default().into_new_offer(19_000);

        let first = store.insert_offer(&offer).await.unwrap();
        let second = store.insert_offer(&offer).await.unwrap();

        assert_eq!(first.id, RecordId::Int(1));
        assert_eq!(second.id, RecordId::Int(2));
        assert_eq!(store.records().await.len(), 2);
        assert_eq!(store.records().await[0].offer, offer);
    }
}
