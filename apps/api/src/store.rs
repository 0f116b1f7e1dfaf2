use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::resume::ResumeRecord;

/// The session's parsed collection. Search, analytics and export only ever see
/// a snapshot, never the live vector.
#[derive(Clone, Default)]
pub struct ResumeStore {
    records: Arc<RwLock<Vec<ResumeRecord>>>,
}

impl ResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn extend(&self, records: impl IntoIterator<Item = ResumeRecord>) {
        self.records.write().await.extend(records);
    }

    pub async fn snapshot(&self) -> Vec<ResumeRecord> {
        self.records.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<ResumeRecord> {
        self.records.read().await.iter().find(|r| r.id == id).cloned()
    }

    /// Drops every record, returning how many were held.
    pub async fn clear(&self) -> usize {
        let mut records = self.records.write().await;
        let count = records.len();
        records.clear();
        count
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::FileInfo;

    #[tokio::test]
    async fn test_extend_snapshot_get_clear() {
        let store = ResumeStore::new();
        let a = ResumeRecord::failed(FileInfo::new("a.pdf", 1), "File not found!");
        let b = ResumeRecord::failed(FileInfo::new("b.pdf", 1), "File not found!");
        let b_id = b.id;

        store.extend(vec![a, b]).await;
        assert_eq!(store.len().await, 2);

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot[0].file_info.name, "a.pdf");
        assert_eq!(store.get(b_id).await.unwrap().file_info.name, "b.pdf");
        assert!(store.get(Uuid::new_v4()).await.is_none());

        assert_eq!(store.clear().await, 2);
        assert_eq!(store.len().await, 0);
        // earlier snapshots are unaffected
        assert_eq!(snapshot.len(), 2);
    }
}
