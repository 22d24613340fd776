use scorekeeper_core::MatchRecord;
use scorekeeper_storage::{BlobStore, StorageError, load_history, save_history};

/// Finished matches, newest first, mirrored to a blob store on every change.
pub struct HistoryStore<S: BlobStore> {
    store: S,
    records: Vec<MatchRecord>,
}

impl<S: BlobStore> HistoryStore<S> {
    /// Load whatever history `store` holds; unreadable history starts empty.
    pub fn open(store: S) -> Self {
        let records = load_history(&store);
        Self { store, records }
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Put `record` at the front and flush the whole list.
    pub fn prepend(&mut self, record: MatchRecord) -> Result<(), StorageError> {
        self.records.insert(0, record);
        self.persist()
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.records.clear();
        self.persist()
    }

    pub fn persist(&mut self) -> Result<(), StorageError> {
        save_history(&mut self.store, &self.records)?;
        log::info!("history saved ({} records)", self.records.len());
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
