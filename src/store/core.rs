use crate::traits::RecordCollection;
use crate::DbPool;
use std::marker::PhantomData;

/// Generic database store that runs pagination queries for one record collection
#[derive(Clone)]
pub struct RecordStore<T: RecordCollection> {
    pub(crate) db_pool: DbPool,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T: RecordCollection> std::fmt::Debug for RecordStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("table", &T::table_name())
            .finish()
    }
}

impl<T: RecordCollection> RecordStore<T> {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            db_pool,
            _phantom: PhantomData,
        }
    }

    /// Get database pool reference
    pub fn pool(&self) -> &DbPool {
        &self.db_pool
    }
}
