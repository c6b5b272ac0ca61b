//! LMDB implementation of ItemStore.
//!
//! Records are keyed by big-endian id bytes, so LMDB's key order is
//! insertion order and `list_verified` comes back sorted for free. Values
//! are bincode-encoded `ItemRecord`s. The next id for each kind is persisted
//! in the `meta` database.

use std::sync::Arc;

use heed::types::Bytes;
use heed::{Database, Env};

use reclaim_store::{ItemStore, StoreError};
use reclaim_types::{ItemId, ItemKind, ItemRecord, NewItem};

use crate::LmdbError;

/// Ids start at 1, like the original SQL auto-increment columns.
const FIRST_ITEM_ID: u64 = 1;

pub struct LmdbItemStore {
    pub(crate) env: Arc<Env>,
    pub(crate) found_db: Database<Bytes, Bytes>,
    pub(crate) lost_db: Database<Bytes, Bytes>,
    pub(crate) meta_db: Database<Bytes, Bytes>,
}

impl LmdbItemStore {
    fn db_for(&self, kind: ItemKind) -> Database<Bytes, Bytes> {
        match kind {
            ItemKind::Found => self.found_db,
            ItemKind::Lost => self.lost_db,
        }
    }

    fn counter_key(kind: ItemKind) -> String {
        format!("next_item_id:{}", kind.table_name())
    }

    /// Read the next id for `kind` within an open transaction.
    fn next_id(&self, rtxn: &heed::RoTxn<'_>, kind: ItemKind) -> Result<u64, LmdbError> {
        let key = Self::counter_key(kind);
        match self.meta_db.get(rtxn, key.as_bytes())? {
            Some(bytes) => {
                let arr: [u8; 8] = bytes.try_into().map_err(|_| {
                    LmdbError::Serialization(format!("counter '{key}' has unexpected byte length"))
                })?;
                Ok(u64::from_be_bytes(arr))
            }
            None => Ok(FIRST_ITEM_ID),
        }
    }
}

impl ItemStore for LmdbItemStore {
    fn insert(&self, kind: ItemKind, item: &NewItem) -> Result<ItemId, StoreError> {
        let db = self.db_for(kind);
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;

        let raw_id = self.next_id(&wtxn, kind).map_err(LmdbError::from)?;
        let id = ItemId::new(raw_id);
        let record = ItemRecord::from_new(id, item);
        let bytes = bincode::serialize(&record).map_err(LmdbError::from)?;

        db.put(&mut wtxn, &raw_id.to_be_bytes(), &bytes)
            .map_err(LmdbError::from)?;
        self.meta_db
            .put(
                &mut wtxn,
                Self::counter_key(kind).as_bytes(),
                &(raw_id + 1).to_be_bytes(),
            )
            .map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;

        Ok(id)
    }

    fn set_verified(&self, kind: ItemKind, id: ItemId) -> Result<(), StoreError> {
        let db = self.db_for(kind);
        let key = id.as_u64().to_be_bytes();
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;

        let bytes = db
            .get(&wtxn, &key)
            .map_err(LmdbError::from)?
            .ok_or_else(|| LmdbError::NotFound(format!("{} item {id}", kind.as_str())))?;
        let mut record: ItemRecord = bincode::deserialize(bytes).map_err(LmdbError::from)?;
        record.verified = true;

        let updated = bincode::serialize(&record).map_err(LmdbError::from)?;
        db.put(&mut wtxn, &key, &updated).map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }

    fn get(&self, kind: ItemKind, id: ItemId) -> Result<Option<ItemRecord>, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let bytes = self
            .db_for(kind)
            .get(&rtxn, &id.as_u64().to_be_bytes())
            .map_err(LmdbError::from)?;
        match bytes {
            Some(bytes) => {
                let record = bincode::deserialize(bytes).map_err(LmdbError::from)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    fn list_verified(&self, kind: ItemKind) -> Result<Vec<ItemRecord>, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let iter = self.db_for(kind).iter(&rtxn).map_err(LmdbError::from)?;

        let mut records = Vec::new();
        for result in iter {
            let (_key, bytes) = result.map_err(LmdbError::from)?;
            let record: ItemRecord = bincode::deserialize(bytes).map_err(LmdbError::from)?;
            if record.verified {
                records.push(record);
            }
        }
        Ok(records)
    }

    fn item_count(&self, kind: ItemKind) -> Result<u64, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let count = self.db_for(kind).len(&rtxn).map_err(LmdbError::from)?;
        Ok(count)
    }
}
