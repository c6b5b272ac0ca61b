//! LMDB environment setup.

use std::path::Path;
use std::sync::Arc;

use heed::types::Bytes;
use heed::{Database, Env, EnvOpenOptions};

use crate::items::LmdbItemStore;
use crate::LmdbError;

/// Databases opened within the environment.
const MAX_DBS: u32 = 4;

/// Wraps the LMDB environment and all database handles.
pub struct LmdbEnvironment {
    pub(crate) env: Arc<Env>,
    pub(crate) found_db: Database<Bytes, Bytes>,
    pub(crate) lost_db: Database<Bytes, Bytes>,
    pub(crate) meta_db: Database<Bytes, Bytes>,
}

impl LmdbEnvironment {
    /// Open or create an LMDB environment at the given path.
    ///
    /// The directory is created if it does not exist. `map_size` is the
    /// maximum size the database file may grow to, in bytes.
    pub fn open(path: &Path, map_size: usize) -> Result<Self, LmdbError> {
        std::fs::create_dir_all(path)?;

        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size)
                .max_dbs(MAX_DBS)
                .open(path)?
        };

        let mut wtxn = env.write_txn()?;
        let found_db = env.create_database(&mut wtxn, Some("found_items"))?;
        let lost_db = env.create_database(&mut wtxn, Some("lost_items"))?;
        let meta_db = env.create_database(&mut wtxn, Some("meta"))?;
        wtxn.commit()?;

        Ok(Self {
            env: Arc::new(env),
            found_db,
            lost_db,
            meta_db,
        })
    }

    /// Build an item store sharing this environment.
    pub fn item_store(&self) -> LmdbItemStore {
        LmdbItemStore {
            env: Arc::clone(&self.env),
            found_db: self.found_db,
            lost_db: self.lost_db,
            meta_db: self.meta_db,
        }
    }
}
