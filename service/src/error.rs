use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("config error: {0}")]
    Config(String),

    #[error("storage backend error: {0}")]
    Lmdb(#[from] reclaim_store_lmdb::LmdbError),

    #[error("store error: {0}")]
    Store(#[from] reclaim_store::StoreError),

    #[error("API server error: {0}")]
    Api(#[from] reclaim_api::ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
