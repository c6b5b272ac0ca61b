use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("entropy source failure: {0}")]
    Entropy(String),
}
