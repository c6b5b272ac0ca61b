use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("mail endpoint unreachable: {0}")]
    Unreachable(String),

    #[error("mail request failed: {0}")]
    RequestFailed(String),

    #[error("mail endpoint rejected the message (status {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("mail delivery is not configured")]
    NotConfigured,
}
