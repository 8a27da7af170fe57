use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Bridge capability not available: {0}")]
    NotAvailable(String),

    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
