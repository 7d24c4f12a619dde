//! Password hashing port.

/// Error type for password hashing.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed: {0}")]
    Failed(String),
}

/// One-way password hashing capability.
///
/// The core never inspects or verifies the produced hash.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<String, HashError>;
}
