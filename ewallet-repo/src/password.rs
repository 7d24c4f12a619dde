//! Password hashing with bcrypt.

use ewallet_types::{HashError, PasswordHasher};

/// Default bcrypt work factor.
pub const DEFAULT_HASH_COST: u32 = bcrypt::DEFAULT_COST;

/// bcrypt-backed [`PasswordHasher`]. Each hash carries its own random salt.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Creates a hasher with the given work factor (4..=31).
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Checks a plaintext password against a stored hash.
    pub fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, HashError> {
        bcrypt::verify(plaintext, hash).map_err(|e| HashError::Failed(e.to_string()))
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| HashError::Failed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);
        let hashed = hasher.hash("secure_password_123").unwrap();

        assert_ne!(hashed, "secure_password_123");
        assert!(hasher.verify("secure_password_123", &hashed).unwrap());
        assert!(!hasher.verify("wrong_password", &hashed).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);

        let first = hasher.hash("same").unwrap();
        let second = hasher.hash("same").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_invalid_cost_fails() {
        let hasher = BcryptPasswordHasher::new(2);

        assert!(matches!(hasher.hash("password"), Err(HashError::Failed(_))));
    }
}
