//! Repository port traits.
//!
//! Adapters (Postgres, SQLite, in-memory doubles) implement these traits.

use std::collections::BTreeSet;

use crate::domain::{Page, Pageable, Role, RoleType, User, UserId, Wallet, WalletId};
use crate::error::RepoError;

/// Read access to stored wallets.
#[async_trait::async_trait]
pub trait WalletStore: Send + Sync + 'static {
    /// Gets a wallet by its primary identifier.
    async fn find_by_id(&self, id: WalletId) -> Result<Option<Wallet>, RepoError>;

    /// Gets a wallet by its IBAN.
    async fn find_by_iban(&self, iban: &str) -> Result<Option<Wallet>, RepoError>;

    /// Lists the wallets owned by a user, ordered by id.
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Wallet>, RepoError>;

    /// Returns one page of wallets, ordered by id.
    async fn find_all(&self, pageable: Pageable) -> Result<Page<Wallet>, RepoError>;
}

/// Batch lookup against the role catalog.
#[async_trait::async_trait]
pub trait RoleResolver: Send + Sync + 'static {
    /// Returns the catalog entries for the requested types.
    ///
    /// Types missing from the catalog are left out of the result.
    async fn resolve_by_types(
        &self,
        types: &BTreeSet<RoleType>,
    ) -> Result<BTreeSet<Role>, RepoError>;
}

/// Persistence of registered users.
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Checks whether a (normalized) username is taken.
    async fn exists_by_username(&self, username: &str) -> Result<bool, RepoError>;

    /// Checks whether a (normalized) email is taken.
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError>;

    /// Persists a new user with its role links and returns it with its id set.
    ///
    /// MUST be atomic: either the user and all its role links are stored, or nothing is.
    async fn save(&self, user: User) -> Result<User, RepoError>;
}
