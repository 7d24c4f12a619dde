//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod mapper;
mod repository;
mod security;

pub use mapper::WalletResponseMapper;
pub use repository::{RoleResolver, UserRepository, WalletStore};
pub use security::{HashError, PasswordHasher};
