//! Database row types shared by the SQLite and PostgreSQL adapters.
//!
//! Both adapters select balances as text, so one set of row structs fits both.

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::FromRow;

use ewallet_types::{RepoError, Role, RoleId, RoleType, UserId, Wallet, WalletId};

// ─────────────────────────────────────────────────────────────────────────────
// Database row structs (derive FromRow for automatic mapping)
// ─────────────────────────────────────────────────────────────────────────────

/// Wallet row from database.
#[derive(FromRow)]
pub struct DbWallet {
    pub id: i64,
    pub iban: String,
    pub name: String,
    pub balance: String,
    pub user_id: i64,
}

impl DbWallet {
    pub fn into_domain(self) -> Result<Wallet, RepoError> {
        let balance = Decimal::from_str(&self.balance).map_err(|e| {
            RepoError::Database(format!("Invalid balance for wallet {}: {}", self.id, e))
        })?;

        Ok(Wallet {
            id: WalletId::new(self.id),
            iban: self.iban,
            name: self.name,
            balance,
            user_id: UserId::new(self.user_id),
        })
    }
}

/// Role catalog row from database.
#[derive(FromRow)]
pub struct DbRole {
    pub id: i64,
    pub role_type: String,
}

impl DbRole {
    pub fn into_domain(self) -> Result<Role, RepoError> {
        let role_type = RoleType::from_str(&self.role_type)
            .map_err(|e| RepoError::Database(format!("Role catalog entry {}: {}", self.id, e)))?;

        Ok(Role::new(RoleId::new(self.id), role_type))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Error mapping
// ─────────────────────────────────────────────────────────────────────────────

pub fn db_error(err: sqlx::Error) -> RepoError {
    RepoError::Database(err.to_string())
}

/// Maps an insert failure, turning unique-key violations into `Conflict`.
pub fn insert_error(err: sqlx::Error, entity: &str) -> RepoError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepoError::Conflict(format!("{} already exists", entity))
        }
        _ => RepoError::Database(err.to_string()),
    }
}
