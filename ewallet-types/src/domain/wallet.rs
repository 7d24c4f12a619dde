//! Wallet domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::user::UserId;

entity_id!(
    /// Unique identifier for a Wallet.
    WalletId
);

/// A stored wallet. Created and updated elsewhere; only read here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: WalletId,
    /// International bank account number, unique per wallet
    pub iban: String,
    pub name: String,
    pub balance: Decimal,
    /// Owner of the wallet
    pub user_id: UserId,
}
