//! Wallet response mapping port.

use crate::domain::Wallet;
use crate::dto::WalletResponse;

/// Projects a stored wallet onto its response shape. Must be pure.
pub trait WalletResponseMapper: Send + Sync {
    fn to_dto(&self, wallet: Wallet) -> WalletResponse;
}
