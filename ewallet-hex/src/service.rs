//! Wallet Application Service
//!
//! Read-only query façade over the wallet store.
//! Contains NO infrastructure logic - pure orchestration and mapping.

use ewallet_types::{
    AppError, Page, Pageable, UserId, Wallet, WalletId, WalletResponse, WalletResponseMapper,
    WalletStore,
};

use crate::mapper::WalletResponseDtoMapper;

/// Application service for wallet lookups.
///
/// Generic over `S: WalletStore` and `M: WalletResponseMapper` - both are injected
/// at construction. A missing single wallet is an error; a user without wallets is not.
pub struct WalletService<S: WalletStore, M: WalletResponseMapper = WalletResponseDtoMapper> {
    store: S,
    mapper: M,
}

impl<S: WalletStore> WalletService<S> {
    /// Creates a wallet service with the field-for-field response mapper.
    pub fn new(store: S) -> Self {
        Self::with_mapper(store, WalletResponseDtoMapper)
    }
}

impl<S: WalletStore, M: WalletResponseMapper> WalletService<S, M> {
    pub fn with_mapper(store: S, mapper: M) -> Self {
        Self { store, mapper }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    /// Gets a wallet by ID.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_id(&self, id: WalletId) -> Result<WalletResponse, AppError> {
        let wallet = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        Ok(self.mapper.to_dto(wallet))
    }

    /// Gets a wallet by IBAN.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_iban(&self, iban: &str) -> Result<WalletResponse, AppError> {
        let wallet = self.get_by_iban(iban).await?;
        Ok(self.mapper.to_dto(wallet))
    }

    /// Gets the stored wallet by IBAN, without response mapping.
    ///
    /// For service-to-service use.
    #[tracing::instrument(skip(self))]
    pub async fn get_by_iban(&self, iban: &str) -> Result<Wallet, AppError> {
        self.store
            .find_by_iban(iban)
            .await?
            .ok_or_else(|| not_found(iban))
    }

    /// Lists the wallets of a user. An empty list is a valid answer.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<WalletResponse>, AppError> {
        let wallets = self.store.find_by_user_id(user_id).await?;

        Ok(wallets
            .into_iter()
            .map(|wallet| self.mapper.to_dto(wallet))
            .collect())
    }

    /// Lists one page of wallets.
    ///
    /// An empty page is reported as `NotFound`, whatever page was asked for.
    #[tracing::instrument(skip(self))]
    pub async fn find_all(&self, pageable: Pageable) -> Result<Page<WalletResponse>, AppError> {
        let page = self.store.find_all(pageable).await?;

        if page.is_empty() {
            return Err(not_found("wallets"));
        }

        Ok(page.map(|wallet| self.mapper.to_dto(wallet)))
    }
}

fn not_found(key: impl std::fmt::Display) -> AppError {
    tracing::debug!(%key, "wallet lookup returned no data");
    AppError::NotFound(key.to_string())
}
