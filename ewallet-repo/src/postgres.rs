//! PostgreSQL repository adapter.

use std::collections::BTreeSet;

use async_trait::async_trait;
use sqlx::PgPool;

use ewallet_types::{
    Page, Pageable, RepoError, Role, RoleResolver, RoleType, User, UserId, UserRepository, Wallet,
    WalletId, WalletStore,
};

use crate::types::{DbRole, DbWallet, db_error, insert_error};

// NUMERIC is read back as text so the decimal stays exact.
const WALLET_COLUMNS: &str = "id, iban, name, balance::TEXT AS balance, user_id";

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository implementation.
#[derive(Clone)]
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> anyhow::Result<()> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;

        execute_migration(
            &pool,
            include_str!("../migrations/0001_create_tables_pg.sql"),
            "0001",
        )
        .await?;
        tracing::debug!("postgres schema ready");

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl WalletStore for PostgresRepo {
    async fn find_by_id(&self, id: WalletId) -> Result<Option<Wallet>, RepoError> {
        let row: Option<DbWallet> =
            sqlx::query_as(&format!("SELECT {WALLET_COLUMNS} FROM wallets WHERE id = $1"))
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        row.map(DbWallet::into_domain).transpose()
    }

    async fn find_by_iban(&self, iban: &str) -> Result<Option<Wallet>, RepoError> {
        let row: Option<DbWallet> =
            sqlx::query_as(&format!("SELECT {WALLET_COLUMNS} FROM wallets WHERE iban = $1"))
                .bind(iban)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        row.map(DbWallet::into_domain).transpose()
    }

    async fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Wallet>, RepoError> {
        let rows: Vec<DbWallet> = sqlx::query_as(&format!(
            "SELECT {WALLET_COLUMNS} FROM wallets WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(DbWallet::into_domain).collect()
    }

    async fn find_all(&self, pageable: Pageable) -> Result<Page<Wallet>, RepoError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM wallets")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        let rows: Vec<DbWallet> = sqlx::query_as(&format!(
            "SELECT {WALLET_COLUMNS} FROM wallets ORDER BY id LIMIT $1 OFFSET $2"
        ))
        .bind(i64::from(pageable.size))
        .bind(pageable.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        let content = rows
            .into_iter()
            .map(DbWallet::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(content, pageable, total.max(0) as u64))
    }
}

#[async_trait]
impl RoleResolver for PostgresRepo {
    async fn resolve_by_types(
        &self,
        types: &BTreeSet<RoleType>,
    ) -> Result<BTreeSet<Role>, RepoError> {
        if types.is_empty() {
            return Ok(BTreeSet::new());
        }

        let names: Vec<String> = types.iter().map(|t| t.as_str().to_string()).collect();

        let rows: Vec<DbRole> =
            sqlx::query_as("SELECT id, role_type FROM roles WHERE role_type = ANY($1)")
                .bind(&names)
                .fetch_all(&self.pool)
                .await
                .map_err(db_error)?;

        rows.into_iter().map(DbRole::into_domain).collect()
    }
}

#[async_trait]
impl UserRepository for PostgresRepo {
    async fn exists_by_username(&self, username: &str) -> Result<bool, RepoError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(count > 0)
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))?;

        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO users (first_name, last_name, username, email, password, phone_number)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING id"#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.phone_number)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| insert_error(e, "User"))?;

        for role in &user.roles {
            sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)")
                .bind(id)
                .bind(role.id.value())
                .execute(&mut *tx)
                .await
                .map_err(db_error)?;
        }

        tx.commit()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))?;

        Ok(user.with_id(UserId::new(id)))
    }
}
