//! SQLite repository adapter.

use std::collections::BTreeSet;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use ewallet_types::{
    Page, Pageable, RepoError, Role, RoleResolver, RoleType, User, UserId, UserRepository, Wallet,
    WalletId, WalletStore,
};

use crate::types::{DbRole, DbWallet, db_error, insert_error};

const WALLET_COLUMNS: &str = "id, iban, name, balance, user_id";

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
#[derive(Clone)]
pub struct SqliteRepo {
    pool: SqlitePool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &SqlitePool, sql: &str, name: &str) -> anyhow::Result<()> {
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

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                if let Some(parent) = std::path::Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        execute_migration(
            &pool,
            include_str!("../migrations/0001_create_tables.sql"),
            "0001",
        )
        .await?;
        tracing::debug!("sqlite schema ready");

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wallet queries
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl WalletStore for SqliteRepo {
    async fn find_by_id(&self, id: WalletId) -> Result<Option<Wallet>, RepoError> {
        let row: Option<DbWallet> =
            sqlx::query_as(&format!("SELECT {WALLET_COLUMNS} FROM wallets WHERE id = ?"))
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        row.map(DbWallet::into_domain).transpose()
    }

    async fn find_by_iban(&self, iban: &str) -> Result<Option<Wallet>, RepoError> {
        let row: Option<DbWallet> =
            sqlx::query_as(&format!("SELECT {WALLET_COLUMNS} FROM wallets WHERE iban = ?"))
                .bind(iban)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        row.map(DbWallet::into_domain).transpose()
    }

    async fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Wallet>, RepoError> {
        let rows: Vec<DbWallet> = sqlx::query_as(&format!(
            "SELECT {WALLET_COLUMNS} FROM wallets WHERE user_id = ? ORDER BY id"
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
            "SELECT {WALLET_COLUMNS} FROM wallets ORDER BY id LIMIT ? OFFSET ?"
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

// ─────────────────────────────────────────────────────────────────────────────
// Role catalog
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl RoleResolver for SqliteRepo {
    async fn resolve_by_types(
        &self,
        types: &BTreeSet<RoleType>,
    ) -> Result<BTreeSet<Role>, RepoError> {
        if types.is_empty() {
            return Ok(BTreeSet::new());
        }

        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, role_type FROM roles WHERE role_type IN (");
        let mut separated = query.separated(", ");
        for role_type in types {
            separated.push_bind(role_type.as_str());
        }
        separated.push_unseparated(")");

        let rows: Vec<DbRole> = query
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        rows.into_iter().map(DbRole::into_domain).collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl UserRepository for SqliteRepo {
    async fn exists_by_username(&self, username: &str) -> Result<bool, RepoError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
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

        let result = sqlx::query(
            r#"INSERT INTO users (first_name, last_name, username, email, password, phone_number)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.phone_number)
        .execute(&mut *tx)
        .await
        .map_err(|e| insert_error(e, "User"))?;

        let id = UserId::new(result.last_insert_rowid());

        for role in &user.roles {
            sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES (?, ?)")
                .bind(id.value())
                .bind(role.id.value())
                .execute(&mut *tx)
                .await
                .map_err(db_error)?;
        }

        tx.commit()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))?;

        Ok(user.with_id(id))
    }
}
