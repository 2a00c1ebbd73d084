//! PostgreSQL implementation of AccountStore

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use beam_core::entities::Account;
use beam_core::error::DomainError;
use beam_core::traits::{AccountStore, RepoResult};
use beam_core::value_objects::Snowflake;

use crate::mappers::AccountInsert;
use crate::models::AccountModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of AccountStore
#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    /// Create a new PgAccountStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Account>> {
        let result = sqlx::query_as::<_, AccountModel>(
            r"
            SELECT id, login_id, name, picture_url, password_hash, created_at, deleted_at
            FROM accounts
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Account::from))
    }

    #[instrument(skip(self))]
    async fn find_by_login_id(&self, login_id: &str) -> RepoResult<Option<Account>> {
        let result = sqlx::query_as::<_, AccountModel>(
            r"
            SELECT id, login_id, name, picture_url, password_hash, created_at, deleted_at
            FROM accounts
            WHERE login_id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(login_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Account::from))
    }

    #[instrument(skip(self))]
    async fn login_id_exists(&self, login_id: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM accounts WHERE login_id = $1 AND deleted_at IS NULL)
            ",
        )
        .bind(login_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, account: &Account, password_hash: &str) -> RepoResult<()> {
        let insert = AccountInsert::new(account, password_hash);

        sqlx::query(
            r"
            INSERT INTO accounts (id, login_id, name, picture_url, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(insert.id)
        .bind(insert.login_id)
        .bind(insert.name)
        .bind(insert.picture_url)
        .bind(insert.password_hash)
        .bind(account.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::LoginIdTaken))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM accounts WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgAccountStore>();
    }
}
