//! Profile service
//!
//! Handles credential login (the `ProfileRepository` contract), token
//! issuance for the HTTP surface, and profile assembly.

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{info, instrument, warn};

use beam_common::auth::TokenPair;
use beam_common::{verify_password, AppError};
use beam_core::entities::{Account, Profile};
use beam_core::events::AccountLoggedInEvent;
use beam_core::traits::{OutcomeStream, ProfileRepository, RepoResult};
use beam_core::value_objects::Snowflake;
use beam_core::{DomainError, DomainEvent};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Profile service
pub struct ProfileService {
    ctx: ServiceContext,
}

impl ProfileService {
    /// Create a new ProfileService
    pub fn new(ctx: &ServiceContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    /// Check credentials against the account store.
    ///
    /// Returns the account on success, `None` on rejected credentials.
    /// Infrastructure failures surface as errors, so a wrong password and a
    /// broken backend are never conflated.
    async fn check_credentials(
        ctx: &ServiceContext,
        login_id: &str,
        password: &str,
    ) -> RepoResult<Option<Account>> {
        let Some(account) = ctx.account_store().find_by_login_id(login_id).await? else {
            return Ok(None);
        };

        let Some(hash) = ctx.account_store().get_password_hash(account.id).await? else {
            warn!(user_id = %account.id, "Account has no password hash");
            return Ok(None);
        };

        let valid = verify_password(password, &hash)
            .map_err(|e| DomainError::InternalError(e.to_string()))?;

        Ok(valid.then_some(account))
    }

    /// Login for the HTTP surface: check credentials and issue a token pair
    #[instrument(skip(self, password), fields(login_id = %login_id))]
    pub async fn login_with_tokens(
        &self,
        login_id: &str,
        password: &str,
    ) -> ServiceResult<(Account, TokenPair)> {
        let account = Self::check_credentials(&self.ctx, login_id, password)
            .await?
            .ok_or_else(|| {
                warn!(login_id = %login_id, "Login failed: invalid credentials");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let tokens = self
            .ctx
            .jwt_service()
            .generate_token_pair(account.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(user_id = %account.id, "User logged in");
        Ok((account, tokens))
    }

    /// Exchange a refresh token for a fresh pair
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh_tokens(&self, refresh_token: &str) -> ServiceResult<(Account, TokenPair)> {
        let tokens = self
            .ctx
            .jwt_service()
            .refresh_tokens(refresh_token)
            .map_err(ServiceError::from)?;

        let claims = self
            .ctx
            .jwt_service()
            .validate_access_token(&tokens.access_token)
            .map_err(ServiceError::from)?;
        let user_id = claims.user_id().map_err(ServiceError::from)?;

        let account = self
            .ctx
            .account_store()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", user_id.to_string()))?;

        Ok((account, tokens))
    }

    /// Assemble a user's profile: account display fields plus an owned
    /// snapshot of their videos, newest first
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: Snowflake) -> ServiceResult<Profile> {
        let account = self
            .ctx
            .account_store()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", user_id.to_string()))?;

        let videos = self.ctx.video_store().find_by_user(user_id).await?;

        Ok(Profile::new(account.name, account.picture_url, videos))
    }

    /// Look up the account behind a validated access token subject
    #[instrument(skip(self))]
    pub async fn get_account(&self, user_id: Snowflake) -> ServiceResult<Account> {
        self.ctx
            .account_store()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", user_id.to_string()))
    }
}

#[async_trait]
impl ProfileRepository for ProfileService {
    #[instrument(skip(self, password), fields(login_id = %id))]
    async fn login(&self, id: &str, password: &str) -> OutcomeStream<bool> {
        let ctx = self.ctx.clone();
        let id = id.to_string();
        let password = password.to_string();
        let (tx, rx) = mpsc::channel(1);

        tokio::spawn(async move {
            let outcome = match Self::check_credentials(&ctx, &id, &password).await {
                Ok(Some(account)) => {
                    let event = DomainEvent::AccountLoggedIn(AccountLoggedInEvent {
                        user_id: account.id,
                        at: chrono::Utc::now(),
                    });
                    if let Err(e) = ctx.publisher().publish_to_user(account.id, &event).await {
                        warn!(error = %e, user_id = %account.id, "Failed to announce login");
                    }
                    Ok(true)
                }
                Ok(None) => Ok(false),
                Err(e) => Err(e),
            };

            let _ = tx.send(outcome).await;
        });

        Box::pin(ReceiverStream::new(rx))
    }
}
