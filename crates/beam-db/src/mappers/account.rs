//! Account entity <-> model mapper

use beam_core::entities::Account;
use beam_core::value_objects::Snowflake;

use crate::models::AccountModel;

/// Convert AccountModel to Account entity
impl From<AccountModel> for Account {
    fn from(model: AccountModel) -> Self {
        Account {
            id: Snowflake::new(model.id),
            login_id: model.login_id,
            name: model.name,
            picture_url: model.picture_url,
            created_at: model.created_at,
        }
    }
}

/// Account values prepared for database insertion
pub struct AccountInsert<'a> {
    pub id: i64,
    pub login_id: &'a str,
    pub name: &'a str,
    pub picture_url: &'a str,
    pub password_hash: &'a str,
}

impl<'a> AccountInsert<'a> {
    pub fn new(account: &'a Account, password_hash: &'a str) -> Self {
        Self {
            id: account.id.into_inner(),
            login_id: &account.login_id,
            name: &account.name,
            picture_url: &account.picture_url,
            password_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_model_to_entity() {
        let model = AccountModel {
            id: 42,
            login_id: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            picture_url: "https://cdn.example.com/p/42.png".to_string(),
            password_hash: "$argon2id$...".to_string(),
            created_at: Utc::now(),
            deleted_at: None,
        };

        let account = Account::from(model.clone());
        assert_eq!(account.id, Snowflake::new(42));
        assert_eq!(account.login_id, model.login_id);
        assert_eq!(account.name, model.name);
        assert_eq!(account.picture_url, model.picture_url);
    }
}
