//! Account entity - the credentialed identity behind a profile

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A registered account. Password hashes never live on the entity; they
/// stay behind the account store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Snowflake,
    pub login_id: String,
    pub name: String,
    pub picture_url: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new Account registered now
    pub fn new(id: Snowflake, login_id: String, name: String) -> Self {
        Self {
            id,
            login_id,
            name,
            picture_url: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Name shown next to broadcasts and videos; falls back to the login id
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.login_id
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_login_id() {
        let mut account = Account::new(Snowflake::new(1), "ada@example.com".to_string(), String::new());
        assert_eq!(account.display_name(), "ada@example.com");

        account.name = "Ada".to_string();
        assert_eq!(account.display_name(), "Ada");
    }
}
