use crate::error::UserError;
use aerovia_shared::{Authority, User};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

const MIN_PASSWORD_LEN: usize = 6;

/// Identity collaborator. The booking engine trusts the email returned by
/// `authenticate` as the requester key on reservations.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
        authority: Authority,
    ) -> Result<User, UserError>;

    /// Verify credentials and return the account they belong to.
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError>;
}

/// In-memory account directory keyed by email.
#[derive(Default)]
pub struct MemoryUserDirectory {
    users: DashMap<String, User>,
}

impl MemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }
}

#[async_trait]
impl Authenticator for MemoryUserDirectory {
    async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
        authority: Authority,
    ) -> Result<User, UserError> {
        if username.trim().is_empty() || username.contains(char::is_whitespace) {
            return Err(UserError::InvalidUsername(username.to_string()));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(UserError::InvalidPassword);
        }

        match self.users.entry(email.to_string()) {
            Entry::Occupied(_) => Err(UserError::AlreadyExists(email.to_string())),
            Entry::Vacant(slot) => {
                let user = User {
                    id: Uuid::new_v4(),
                    email: email.to_string(),
                    username: username.to_string(),
                    password: password.to_string().into(),
                    authority,
                };
                slot.insert(user.clone());
                tracing::info!("Registered account for {}", email);
                Ok(user)
            }
        }
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError> {
        let user = self
            .users
            .get(email)
            .ok_or_else(|| UserError::NotFound(email.to_string()))?;

        if !user.password.matches(&password.to_string()) {
            return Err(UserError::BadCredentials);
        }

        Ok(user.value().clone())
    }
}
