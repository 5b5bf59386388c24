use crate::model::user::{Role, User};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::RwLock;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, username: String, password: String, email: String, role: Role)
        -> RepositoryResult<User>;
    async fn find_by_credentials(&self, username: &str, password: &str) -> Option<User>;
    async fn find_by_username(&self, username: &str) -> Option<User>;
    async fn find_by_id(&self, id: u64) -> Option<User>;
}

struct UserTable {
    users: Vec<User>,
    next_id: u64,
}

/// Process-wide in-memory registry. Accounts are created at registration or
/// seeded at startup and never deleted or edited. The lock makes the
/// duplicate-username check-then-insert atomic under the multi-threaded
/// runtime.
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        InMemoryUserRepository {
            table: RwLock::new(UserTable { users: Vec::new(), next_id: 1 }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, username: String, password: String, email: String, role: Role)
        -> RepositoryResult<User>
    {
        let mut table = self.table.write().map_err(|_| {
            RepositoryError::validation("User table lock poisoned".to_string())
        })?;
        // Case-sensitive exact match, same as the lookup path.
        if table.users.iter().any(|u| u.username == username) {
            return Err(RepositoryError::already_exists(format!(
                "Username already taken: {}",
                username
            )));
        }
        let user = User {
            id: table.next_id,
            username,
            password,
            role,
            email,
            created_at: Utc::now(),
        };
        table.next_id += 1;
        table.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_credentials(&self, username: &str, password: &str) -> Option<User> {
        let table = self.table.read().ok()?;
        table
            .users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned()
    }

    async fn find_by_username(&self, username: &str) -> Option<User> {
        let table = self.table.read().ok()?;
        table.users.iter().find(|u| u.username == username).cloned()
    }

    async fn find_by_id(&self, id: u64) -> Option<User> {
        let table = self.table.read().ok()?;
        table.users.iter().find(|u| u.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duplicate_username_leaves_registry_unchanged() {
        let repo = InMemoryUserRepository::new();
        repo.insert("bob".into(), "pw1".into(), "bob@x.com".into(), Role::Customer)
            .await
            .unwrap();
        let err = repo
            .insert("bob".into(), "other".into(), "bob2@x.com".into(), Role::Customer)
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
        // Original account untouched
        let bob = repo.find_by_username("bob").await.unwrap();
        assert_eq!(bob.password, "pw1");
        assert_eq!(bob.email, "bob@x.com");
    }

    #[tokio::test]
    async fn credentials_match_is_exact_and_case_sensitive() {
        let repo = InMemoryUserRepository::new();
        repo.insert("Bob".into(), "pw1".into(), "bob@x.com".into(), Role::Customer)
            .await
            .unwrap();
        assert!(repo.find_by_credentials("Bob", "pw1").await.is_some());
        assert!(repo.find_by_credentials("bob", "pw1").await.is_none());
        assert!(repo.find_by_credentials("Bob", "PW1").await.is_none());
    }

    #[tokio::test]
    async fn ids_are_unique_and_increasing() {
        let repo = InMemoryUserRepository::new();
        let a = repo
            .insert("a".into(), "p".into(), "a@x.com".into(), Role::Customer)
            .await
            .unwrap();
        let b = repo
            .insert("b".into(), "p".into(), "b@x.com".into(), Role::Customer)
            .await
            .unwrap();
        assert!(b.id > a.id);
    }
}
