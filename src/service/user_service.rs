use crate::model::user::{Role, User};
use crate::repository::user_repo::UserRepository;
use crate::util::error::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument};

#[async_trait]
pub trait UserService: Send + Sync {
    /// Registers a new customer account. Fails with Conflict when the
    /// username is already taken (case-sensitive exact match).
    async fn register(&self, username: String, password: String, email: String)
        -> Result<User, ServiceError>;
    /// Resolves a username/password pair to its account. Plaintext exact
    /// match; see the User model note.
    async fn login(&self, username: &str, password: &str) -> Result<User, ServiceError>;
    async fn create_admin(&self, username: String, password: String, email: String)
        -> Result<User, ServiceError>;
}

pub struct UserServiceImpl {
    pub user_repo: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    #[instrument(skip(self, password), fields(username = %username))]
    async fn register(&self, username: String, password: String, email: String)
        -> Result<User, ServiceError>
    {
        info!("Registering new user");
        let inserted = self
            .user_repo
            .insert(username, password, email, Role::Customer)
            .await;
        match &inserted {
            Ok(_) => info!("User registered successfully"),
            Err(e) => error!("Failed to register user: {e}"),
        }
        Ok(inserted?)
    }

    #[instrument(skip(self, password), fields(username = %username))]
    async fn login(&self, username: &str, password: &str) -> Result<User, ServiceError> {
        info!("User login attempt");
        match self.user_repo.find_by_credentials(username, password).await {
            Some(user) => {
                info!(role = %user.role, "User logged in successfully");
                Ok(user)
            }
            None => {
                error!("Invalid credentials for user: {}", username);
                Err(ServiceError::InvalidCredentials)
            }
        }
    }

    #[instrument(skip(self, password), fields(username = %username))]
    async fn create_admin(&self, username: String, password: String, email: String)
        -> Result<User, ServiceError>
    {
        info!("Creating admin user");
        Ok(self
            .user_repo
            .insert(username, password, email, Role::Admin)
            .await?)
    }
}
