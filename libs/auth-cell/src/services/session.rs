// libs/auth-cell/src/services/session.rs
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

use shared_config::AppConfig;
use shared_database::KeyValueStore;
use shared_models::auth::User;

use crate::models::{admin_user, AuthError, LoginRequest};

pub const SESSION_KEY: &str = "user";

/// Fixed-credential login with the signed-in user mirrored to the store.
pub struct SessionService {
    store: Arc<dyn KeyValueStore>,
    config: Arc<AppConfig>,
    current: RwLock<Option<User>>,
}

impl SessionService {
    pub fn new(store: Arc<dyn KeyValueStore>, config: Arc<AppConfig>) -> Self {
        Self {
            store,
            config,
            current: RwLock::new(None),
        }
    }

    pub fn login(&self, request: &LoginRequest) -> Result<User, AuthError> {
        debug!("Login attempt for {}", request.email);

        request.validate()?;

        if request.email != self.config.admin_email || request.password != self.config.admin_password {
            warn!("Rejected login for {}", request.email);
            return Err(AuthError::InvalidCredentials);
        }

        let user = admin_user(&request.email);
        let raw = serde_json::to_string(&user).map_err(|e| AuthError::StorageError(e.to_string()))?;
        self.store
            .set(SESSION_KEY, &raw)
            .map_err(|e| AuthError::StorageError(format!("{:#}", e)))?;
        self.set_current(Some(user.clone()))?;

        info!("User {} signed in", user.email);
        Ok(user)
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        self.set_current(None)?;
        self.store
            .remove(SESSION_KEY)
            .map_err(|e| AuthError::StorageError(format!("{:#}", e)))?;

        info!("User signed out");
        Ok(())
    }

    /// Picks up a stored session. An unreadable record is removed and the
    /// session starts signed out.
    pub fn restore(&self) -> Result<Option<User>, AuthError> {
        debug!("Restoring session");

        let raw = self
            .store
            .get(SESSION_KEY)
            .map_err(|e| AuthError::StorageError(format!("{:#}", e)))?;

        let user = match raw {
            None => None,
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("Failed to parse stored user, clearing session: {}", e);
                    self.store
                        .remove(SESSION_KEY)
                        .map_err(|e| AuthError::StorageError(format!("{:#}", e)))?;
                    None
                }
            },
        };

        if let Some(user) = &user {
            info!("Restored session for {}", user.email);
        }
        self.set_current(user.clone())?;
        Ok(user)
    }

    pub fn current_user(&self) -> Option<User> {
        self.current
            .read()
            .map(|current| current.clone())
            .unwrap_or(None)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    fn set_current(&self, user: Option<User>) -> Result<(), AuthError> {
        let mut current = self
            .current
            .write()
            .map_err(|_| AuthError::StorageError("Session lock poisoned".to_string()))?;
        *current = user;
        Ok(())
    }
}
