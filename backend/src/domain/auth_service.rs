//! # Authentication
//!
//! Sign-in, sessions and password changes.
//!
//! Credentials are checked by a `CredentialVerifier`. The default
//! `SharedPasswordVerifier` knows one fixed administrator account; any
//! other username is looked up in the staff roster (the first staff member
//! whose name contains the username) and checked against the shared staff
//! password, or against the password that staff member last set.
//!
//! Bad credentials are not an error: `login` returns `Ok(None)`.

use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use shared::{Role, User};

use crate::domain::commands::auth::ChangePasswordCommand;
use crate::domain::errors::NotFoundError;
use crate::domain::models::{AccessLog, Session, Staff};
use crate::domain::session_registry::SessionRegistry;
use crate::storage::LeaveStore;

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 4;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PasswordChangeError {
    #[error("New password and confirmation do not match")]
    Mismatch,
    #[error("Password must be at least {0} characters")]
    TooShort(usize),
    #[error("The administrator password cannot be changed here")]
    AdminNotAllowed,
    #[error("You can only change your own password")]
    NotOwnAccount,
}

/// Decides whether a username/password pair signs someone in
pub trait CredentialVerifier: Send + Sync {
    /// `roster` is the current staff list, for staff sign-in
    fn verify(&self, username: &str, password: &str, roster: &[Staff]) -> Option<User>;

    /// Remember a password a staff member just changed
    fn register_password(&self, staff_id: &str, password: &str);
}

#[derive(Debug, Clone)]
pub struct AdminCredential {
    pub username: String,
    pub password: String,
    pub full_name: String,
}

pub struct SharedPasswordVerifier {
    admin: AdminCredential,
    staff_password: String,
    changed: Arc<Mutex<HashMap<String, String>>>,
}

impl SharedPasswordVerifier {
    pub fn new(admin: AdminCredential, staff_password: impl Into<String>) -> Self {
        Self {
            admin,
            staff_password: staff_password.into(),
            changed: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn changed(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.changed.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CredentialVerifier for SharedPasswordVerifier {
    fn verify(&self, username: &str, password: &str, roster: &[Staff]) -> Option<User> {
        let username = username.trim();
        if username.is_empty() {
            return None;
        }

        if username == self.admin.username {
            return (password == self.admin.password).then(|| User {
                username: username.to_string(),
                role: Role::Admin,
                full_name: self.admin.full_name.clone(),
            });
        }

        let staff = roster.iter().find(|s| s.name.contains(username))?;
        let accepted = match self.changed().get(&staff.id) {
            Some(own) => password == own,
            None => password == self.staff_password,
        };

        accepted.then(|| User {
            username: username.to_string(),
            role: Role::User,
            full_name: staff.name.clone(),
        })
    }

    fn register_password(&self, staff_id: &str, password: &str) {
        self.changed().insert(staff_id.to_string(), password.to_string());
    }
}

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn LeaveStore>,
    verifier: Arc<dyn CredentialVerifier>,
    sessions: SessionRegistry,
    min_password_length: usize,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn LeaveStore>,
        verifier: Arc<dyn CredentialVerifier>,
        min_password_length: usize,
    ) -> Self {
        Self {
            store,
            verifier,
            sessions: SessionRegistry::new(),
            min_password_length,
        }
    }

    /// Check credentials and open a session. Every successful sign-in is
    /// appended to the access log; a failed append does not block it.
    pub async fn login(&self, username: &str, password: &str) -> Result<Option<Session>> {
        info!("Login attempt: {}", username);

        let snapshot = self.store.fetch_all().await?;
        let user = match self.verifier.verify(username, password, &snapshot.staff) {
            Some(user) => user,
            None => {
                warn!("Invalid credentials for: {}", username);
                return Ok(None);
            }
        };

        let log = AccessLog::for_user(&user, Utc::now());
        if let Err(e) = self.store.append_access_log(&log).await {
            warn!("Failed to record access log for {}: {:#}", user.username, e);
        }

        let session = self.sessions.open(user);
        info!(
            "Signed in {} ({:?})",
            session.user.full_name, session.user.role
        );
        Ok(Some(session))
    }

    pub fn logout(&self, token: &str) -> bool {
        let closed = self.sessions.close(token);
        if closed {
            info!("Session closed");
        }
        closed
    }

    pub fn resolve(&self, token: &str) -> Option<Session> {
        self.sessions.get(token)
    }

    /// Staff members change their own password; the administrator account
    /// is fixed.
    pub async fn change_password(&self, session: &Session, command: ChangePasswordCommand) -> Result<()> {
        info!("Password change requested by {}", session.user.username);

        if session.is_admin() {
            return Err(PasswordChangeError::AdminNotAllowed.into());
        }
        if command.new_password != command.confirm_password {
            return Err(PasswordChangeError::Mismatch.into());
        }
        if command.new_password.chars().count() < self.min_password_length {
            return Err(PasswordChangeError::TooShort(self.min_password_length).into());
        }

        let snapshot = self.store.fetch_all().await?;
        let staff = snapshot
            .staff
            .iter()
            .find(|s| s.id == command.staff_id)
            .ok_or_else(|| NotFoundError::new("Staff", command.staff_id.as_str()))?;
        if staff.name != session.user.full_name {
            warn!(
                "{} tried to change the password of {}",
                session.user.username, staff.id
            );
            return Err(PasswordChangeError::NotOwnAccount.into());
        }

        self.store
            .change_password(&staff.id, &command.new_password)
            .await?;
        self.verifier.register_password(&staff.id, &command.new_password);

        info!("Password changed for {}", staff.id);
        Ok(())
    }
}
