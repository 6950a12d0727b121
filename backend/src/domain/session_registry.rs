use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use shared::User;
use uuid::Uuid;

use crate::domain::models::Session;

/// In-memory map of opaque session tokens to signed-in users
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<String, User>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<String, User>> {
        self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Signing in again replaces the user's earlier session
    pub fn open(&self, user: User) -> Session {
        let token = Uuid::new_v4().to_string();
        let mut sessions = self.sessions();
        sessions.retain(|_, existing| {
            existing.role != user.role || existing.full_name != user.full_name
        });
        sessions.insert(token.clone(), user.clone());
        Session { token, user }
    }

    pub fn get(&self, token: &str) -> Option<Session> {
        self.sessions().get(token).map(|user| Session {
            token: token.to_string(),
            user: user.clone(),
        })
    }

    /// Returns whether the token was live
    pub fn close(&self, token: &str) -> bool {
        self.sessions().remove(token).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
