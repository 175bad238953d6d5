// src/store.rs

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::{error::AppError, models::session::AssessmentSession};

/// In-memory registry of live assessment sessions.
///
/// Sessions are keyed by the id handed to the client at creation and owned
/// exclusively by this map; handlers reach them only through `with_session`,
/// which stamps activity and keeps the lock scope free of `.await` points.
/// Cloning the store clones the handle, not the sessions.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, AssessmentSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fresh session and returns its id.
    pub fn insert(&self, session: AssessmentSession) -> Uuid {
        let id = Uuid::new_v4();
        self.lock_write().insert(id, session);
        id
    }

    /// Runs `op` against the session, stamping it as active first.
    /// Unknown ids surface as 404.
    pub fn with_session<T>(
        &self,
        id: Uuid,
        op: impl FnOnce(&mut AssessmentSession) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut sessions = self.lock_write();
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;
        session.touch();
        op(session)
    }

    /// Discards the session, ending its lifecycle.
    pub fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.lock_write()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Session not found".to_string()))
    }

    /// Drops every session idle longer than `ttl`; returns how many went.
    pub fn sweep_expired(&self, ttl: Duration, now: DateTime<Utc>) -> usize {
        let mut sessions = self.lock_write();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(ttl, now));
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("session store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock_write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Uuid, AssessmentSession>> {
        self.inner.write().expect("session store lock poisoned")
    }
}
