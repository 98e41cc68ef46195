use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::session::Session;
use crate::error::AppError;

const MAX_SESSIONS: u64 = 1_000;
const IDLE_TTL: Duration = Duration::from_secs(30 * 60);

/// In-memory session store.
///
/// Sessions are transient: they expire after 30 minutes idle (refreshed on
/// access) or when capacity pushes them out. Each entry is independently
/// lockable so two requests for different sessions never contend.
pub struct SessionStore {
    cache: Cache<Uuid, Arc<Mutex<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(MAX_SESSIONS)
                .time_to_idle(IDLE_TTL)
                .build(),
        }
    }

    pub async fn create(&self) -> Arc<Mutex<Session>> {
        let session = Session::new();
        let id = session.id;
        let handle = Arc::new(Mutex::new(session));
        self.cache.insert(id, handle.clone()).await;

        tracing::info!(session_id = %id, "Session created");
        handle
    }

    pub async fn get(&self, id: Uuid) -> Result<Arc<Mutex<Session>>, AppError> {
        self.cache
            .get(&id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("session {id}")))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
