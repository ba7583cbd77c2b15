use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::task;

use crate::local_storage::CoreLocalStorage;
use crate::local_storage::slot_tables::SESSION_SLOT;
use crate::models::user::{NewUser, Role, User};

/// The fixed demo accounts embedded at build time. Authentication never
/// consults anything else.
struct DemoAccount {
    id: &'static str,
    email: &'static str,
    password: &'static str,
    name: &'static str,
    role: Role,
}

const DEMO_ACCOUNTS: [DemoAccount; 4] = [
    DemoAccount {
        id: "1",
        email: "admin@logistics.com",
        password: "admin123",
        name: "Admin User",
        role: Role::Admin,
    },
    DemoAccount {
        id: "2",
        email: "worker@logistics.com",
        password: "worker123",
        name: "Worker User",
        role: Role::Worker,
    },
    DemoAccount {
        id: "3",
        email: "customer@example.com",
        password: "customer123",
        name: "Customer User",
        role: Role::Customer,
    },
    DemoAccount {
        id: "4",
        email: "deliverer@example.com",
        password: "delivery123",
        name: "Deliverer User",
        role: Role::Deliverer,
    },
];

impl DemoAccount {
    fn to_user(&self) -> User {
        User {
            id: self.id.to_string(),
            email: self.email.to_string(),
            name: self.name.to_string(),
            role: self.role,
        }
    }
}

/// Holds the current authenticated user, if any, and persists the
/// signed-in identity (never the password) to the session slot.
///
/// The session is in exactly one of two states, anonymous or
/// authenticated; `login`/`register` move it forward, `logout` moves it
/// back. There is no expiry.
pub struct AuthService {
    storage: Arc<CoreLocalStorage>,
    current: Option<User>,
}

impl AuthService {
    /// Restore the persisted session, if any. A missing, unreadable or
    /// unparsable slot leaves the session anonymous.
    pub async fn load(storage: Arc<CoreLocalStorage>) -> Self {
        let reader = Arc::clone(&storage);
        let current = task::spawn_blocking(move || match reader.read_slot(SESSION_SLOT) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    tracing::warn!(%err, "stored session failed to parse");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::error!(%err, "failed to read stored session");
                None
            }
        })
        .await
        .unwrap_or_else(|err| {
            tracing::error!(%err, "session restore task failed");
            None
        });

        AuthService { storage, current }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Case-insensitive email match plus exact password match against
    /// the demo account table. The failure is uniform: an unknown email
    /// and a wrong password are indistinguishable to the caller.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let account = DEMO_ACCOUNTS
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email) && a.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        let user = account.to_user();
        self.persist_session(&user).await;
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Clear the persisted and in-memory session.
    pub async fn logout(&mut self) {
        let storage = Arc::clone(&self.storage);
        match task::spawn_blocking(move || storage.delete_slot(SESSION_SLOT)).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => tracing::error!(%err, "failed to clear stored session"),
            Err(err) => tracing::error!(%err, "session clear task failed"),
        }

        self.current = None;
    }

    /// Demo registration: no uniqueness check against the account table
    /// and no credential persistence. The password is discarded and the
    /// new identity is signed in immediately.
    pub async fn register(&mut self, draft: NewUser) -> User {
        let user = User {
            id: format!("user-{}", Utc::now().timestamp_millis()),
            email: draft.email,
            name: draft.name,
            role: draft.role,
        };

        self.persist_session(&user).await;
        self.current = Some(user.clone());
        user
    }

    async fn persist_session(&self, user: &User) {
        let json = match serde_json::to_string(user) {
            Ok(json) => json,
            Err(err) => {
                tracing::error!(%err, "failed to serialize session");
                return;
            }
        };

        let storage = Arc::clone(&self.storage);
        match task::spawn_blocking(move || storage.write_slot(SESSION_SLOT, &json)).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => tracing::error!(%err, "failed to persist session"),
            Err(err) => tracing::error!(%err, "session persist task failed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
}
