// ABOUTME: Bounded in-memory session store for profiles, plans, and chat history
// ABOUTME: LRU-evicted map keyed by session id; no durable storage by design
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitMate

//! # Session Store
//!
//! Each interactive session owns a profile, the three plan documents, and
//! its chat history, all living only for the duration of the session. The
//! store is a bounded LRU map (DoS prevention): the least recently used
//! session is evicted when capacity is reached. Modifications are processed
//! one chat turn at a time in submission order; the lock is never held
//! across an external call.

use chrono::{DateTime, Utc};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::llm::ChatMessage;
use crate::models::{PlanSet, Profile};

/// State owned by one interactive session
#[derive(Debug, Clone)]
pub struct Session {
    /// Session identifier
    pub id: Uuid,
    /// The profile the plans were generated from
    pub profile: Profile,
    /// Current plan documents, mutated in place by the patcher
    pub plans: PlanSet,
    /// Full chat history in turn order
    pub history: Vec<ChatMessage>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

/// Snapshot handed to a chat turn so the lock is released before the
/// external call
#[derive(Debug, Clone)]
pub struct TurnContext {
    /// Current plan documents
    pub plans: PlanSet,
    /// Full history up to this turn
    pub history: Vec<ChatMessage>,
}

/// Bounded in-memory session store
pub struct SessionStore {
    sessions: Mutex<LruCache<Uuid, Session>>,
}

impl SessionStore {
    /// Create a store holding at most `capacity` live sessions
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            sessions: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Create a session for a profile with freshly generated plans
    ///
    /// # Errors
    ///
    /// Returns an internal error if the store lock is poisoned.
    pub fn create(&self, profile: Profile, plans: PlanSet) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let session = Session {
            id,
            profile,
            plans,
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.lock()?.put(id, session);
        Ok(id)
    }

    /// Current plan documents for a session
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown or evicted session ids.
    pub fn plans(&self, id: Uuid) -> AppResult<PlanSet> {
        let mut sessions = self.lock()?;
        sessions
            .get(&id)
            .map(|session| session.plans.clone())
            .ok_or_else(|| AppError::not_found("Session"))
    }

    /// Snapshot the state a chat turn needs
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown or evicted session ids.
    pub fn turn_context(&self, id: Uuid) -> AppResult<TurnContext> {
        let mut sessions = self.lock()?;
        sessions
            .get(&id)
            .map(|session| TurnContext {
                plans: session.plans.clone(),
                history: session.history.clone(),
            })
            .ok_or_else(|| AppError::not_found("Session"))
    }

    /// Record a completed chat turn, optionally replacing the plan
    /// documents when the turn applied modifications.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the session was evicted mid-turn.
    pub fn record_turn(
        &self,
        id: Uuid,
        user_message: &str,
        assistant_reply: &str,
        updated_plans: Option<PlanSet>,
    ) -> AppResult<()> {
        let mut sessions = self.lock()?;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Session"))?;

        session.history.push(ChatMessage::user(user_message));
        session.history.push(ChatMessage::assistant(assistant_reply));
        if let Some(plans) = updated_plans {
            session.plans = plans;
        }
        session.updated_at = Utc::now();
        Ok(())
    }

    /// Number of live sessions (for health reporting)
    ///
    /// # Errors
    ///
    /// Returns an internal error if the store lock is poisoned.
    pub fn len(&self) -> AppResult<usize> {
        Ok(self.lock()?.len())
    }

    /// Whether the store holds no sessions
    ///
    /// # Errors
    ///
    /// Returns an internal error if the store lock is poisoned.
    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, LruCache<Uuid, Session>>> {
        self.sessions
            .lock()
            .map_err(|_| AppError::internal("session store lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::{ActivityLevel, Gender, Goal};

    fn profile() -> Profile {
        Profile::new(
            30,
            Gender::Male,
            70.0,
            175.0,
            ActivityLevel::Sedentary,
            Goal::MaintainWeight,
            vec![],
        )
        .unwrap()
    }

    fn plans() -> PlanSet {
        PlanSet {
            workout: "W".to_owned(),
            nutrition: "N".to_owned(),
            schedule: "S".to_owned(),
        }
    }

    #[test]
    fn test_create_and_fetch_plans() {
        let store = SessionStore::new(4);
        let id = store.create(profile(), plans()).unwrap();
        assert_eq!(store.plans(id).unwrap(), plans());
    }

    #[test]
    fn test_unknown_session_is_not_found() {
        let store = SessionStore::new(4);
        let error = store.plans(Uuid::new_v4()).unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::ResourceNotFound);
    }

    #[test]
    fn test_record_turn_appends_history_and_updates_plans() {
        let store = SessionStore::new(4);
        let id = store.create(profile(), plans()).unwrap();

        let updated = PlanSet {
            workout: "W2".to_owned(),
            ..plans()
        };
        store
            .record_turn(id, "change it", "Plan Updated!", Some(updated.clone()))
            .unwrap();

        let context = store.turn_context(id).unwrap();
        assert_eq!(context.history.len(), 2);
        assert_eq!(context.history[0].content, "change it");
        assert_eq!(context.plans, updated);
    }

    #[test]
    fn test_capacity_evicts_least_recently_used() {
        let store = SessionStore::new(2);
        let first = store.create(profile(), plans()).unwrap();
        let second = store.create(profile(), plans()).unwrap();

        // Touch the first session so the second becomes the eviction victim
        store.plans(first).unwrap();
        let third = store.create(profile(), plans()).unwrap();

        assert!(store.plans(first).is_ok());
        assert!(store.plans(second).is_err());
        assert!(store.plans(third).is_ok());
        assert_eq!(store.len().unwrap(), 2);
    }
}
