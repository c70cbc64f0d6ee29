//! Session records and their store.
//!
//! Records live for the lifetime of the process. Each user id owns exactly one record; no record is
//! shared between users, so the store only needs map-level locking.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::conversation::ItemDetails;

/// What the bot knows about a user's current item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSession {
    /// Item price in CNY.
    pub price: Option<f64>,
    /// Weight in kg, > 0.
    pub weight: Option<f64>,
    /// Delivery cost per kg in local currency, >= 0.
    pub delivery_per_kg: Option<f64>,
    /// Set by "Recompute margin"; cleared once a margin is accepted.
    pub awaiting_margin: bool,
}

impl UserSession {
    /// The complete item, once price, weight and delivery are all known.
    pub fn item(&self) -> Option<ItemDetails> {
        Some(ItemDetails {
            price_cny: self.price?,
            weight: self.weight?,
            delivery_per_kg: self.delivery_per_kg?,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply(&mut self, field: SessionField) {
        match field {
            SessionField::Price(v) => self.price = Some(v),
            SessionField::Weight(v) => self.weight = Some(v),
            SessionField::DeliveryPerKg(v) => self.delivery_per_kg = Some(v),
            SessionField::AwaitingMargin(v) => self.awaiting_margin = v,
        }
    }
}

/// A single field update with its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionField {
    Price(f64),
    Weight(f64),
    DeliveryPerKg(f64),
    AwaitingMargin(bool),
}

/// Storage for [`UserSession`]s keyed by user id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Snapshot of the user's record, or None on first contact.
    async fn get(&self, user_id: i64) -> Option<UserSession>;

    /// Replaces the user's record with an empty one (creating it if absent).
    async fn reset(&self, user_id: i64);

    /// Updates one field, creating the record if absent.
    async fn set(&self, user_id: i64, field: SessionField);
}

/// [`SessionStore`] over a `HashMap` behind `Arc<RwLock<_>>`. Cloning shares the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<i64, UserSession>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a record.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: i64) -> Option<UserSession> {
        self.sessions.read().await.get(&user_id).cloned()
    }

    async fn reset(&self, user_id: i64) {
        self.sessions
            .write()
            .await
            .insert(user_id, UserSession::default());
    }

    async fn set(&self, user_id: i64, field: SessionField) {
        self.sessions
            .write()
            .await
            .entry(user_id)
            .or_default()
            .apply(field);
    }
}
