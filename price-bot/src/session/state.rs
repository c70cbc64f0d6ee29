//! Explicit conversation state.
//!
//! The state is never stored; it is derived from which [`UserSession`] fields are set, so the
//! record stays the single source of truth. Transitions (each step only on valid input):
//!
//! | state              | input accepted      | next state          |
//! |--------------------|---------------------|---------------------|
//! | `AwaitingPrice`    | digits only         | `AwaitingWeight`    |
//! | `AwaitingWeight`   | number > 0          | `AwaitingDelivery`  |
//! | `AwaitingDelivery` | number >= 0         | `AwaitingMargin`    |
//! | `AwaitingMargin`   | number >= 0         | `AwaitingMargin` (after computing) |
//!
//! Commands ("New item", "Recompute margin", `/start`) act before this table is consulted.

use super::UserSession;
use crate::conversation::{Field, ItemDetails};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversationState {
    AwaitingPrice,
    AwaitingWeight { price: f64 },
    AwaitingDelivery { price: f64, weight: f64 },
    /// All item details known; the next valid number is a margin and triggers a calculation.
    /// `recompute` is true when the user asked to recompute via the command.
    AwaitingMargin { item: ItemDetails, recompute: bool },
}

impl ConversationState {
    pub fn of(session: &UserSession) -> Self {
        if let Some(item) = session.item() {
            return Self::AwaitingMargin {
                item,
                recompute: session.awaiting_margin,
            };
        }
        match (session.price, session.weight) {
            (Some(price), Some(weight)) => Self::AwaitingDelivery { price, weight },
            (Some(price), None) => Self::AwaitingWeight { price },
            _ => Self::AwaitingPrice,
        }
    }

    /// The field this state is waiting for.
    pub fn field(&self) -> Field {
        match self {
            Self::AwaitingPrice => Field::Price,
            Self::AwaitingWeight { .. } => Field::Weight,
            Self::AwaitingDelivery { .. } => Field::DeliveryPerKg,
            Self::AwaitingMargin { .. } => Field::Margin,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AwaitingPrice => "awaiting_price",
            Self::AwaitingWeight { .. } => "awaiting_weight",
            Self::AwaitingDelivery { .. } => "awaiting_delivery",
            Self::AwaitingMargin { recompute: true, .. } => "awaiting_margin_recompute",
            Self::AwaitingMargin { .. } => "awaiting_margin",
        }
    }
}
