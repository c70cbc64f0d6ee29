//! Per-user conversation records and the explicit state derived from them.

mod state;
mod store;

pub use state::ConversationState;
pub use store::{InMemorySessionStore, SessionField, SessionStore, UserSession};
