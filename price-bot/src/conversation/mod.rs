//! The price conversation: one call to [`Conversation::handle`] per inbound text.
//!
//! Commands are checked first; otherwise the text is validated against the field the user's
//! [`ConversationState`] is waiting for. A valid margin triggers a calculation with a freshly
//! fetched exchange rate. Every reply carries the main keyboard.

mod calc;
mod commands;
mod input;
pub mod messages;

use std::sync::Arc;

use dbot_core::ReplyKeyboard;
use exchange_rate::ExchangeRateProvider;
use tracing::{debug, info, instrument};

use crate::session::{ConversationState, SessionField, SessionStore, UserSession};

pub use calc::{ItemDetails, PriceBreakdown};
pub use commands::Command;
pub use input::{parse_non_negative, parse_number, parse_positive, parse_price, Field, InputError};
pub use messages::main_keyboard;

/// Reply text plus the keyboard the transport should render with it.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundReply {
    pub text: String,
    pub keyboard: ReplyKeyboard,
}

impl OutboundReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: main_keyboard(),
        }
    }
}

/// Per-user price conversation over an injected session store and rate provider.
#[derive(Clone)]
pub struct Conversation {
    store: Arc<dyn SessionStore>,
    rates: Arc<dyn ExchangeRateProvider>,
}

impl Conversation {
    pub fn new(store: Arc<dyn SessionStore>, rates: Arc<dyn ExchangeRateProvider>) -> Self {
        Self { store, rates }
    }

    /// Processes one message from `user_id` and returns the reply. Never fails: invalid input is
    /// answered with a re-prompt and a failed rate lookup is covered by the provider's fallback.
    #[instrument(skip(self, text))]
    pub async fn handle(&self, user_id: i64, text: &str) -> OutboundReply {
        let command = Command::parse(text);

        let session = match self.store.get(user_id).await {
            Some(session) => session,
            None => {
                self.store.reset(user_id).await;
                if command.is_none() {
                    info!(user_id, "New user, sending greeting");
                    return OutboundReply::new(messages::GREETING);
                }
                UserSession::default()
            }
        };

        match command {
            Some(command) => self.run_command(user_id, command, &session).await,
            None => self.step(user_id, &session, text).await,
        }
    }

    async fn run_command(&self, user_id: i64, command: Command, session: &UserSession) -> OutboundReply {
        info!(user_id, command = command.name(), "Command received");
        match command {
            Command::Start => {
                self.store.reset(user_id).await;
                OutboundReply::new(messages::GREETING)
            }
            Command::NewItem => {
                self.store.reset(user_id).await;
                OutboundReply::new(messages::prompt(Field::Price))
            }
            Command::RecomputeMargin => {
                if session.item().is_none() {
                    return OutboundReply::new(messages::NEED_ITEM_FIRST);
                }
                self.store
                    .set(user_id, SessionField::AwaitingMargin(true))
                    .await;
                OutboundReply::new(messages::RECOMPUTE_PROMPT)
            }
            Command::Rate => {
                let rate = self.rates.fetch_rate().await;
                OutboundReply::new(messages::current_rate(rate))
            }
        }
    }

    async fn step(&self, user_id: i64, session: &UserSession, text: &str) -> OutboundReply {
        let state = ConversationState::of(session);
        let field = state.field();

        let value = match field.parse(text) {
            Ok(value) => value,
            Err(error) => {
                debug!(user_id, state = state.name(), error = %error, "Input rejected");
                return OutboundReply::new(messages::invalid_input(field, error));
            }
        };

        let update = match state {
            ConversationState::AwaitingPrice => SessionField::Price(value),
            ConversationState::AwaitingWeight { .. } => SessionField::Weight(value),
            ConversationState::AwaitingDelivery { .. } => SessionField::DeliveryPerKg(value),
            ConversationState::AwaitingMargin { item, recompute } => {
                if recompute {
                    self.store
                        .set(user_id, SessionField::AwaitingMargin(false))
                        .await;
                }
                return self.calculate(user_id, item, value).await;
            }
        };

        self.store.set(user_id, update).await;
        debug!(user_id, field = field.name(), value, "Field stored");
        OutboundReply::new(messages::prompt(field.next()))
    }

    async fn calculate(&self, user_id: i64, item: ItemDetails, margin: f64) -> OutboundReply {
        let rate = self.rates.fetch_rate().await;
        let breakdown = PriceBreakdown::compute(item, rate, margin);
        info!(
            user_id,
            price_cny = breakdown.price_cny,
            rate = breakdown.rate,
            margin = breakdown.margin,
            total = breakdown.total,
            profit = breakdown.profit,
            "Price computed"
        );
        OutboundReply::new(format!("{}\n\n{}", breakdown, messages::RECOMPUTE_HINT))
    }
}
