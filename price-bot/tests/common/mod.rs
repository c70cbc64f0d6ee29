//! Shared test doubles: a recording [`Bot`], rate providers, and message builders.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dbot_core::{Bot, Chat, DbotError, Message, ReplyKeyboard, Result, User};
use exchange_rate::ExchangeRateProvider;
use price_bot::{Conversation, InMemorySessionStore};

/// One message the bot sent.
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
    pub keyboard: Option<ReplyKeyboard>,
}

/// Bot that records every send instead of calling Telegram. `failing()` makes every send fail.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentMessage>>,
    fail: bool,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, chat: &Chat, text: &str, keyboard: Option<&ReplyKeyboard>) -> Result<()> {
        if self.fail {
            return Err(DbotError::Bot("network down".to_string()));
        }
        self.sent.lock().unwrap().push(SentMessage {
            chat_id: chat.id,
            text: text.to_string(),
            keyboard: keyboard.cloned(),
        });
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(chat, text, None)
    }

    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> Result<()> {
        self.record(chat, text, Some(keyboard))
    }
}

/// Fixed-rate provider that counts lookups.
pub struct CountingRateProvider {
    rate: f64,
    calls: AtomicUsize,
}

impl CountingRateProvider {
    pub fn new(rate: f64) -> Arc<Self> {
        Arc::new(Self {
            rate,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExchangeRateProvider for CountingRateProvider {
    async fn fetch_rate(&self) -> f64 {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.rate
    }
}

/// Conversation over a fresh store and a counting provider at `rate`.
pub fn conversation_at(rate: f64) -> (Conversation, InMemorySessionStore, Arc<CountingRateProvider>) {
    let store = InMemorySessionStore::new();
    let rates = CountingRateProvider::new(rate);
    let conversation = Conversation::new(Arc::new(store.clone()), rates.clone());
    (conversation, store, rates)
}

pub fn text_message(user_id: i64, content: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: user_id,
            username: Some("buyer".to_string()),
        },
        chat: Chat { id: user_id },
        content: content.to_string(),
    }
}
