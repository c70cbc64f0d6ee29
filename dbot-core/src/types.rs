//! Core types: sender, chat, inbound message, handler response, and the Handler trait.

use async_trait::async_trait;

/// Who sent a message. `username` is only used for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
}

/// Where replies go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
}

/// An inbound text message. `content` is empty when the transport had no text.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
}

/// Handler result for the chain. `Reply(text)` carries the response body so earlier handlers see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach the text that was sent back.
    Reply(String),
}

pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// One stage of the chain: before → handle until Stop/Reply → after (reverse order).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Return false to stop the chain before any handle() runs.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }

    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }

    /// Sees the final response, including a Reply produced by a later handler.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
