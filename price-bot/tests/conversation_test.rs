//! Conversation flow tests: commands, per-field validation, and the price calculation.
//!
//! Uses an in-memory session store and a fixed 12.9 rate (the fallback value), so every
//! expected number is deterministic.

mod common;

use common::conversation_at;
use price_bot::conversation::messages::{GREETING, NEED_ITEM_FIRST, RECOMPUTE_PROMPT};
use price_bot::{main_keyboard, Conversation, SessionStore, UserSession};

const USER: i64 = 1001;

/// Sends `inputs` in order and returns the last reply text.
async fn send_all(conversation: &Conversation, user_id: i64, inputs: &[&str]) -> String {
    let mut last = String::new();
    for input in inputs {
        last = conversation.handle(user_id, input).await.text;
    }
    last
}

/// Brings USER to the point where a margin is expected: 550 CNY, 0.8 kg, 1000 per kg.
async fn enter_item(conversation: &Conversation) {
    send_all(conversation, USER, &["New item", "550", "0.8", "1000"]).await;
}

#[tokio::test]
async fn test_first_contact_greets_and_expects_price() {
    let (conversation, store, _) = conversation_at(12.9);

    let reply = conversation.handle(USER, "hello").await;

    assert_eq!(reply.text, GREETING);
    assert_eq!(store.get(USER).await, Some(UserSession::default()));

    let reply = conversation.handle(USER, "550").await;
    assert_eq!(reply.text, "Enter the item weight in kg (e.g. 0.8):");
    assert_eq!(store.get(USER).await.unwrap().price, Some(550.0));
}

/// **Scenario:** 550 → 0.8 → 1000 → 25 at rate 12.9 → 7095 / 800 / 7895 / 9869 / 1974.
#[tokio::test]
async fn test_full_flow_reference_scenario() {
    let (conversation, store, rates) = conversation_at(12.9);

    assert_eq!(
        conversation.handle(USER, "New item").await.text,
        "Enter the item price in CNY (e.g. 550):"
    );
    assert_eq!(
        conversation.handle(USER, "550").await.text,
        "Enter the item weight in kg (e.g. 0.8):"
    );
    assert_eq!(
        conversation.handle(USER, "0.8").await.text,
        "Enter the delivery cost per 1 kg (e.g. 1000):"
    );
    assert_eq!(
        conversation.handle(USER, "1000").await.text,
        "Enter your margin percentage (e.g. 25):"
    );

    let reply = conversation.handle(USER, "25").await.text;

    assert!(reply.contains("550 ¥ × 12.90 ₽ = 7095 ₽"), "{}", reply);
    assert!(reply.contains("0.8 kg × 1000 ₽ = 800 ₽"), "{}", reply);
    assert!(reply.contains("Total without margin: 7895 ₽"), "{}", reply);
    assert!(reply.contains("With 25% margin: 9869 ₽"), "{}", reply);
    assert!(reply.contains("Your profit: 1974 ₽"), "{}", reply);
    assert!(reply.contains("Recompute margin"), "{}", reply);
    assert_eq!(rates.calls(), 1);

    // Margin is not stored; the item stays ready for another margin.
    let session = store.get(USER).await.unwrap();
    assert_eq!(session.price, Some(550.0));
    assert_eq!(session.weight, Some(0.8));
    assert_eq!(session.delivery_per_kg, Some(1000.0));
    assert!(!session.awaiting_margin);
}

#[tokio::test]
async fn test_next_number_after_result_recomputes() {
    let (conversation, _, rates) = conversation_at(12.9);
    enter_item(&conversation).await;
    conversation.handle(USER, "25").await;

    let reply = conversation.handle(USER, "0").await.text;

    assert!(reply.contains("With 0% margin: 7895 ₽"), "{}", reply);
    assert!(reply.contains("Your profit: 0 ₽"), "{}", reply);
    assert_eq!(rates.calls(), 2);
}

#[tokio::test]
async fn test_every_reply_carries_main_keyboard() {
    let (conversation, _, _) = conversation_at(12.9);
    for input in ["hi", "New item", "abc", "550", "0", "0.8", "1000", "25", "/rate", "Recompute margin"] {
        let reply = conversation.handle(USER, input).await;
        assert_eq!(reply.keyboard, main_keyboard(), "input {:?}", input);
    }
}

#[tokio::test]
async fn test_price_accepts_only_digit_strings() {
    let (conversation, store, _) = conversation_at(12.9);

    for rejected in ["550.5", "-5", "+5", "1e3", "5 50", "cheap", "0.0"] {
        conversation.handle(USER, "New item").await;
        let reply = conversation.handle(USER, rejected).await.text;
        assert_eq!(reply, "Please send only a number: the price in CNY.", "input {:?}", rejected);
        assert_eq!(store.get(USER).await.unwrap().price, None, "input {:?}", rejected);
    }

    for accepted in ["0", "1", "550", "0042", "123456789"] {
        conversation.handle(USER, "New item").await;
        conversation.handle(USER, accepted).await;
        assert_eq!(
            store.get(USER).await.unwrap().price,
            Some(accepted.parse::<f64>().unwrap()),
            "input {:?}",
            accepted
        );
    }
}

#[tokio::test]
async fn test_price_out_of_range_gets_its_own_reply() {
    let (conversation, store, _) = conversation_at(12.9);
    conversation.handle(USER, "New item").await;

    let reply = conversation.handle(USER, &"1".repeat(320)).await.text;

    assert_eq!(reply, "That price is too large. Send a smaller number.");
    assert_eq!(store.get(USER).await.unwrap().price, None);
}

/// **Scenario:** weight "0" is rejected with a re-prompt; weight stays unset.
#[tokio::test]
async fn test_zero_weight_rejected() {
    let (conversation, store, _) = conversation_at(12.9);
    send_all(&conversation, USER, &["New item", "550"]).await;

    let reply = conversation.handle(USER, "0").await.text;

    assert_eq!(reply, "Weight must be greater than 0. Try again.");
    let session = store.get(USER).await.unwrap();
    assert_eq!(session.price, Some(550.0));
    assert_eq!(session.weight, None);
}

#[tokio::test]
async fn test_weight_validation_messages() {
    let (conversation, store, _) = conversation_at(12.9);
    send_all(&conversation, USER, &["New item", "550"]).await;

    assert_eq!(
        conversation.handle(USER, "light").await.text,
        "Please send a number for the weight."
    );
    assert_eq!(
        conversation.handle(USER, "-0.5").await.text,
        "Weight must be greater than 0. Try again."
    );
    assert_eq!(
        conversation.handle(USER, "inf").await.text,
        "Please send a number for the weight."
    );
    assert_eq!(store.get(USER).await.unwrap().weight, None);

    conversation.handle(USER, "1.25").await;
    assert_eq!(store.get(USER).await.unwrap().weight, Some(1.25));
}

#[tokio::test]
async fn test_delivery_allows_zero_rejects_negative() {
    let (conversation, store, _) = conversation_at(12.9);
    send_all(&conversation, USER, &["New item", "550", "0.8"]).await;

    assert_eq!(
        conversation.handle(USER, "-1").await.text,
        "Delivery cost must be >= 0. Try again."
    );
    assert_eq!(
        conversation.handle(USER, "free").await.text,
        "Please send a number for the delivery cost."
    );
    assert_eq!(store.get(USER).await.unwrap().delivery_per_kg, None);

    conversation.handle(USER, "0").await;
    assert_eq!(store.get(USER).await.unwrap().delivery_per_kg, Some(0.0));
}

#[tokio::test]
async fn test_margin_validation_does_not_compute() {
    let (conversation, _, rates) = conversation_at(12.9);
    enter_item(&conversation).await;

    assert_eq!(
        conversation.handle(USER, "-5").await.text,
        "Margin percentage must be >= 0. Try again."
    );
    assert_eq!(
        conversation.handle(USER, "lots").await.text,
        "Please send a number for the margin percentage."
    );
    assert_eq!(rates.calls(), 0);
}

#[tokio::test]
async fn test_new_item_resets_from_any_state() {
    let (conversation, store, _) = conversation_at(12.9);

    for prefix in [&["550"][..], &["550", "0.8"][..], &["550", "0.8", "1000"][..]] {
        conversation.handle(USER, "New item").await;
        send_all(&conversation, USER, prefix).await;

        let reply = conversation.handle(USER, "New item").await.text;

        assert_eq!(reply, "Enter the item price in CNY (e.g. 550):");
        assert!(store.get(USER).await.unwrap().is_empty());
    }

    enter_item(&conversation).await;
    conversation.handle(USER, "Recompute margin").await;
    conversation.handle(USER, "New item").await;
    assert!(store.get(USER).await.unwrap().is_empty());
}

/// **Scenario:** "Recompute margin" before any item → rejection, no state change.
#[tokio::test]
async fn test_recompute_before_item_is_rejected() {
    let (conversation, store, _) = conversation_at(12.9);

    let reply = conversation.handle(USER, "Recompute margin").await.text;

    assert_eq!(reply, NEED_ITEM_FIRST);
    assert_eq!(store.get(USER).await, Some(UserSession::default()));
}

#[tokio::test]
async fn test_recompute_with_partial_item_is_rejected() {
    let (conversation, store, _) = conversation_at(12.9);
    send_all(&conversation, USER, &["New item", "550", "0.8"]).await;

    let reply = conversation.handle(USER, "Recompute margin").await.text;

    assert_eq!(reply, NEED_ITEM_FIRST);
    let session = store.get(USER).await.unwrap();
    assert!(!session.awaiting_margin);
    assert_eq!(session.delivery_per_kg, None);
}

#[tokio::test]
async fn test_recompute_margin_flow() {
    let (conversation, store, _) = conversation_at(12.9);
    enter_item(&conversation).await;
    conversation.handle(USER, "25").await;

    assert_eq!(conversation.handle(USER, "Recompute margin").await.text, RECOMPUTE_PROMPT);
    assert!(store.get(USER).await.unwrap().awaiting_margin);

    // A rejected margin keeps the flag.
    conversation.handle(USER, "-10").await;
    assert!(store.get(USER).await.unwrap().awaiting_margin);

    let reply = conversation.handle(USER, "40").await.text;

    assert!(reply.contains("With 40% margin: 11053 ₽"), "{}", reply);
    assert!(reply.contains("Your profit: 3158 ₽"), "{}", reply);
    let session = store.get(USER).await.unwrap();
    assert!(!session.awaiting_margin);
    assert_eq!(session.price, Some(550.0));
}

#[tokio::test]
async fn test_rate_query_leaves_session_untouched() {
    let (conversation, store, rates) = conversation_at(12.9);
    send_all(&conversation, USER, &["New item", "550"]).await;
    let before = store.get(USER).await;

    let reply = conversation.handle(USER, "/rate").await.text;

    assert_eq!(reply, "Current rate CNY → RUB: 12.90");
    assert_eq!(store.get(USER).await, before);
    assert_eq!(rates.calls(), 1);

    // Still waiting for the weight.
    assert_eq!(
        conversation.handle(USER, "0.8").await.text,
        "Enter the delivery cost per 1 kg (e.g. 1000):"
    );
}

#[tokio::test]
async fn test_rate_query_on_first_contact() {
    let (conversation, _, _) = conversation_at(11.274);

    let reply = conversation.handle(USER, "/rate@poizon_price_bot").await.text;

    assert_eq!(reply, "Current rate CNY → RUB: 11.27");
}

#[tokio::test]
async fn test_start_resets_and_greets() {
    let (conversation, store, _) = conversation_at(12.9);
    send_all(&conversation, USER, &["New item", "550", "0.8"]).await;

    let reply = conversation.handle(USER, "/start").await.text;

    assert_eq!(reply, GREETING);
    assert!(store.get(USER).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_start_with_payload_resets_and_greets() {
    let (conversation, store, _) = conversation_at(12.9);
    send_all(&conversation, USER, &["New item", "550"]).await;

    let reply = conversation.handle(USER, "/start ref_42").await.text;

    assert_eq!(reply, GREETING);
    assert!(store.get(USER).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_users_do_not_share_sessions() {
    let (conversation, store, _) = conversation_at(12.9);
    let other = USER + 1;

    conversation.handle(USER, "New item").await;
    conversation.handle(other, "New item").await;
    conversation.handle(USER, "550").await;
    conversation.handle(other, "120").await;
    conversation.handle(USER, "0.8").await;

    let mine = store.get(USER).await.unwrap();
    let theirs = store.get(other).await.unwrap();
    assert_eq!((mine.price, mine.weight), (Some(550.0), Some(0.8)));
    assert_eq!((theirs.price, theirs.weight), (Some(120.0), None));
}
