//! End-to-end turn scenarios against the full engine stack.

use std::sync::Arc;

use kindbite_session::{ChatSession, FixedClock, SessionConfig, SessionState};
use kindbite_types::FoodListing;

fn listing(name: &str, rating: f64, price: f64) -> FoodListing {
    FoodListing::new(name, "Green Fork", "Meals", rating, price)
}

fn session_with(listings: Vec<FoodListing>) -> ChatSession {
    ChatSession::new(SessionConfig::new().without_thinking_delay())
        .with_clock(Arc::new(FixedClock::at_hour(9)))
        .with_listings(listings)
}

#[tokio::test]
async fn greeting_with_empty_listings_reports_zero_and_no_free_clause() {
    let mut session = session_with(Vec::new());
    session.open();

    let reply = session.submit("hi").await.unwrap();
    assert!(reply.text.starts_with("Good morning"));
    assert!(reply.text.contains("0 delicious items"));
    assert!(!reply.text.contains("completely free"));
}

#[tokio::test]
async fn food_search_reports_live_counts() {
    let mut listings = Vec::new();
    for i in 0..10 {
        let price = if i < 4 { 0.0 } else { 3.0 };
        listings.push(listing(&format!("Dish {i}"), 4.2, price));
    }
    let mut session = session_with(listings);
    session.open();

    let reply = session.submit("what food is available?").await.unwrap();
    assert!(reply.text.contains("10 amazing food items"));
    assert!(reply.text.contains("4 are completely free"));
    assert!(reply.text.contains("40%"));
}

#[tokio::test]
async fn reservation_with_no_stock_is_apologetic() {
    let mut session = session_with(Vec::new());
    session.open();

    let reply = session.submit("I want to reserve something").await.unwrap();
    assert!(reply.text.contains("no food available at the moment"));
    assert!(!reply.text.contains("1. Browse"));
}

#[tokio::test]
async fn stale_snapshot_can_be_replaced_between_turns() {
    let mut session = session_with(Vec::new());
    session.open();

    let before = session.submit("anything for free?").await.unwrap();
    assert!(before.text.contains("0 items are completely free"));

    session.update_listings(vec![listing("Bagels", 4.1, 0.0)]);
    let after = session.submit("anything for free?").await.unwrap();
    assert!(after.text.contains("1 items are completely free"));
}

#[tokio::test]
async fn memory_window_stays_bounded_over_a_long_session() {
    let mut session = session_with(Vec::new());
    session.open();

    // 15 turns append 30 memory entries; the bound is 20.
    for i in 0..15 {
        session.submit(&format!("turn number {i}")).await.unwrap();
    }
    assert_eq!(session.memory().len(), 20);
    assert_eq!(session.state(), SessionState::Ready);
}

#[tokio::test]
async fn greeting_shifts_once_the_conversation_is_established() {
    let mut session = session_with(vec![listing("Bagels", 4.1, 0.0)]);
    session.open();

    let first = session.submit("hello").await.unwrap();
    assert!(first.text.contains("Welcome to KindBite"));

    // Build up history past the returning threshold.
    for _ in 0..3 {
        session.submit("show me the menu").await.unwrap();
    }
    let later = session.submit("hello").await.unwrap();
    assert!(later.text.contains("Great to see you again"));
}
