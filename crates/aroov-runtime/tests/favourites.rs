use aroov_client::{GatewayError, Method};
use aroov_runtime::render::placeholder;
use aroov_runtime::{
    Anchor, Document, FavouriteToggle, FavouritesController, ListController, LoadOutcome,
    RemoveOutcome, ToggleOutcome, ToggleTarget, UiConfig,
};
use aroov_testing::fixtures::{Harness, destination_json, fast_ui, liked_destination_json, page_json};
use aroov_types::{DestinationId, FilterPatch};
use serde_json::{Value, json};
use std::rc::Rc;

async fn explore_with_cards(h: &Harness) -> Rc<ListController> {
    h.gateway.ok(
        Method::Get,
        "/api/destinations?page=1",
        page_json(
            vec![
                destination_json(1, "Penang Hill"),
                liked_destination_json(2, "Langkawi"),
            ],
            1,
        ),
    );
    let list = Rc::new(ListController::new(h.ctx.clone()));
    list.reload().await;
    list
}

#[tokio::test]
async fn test_toggle_success_keeps_new_state() {
    let h = Harness::explore();
    let list = explore_with_cards(&h).await;
    let toggle = FavouriteToggle::new(h.ctx.api.clone(), Rc::clone(&list));
    h.gateway.ok(Method::Post, "/api/user/favourites", Value::Null);

    let id = DestinationId::from(1);
    let outcome = toggle.toggle(&id).await;

    assert_eq!(outcome, ToggleOutcome::Confirmed { liked: true });
    assert_eq!(list.liked(&id), Some(true));
    let post = &h.gateway.requests()[1];
    assert_eq!(post.body, Some(json!({"destinationId": 1})));
    assert!(
        h.document()
            .html(Anchor::DestGrid)
            .unwrap()
            .contains(r#"class="icon-btn heart-btn liked" data-action="favourite" data-card="card-1""#)
    );
}

#[tokio::test]
async fn test_unliking_sends_delete() {
    let h = Harness::explore();
    let list = explore_with_cards(&h).await;
    let toggle = FavouriteToggle::new(h.ctx.api.clone(), Rc::clone(&list));
    h.gateway.ok(Method::Delete, "/api/user/favourites/2", Value::Null);

    let outcome = toggle.toggle(&DestinationId::from(2)).await;

    assert_eq!(outcome, ToggleOutcome::Confirmed { liked: false });
    assert_eq!(h.gateway.count(Method::Delete, "/api/user/favourites/2"), 1);
}

#[tokio::test]
async fn test_toggle_failure_rolls_back_silently() {
    let h = Harness::explore();
    let list = explore_with_cards(&h).await;
    let toggle = FavouriteToggle::new(h.ctx.api.clone(), Rc::clone(&list));
    h.gateway.fail(Method::Post, "/api/user/favourites", 500, Value::Null);

    let id = DestinationId::from(1);
    let outcome = toggle.toggle(&id).await;

    assert_eq!(outcome, ToggleOutcome::RolledBack { liked: false });
    assert_eq!(list.liked(&id), Some(false));
    assert!(h.host.alerts().is_empty());
    assert!(!toggle.is_pending(&id));
}

#[tokio::test]
async fn test_card_flips_before_response_arrives() {
    let h = Harness::explore();
    let list = explore_with_cards(&h).await;
    let toggle = FavouriteToggle::new(h.ctx.api.clone(), Rc::clone(&list));
    let gate = h
        .gateway
        .gated(Method::Post, "/api/user/favourites", Ok(Value::Null));

    let id = DestinationId::from(1);
    let pending = toggle.toggle(&id);
    let observe = async {
        let seen = list.liked(&id);
        gate.open();
        seen
    };
    let (outcome, seen_while_pending) = futures::join!(pending, observe);

    assert_eq!(seen_while_pending, Some(true));
    assert_eq!(outcome, ToggleOutcome::Confirmed { liked: true });
}

#[tokio::test]
async fn test_double_click_converges_on_last_intent() {
    let h = Harness::explore();
    let list = explore_with_cards(&h).await;
    let toggle = FavouriteToggle::new(h.ctx.api.clone(), Rc::clone(&list));
    let gate = h
        .gateway
        .gated(Method::Post, "/api/user/favourites", Ok(Value::Null));
    h.gateway
        .ok(Method::Delete, "/api/user/favourites/1", Value::Null);

    let id = DestinationId::from(1);
    let first = toggle.toggle(&id);
    let second = async {
        let outcome = toggle.toggle(&id).await;
        gate.open();
        outcome
    };
    let (first, second) = futures::join!(first, second);

    assert_eq!(second, ToggleOutcome::Queued);
    assert_eq!(first, ToggleOutcome::Confirmed { liked: false });
    assert_eq!(list.liked(&id), Some(false));
    assert_eq!(h.gateway.count(Method::Post, "/api/user/favourites"), 1);
    assert_eq!(h.gateway.count(Method::Delete, "/api/user/favourites/1"), 1);
}

#[tokio::test]
async fn test_double_click_failure_restores_confirmed_state() {
    let h = Harness::explore();
    let list = explore_with_cards(&h).await;
    let toggle = FavouriteToggle::new(h.ctx.api.clone(), Rc::clone(&list));
    let gate = h.gateway.gated(
        Method::Post,
        "/api/user/favourites",
        Ok(Value::Null),
    );
    h.gateway
        .network_error(Method::Delete, "/api/user/favourites/1");

    let id = DestinationId::from(1);
    let first = toggle.toggle(&id);
    let second = async {
        let outcome = toggle.toggle(&id).await;
        gate.open();
        outcome
    };
    let (first, _) = futures::join!(first, second);

    // The add went through, the undo did not: the card shows the server's view.
    assert_eq!(first, ToggleOutcome::RolledBack { liked: true });
    assert_eq!(list.liked(&id), Some(true));
}

#[tokio::test]
async fn test_toggle_unknown_card() {
    let h = Harness::explore();
    let list = explore_with_cards(&h).await;
    let toggle = FavouriteToggle::new(h.ctx.api.clone(), list);

    let outcome = toggle.toggle(&DestinationId::from(99)).await;
    assert_eq!(outcome, ToggleOutcome::NotRendered);
}

#[tokio::test]
async fn test_rollback_keeps_failed_load_visible() {
    let h = Harness::explore();
    let list = explore_with_cards(&h).await;
    let toggle = FavouriteToggle::new(h.ctx.api.clone(), Rc::clone(&list));
    let gate = h.gateway.gated(
        Method::Post,
        "/api/user/favourites",
        Err(GatewayError::http(500, None)),
    );
    h.gateway.fail(
        Method::Get,
        "/api/destinations?page=1&search=beach",
        500,
        json!({"error": "db down"}),
    );

    let id = DestinationId::from(1);
    let flip = toggle.toggle(&id);
    let search = async {
        let outcome = list.set_filter(FilterPatch::new().search("beach")).await;
        gate.open();
        outcome
    };
    let (flip, search) = futures::join!(flip, search);

    assert!(matches!(search, LoadOutcome::Failed(_)));
    assert_eq!(flip, ToggleOutcome::RolledBack { liked: false });
    assert_eq!(list.liked(&id), Some(false));
    assert_eq!(
        h.document().html(Anchor::DestGrid).unwrap(),
        placeholder::load_error().into_string()
    );
}

async fn favourites_with(h: &Harness, items: Vec<Value>) -> FavouritesController {
    h.gateway
        .ok(Method::Get, "/api/user/favourites", Value::Array(items));
    let favourites = FavouritesController::new(h.ctx.clone());
    favourites.load().await;
    favourites
}

#[tokio::test]
async fn test_favourites_load_renders_liked_cards() {
    let h = Harness::favourites();
    let favourites = favourites_with(&h, vec![liked_destination_json(1, "Langkawi")]).await;

    let grid = h.document().html(Anchor::FavGrid).unwrap();
    assert!(grid.contains(r#"data-action="remove" data-card="card-1""#));
    assert_eq!(favourites.records().len(), 1);
}

#[tokio::test]
async fn test_favourites_empty_and_error_placeholders() {
    let h = Harness::favourites();
    let favourites = favourites_with(&h, vec![]).await;
    assert!(
        h.document()
            .html(Anchor::FavGrid)
            .unwrap()
            .contains("No favourites yet")
    );

    h.gateway.network_error(Method::Get, "/api/user/favourites");
    assert!(matches!(favourites.load().await, LoadOutcome::Failed(_)));
    assert!(
        h.document()
            .html(Anchor::FavGrid)
            .unwrap()
            .contains("Could not load favourites.")
    );
}

#[tokio::test]
async fn test_remove_drops_card_after_confirmation() {
    let h = Harness::favourites();
    let favourites = favourites_with(
        &h,
        vec![
            liked_destination_json(1, "Langkawi"),
            liked_destination_json(2, "Cameron Highlands"),
        ],
    )
    .await;
    h.gateway
        .ok(Method::Delete, "/api/user/favourites/1", Value::Null);

    let outcome = favourites.remove(&DestinationId::from(1)).await;

    assert_eq!(outcome, RemoveOutcome::Removed);
    assert_eq!(
        h.host.questions(),
        vec!["Remove this trip from your favourites?".to_string()]
    );
    let grid = h.document().html(Anchor::FavGrid).unwrap();
    assert!(!grid.contains("card-1"));
    assert!(grid.contains("card-2"));
}

#[tokio::test]
async fn test_card_is_marked_removing_during_delay() {
    let ui = UiConfig {
        removal_delay_ms: 20,
        ..fast_ui()
    };
    let h = Harness::with_ui(Document::favourites_page(), ui);
    let favourites = favourites_with(
        &h,
        vec![
            liked_destination_json(1, "Langkawi"),
            liked_destination_json(2, "Cameron Highlands"),
        ],
    )
    .await;
    h.gateway
        .ok(Method::Delete, "/api/user/favourites/1", Value::Null);

    let removed_id = DestinationId::from(1);
    let removal = favourites.remove(&removed_id);
    let observe = async {
        // Polled after the removal has reached its delay.
        h.document().html(Anchor::FavGrid).unwrap()
    };
    let (outcome, during) = futures::join!(removal, observe);

    assert_eq!(outcome, RemoveOutcome::Removed);
    assert!(during.contains(r#"<div class="card removing" id="card-1">"#));
}

#[tokio::test]
async fn test_removing_last_card_reloads_empty_state() {
    let h = Harness::favourites();
    let favourites = favourites_with(&h, vec![liked_destination_json(1, "Langkawi")]).await;
    h.gateway
        .ok(Method::Delete, "/api/user/favourites/1", Value::Null);
    h.gateway
        .ok(Method::Get, "/api/user/favourites", json!([]));

    assert_eq!(
        favourites.remove(&DestinationId::from(1)).await,
        RemoveOutcome::Removed
    );
    assert_eq!(h.gateway.count(Method::Get, "/api/user/favourites"), 2);
    assert!(
        h.document()
            .html(Anchor::FavGrid)
            .unwrap()
            .contains("No favourites yet")
    );
}

#[tokio::test]
async fn test_second_remove_while_deleting_is_ignored() {
    let h = Harness::favourites();
    let favourites = favourites_with(
        &h,
        vec![
            liked_destination_json(1, "Langkawi"),
            liked_destination_json(2, "Cameron Highlands"),
        ],
    )
    .await;
    let gate = h
        .gateway
        .gated(Method::Delete, "/api/user/favourites/1", Ok(Value::Null));

    let id = DestinationId::from(1);
    let first = favourites.remove(&id);
    let second = async {
        let outcome = favourites.remove(&id).await;
        gate.open();
        outcome
    };
    let (first, second) = futures::join!(first, second);

    assert_eq!(first, RemoveOutcome::Removed);
    assert_eq!(second, RemoveOutcome::InProgress);
    assert_eq!(h.gateway.count(Method::Delete, "/api/user/favourites/1"), 1);
    assert_eq!(h.host.questions().len(), 1);
    assert!(h.host.alerts().is_empty());
}

#[tokio::test]
async fn test_favourites_rows_with_join_id_decode() {
    let h = Harness::favourites();
    let mut row = liked_destination_json(7, "Langkawi");
    row["id"] = json!(99);
    let favourites = favourites_with(&h, vec![row]).await;

    assert_eq!(favourites.records()[0].id, DestinationId::from(7));
    assert!(h.document().html(Anchor::FavGrid).unwrap().contains(r#"id="card-7""#));
}

#[tokio::test]
async fn test_remove_cancelled_sends_nothing() {
    let h = Harness::favourites();
    let favourites = favourites_with(&h, vec![liked_destination_json(1, "Langkawi")]).await;
    h.host.answer_next(false);

    assert_eq!(
        favourites.remove(&DestinationId::from(1)).await,
        RemoveOutcome::Cancelled
    );
    assert_eq!(h.gateway.count(Method::Delete, "/api/user/favourites"), 0);
}

#[tokio::test]
async fn test_remove_failure_alerts_and_keeps_card() {
    let h = Harness::favourites();
    let favourites = favourites_with(&h, vec![liked_destination_json(1, "Langkawi")]).await;
    h.gateway
        .fail(Method::Delete, "/api/user/favourites/1", 500, Value::Null);

    let outcome = favourites.remove(&DestinationId::from(1)).await;

    assert!(matches!(outcome, RemoveOutcome::Failed(_)));
    assert_eq!(
        h.host.last_alert().as_deref(),
        Some("⚠️ Could not remove. Please try again.")
    );
    assert!(h.document().html(Anchor::FavGrid).unwrap().contains("card-1"));
}

#[tokio::test]
async fn test_remove_network_failure_is_only_logged() {
    let h = Harness::favourites();
    let favourites = favourites_with(&h, vec![liked_destination_json(1, "Langkawi")]).await;
    h.gateway
        .network_error(Method::Delete, "/api/user/favourites/1");

    assert!(matches!(
        favourites.remove(&DestinationId::from(1)).await,
        RemoveOutcome::Failed(_)
    ));
    assert!(h.host.alerts().is_empty());
}
