use aroov_client::Method;
use aroov_runtime::render::placeholder;
use aroov_runtime::{Anchor, ListController, LoadOutcome};
use aroov_testing::fixtures::{Harness, destination_json, page_json};
use aroov_types::FilterPatch;

const FIRST_PAGE: &str = "/api/destinations?page=1";

fn loaded_list(h: &Harness, total_pages: u32) -> ListController {
    h.gateway.ok(
        Method::Get,
        FIRST_PAGE,
        page_json(
            vec![destination_json(1, "Penang Hill"), destination_json(2, "Batu Ferringhi")],
            total_pages,
        ),
    );
    ListController::new(h.ctx.clone())
}

#[tokio::test]
async fn test_reload_renders_grid_and_pagination() {
    let h = Harness::explore();
    let list = loaded_list(&h, 2);

    let outcome = list.reload().await;

    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            items: 2,
            total_pages: 2
        }
    );
    let grid = h.document().html(Anchor::DestGrid).unwrap();
    assert!(grid.contains(r#"id="card-1""#));
    assert!(grid.contains("Batu Ferringhi"));
    assert!(
        h.document()
            .html(Anchor::Pagination)
            .unwrap()
            .contains(r#"class="page-btn active" data-page="1""#)
    );
    assert_eq!(list.record("card-2").unwrap().name, "Batu Ferringhi");
}

#[tokio::test]
async fn test_stale_response_is_discarded() {
    let h = Harness::explore();
    let list = ListController::new(h.ctx.clone());

    let gate = h.gateway.gated(
        Method::Get,
        "/api/destinations?page=1&search=b",
        Ok(page_json(vec![destination_json(1, "Old Result")], 1)),
    );
    h.gateway.ok(
        Method::Get,
        "/api/destinations?page=1&search=be",
        page_json(vec![destination_json(2, "New Result")], 1),
    );

    let first = list.set_filter(FilterPatch::new().search("b"));
    let second = async {
        let outcome = list.set_filter(FilterPatch::new().search("be")).await;
        gate.open();
        outcome
    };
    let (first, second) = futures::join!(first, second);

    assert_eq!(first, LoadOutcome::Superseded);
    assert!(second.is_applied());

    let grid = h.document().html(Anchor::DestGrid).unwrap();
    assert!(grid.contains("New Result"));
    assert!(!grid.contains("Old Result"));
    assert_eq!(list.query().search, "be");
    assert_eq!(list.result().unwrap().items[0].name, "New Result");
}

#[tokio::test]
async fn test_empty_result_shows_placeholder_without_pages() {
    let h = Harness::explore();
    let list = ListController::new(h.ctx.clone());
    h.gateway.ok(
        Method::Get,
        "/api/destinations?page=1&search=beach",
        page_json(vec![], 1),
    );

    let outcome = list.set_filter(FilterPatch::new().search("beach")).await;

    assert_eq!(outcome, LoadOutcome::Empty);
    let grid = h.document().html(Anchor::DestGrid).unwrap();
    assert_eq!(grid, placeholder::no_results().into_string());
    assert!(grid.contains("No results found"));
    assert_eq!(h.document().html(Anchor::Pagination).unwrap(), "");
    assert_eq!(list.page_count(), 0);
}

#[tokio::test]
async fn test_failure_keeps_previous_result() {
    let h = Harness::explore();
    let list = loaded_list(&h, 1);
    list.reload().await;

    h.gateway.fail(Method::Get, FIRST_PAGE, 500, serde_json::json!({"error": "db down"}));
    let outcome = list.reload().await;

    assert!(matches!(outcome, LoadOutcome::Failed(ref err) if err.status() == Some(500)));
    assert_eq!(
        h.document().html(Anchor::DestGrid).unwrap(),
        placeholder::load_error().into_string()
    );
    assert_eq!(list.result().unwrap().items.len(), 2);
}

#[tokio::test]
async fn test_set_page_out_of_range_is_rejected() {
    let h = Harness::explore();
    let list = loaded_list(&h, 2);
    list.reload().await;
    let sent = h.gateway.requests().len();

    assert_eq!(list.set_page(0).await, LoadOutcome::Rejected);
    assert_eq!(list.set_page(3).await, LoadOutcome::Rejected);
    assert_eq!(h.gateway.requests().len(), sent);
    assert_eq!(list.query().page(), 1);
}

#[tokio::test]
async fn test_set_filter_resets_page() {
    let h = Harness::explore();
    let list = loaded_list(&h, 2);
    list.reload().await;

    h.gateway.ok(
        Method::Get,
        "/api/destinations?page=2",
        page_json(vec![destination_json(3, "Kek Lok Si")], 2),
    );
    assert!(list.set_page(2).await.is_applied());
    assert_eq!(list.query().page(), 2);

    h.gateway.ok(
        Method::Get,
        "/api/destinations?page=1&type=Island",
        page_json(vec![destination_json(4, "Langkawi")], 1),
    );
    let outcome = list
        .set_filter(FilterPatch::new().kind(Some("Island".to_string())))
        .await;

    assert!(outcome.is_applied());
    assert_eq!(list.query().page(), 1);
    assert_eq!(h.gateway.pending(), 0);
}

#[tokio::test]
async fn test_missing_anchor_is_ignored() {
    let h = Harness::favourites();
    let list = loaded_list(&h, 1);

    assert!(list.reload().await.is_applied());
    assert_eq!(h.document().html(Anchor::DestGrid), None);
}
