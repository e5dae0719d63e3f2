use aroov_client::Method;
use aroov_runtime::overlay::COPY_BUTTON;
use aroov_runtime::render::{CardVariant, placeholder};
use aroov_runtime::{
    AddOutcome, Anchor, ButtonTone, Document, GroupsOutcome, OverlayManager, OverlayState,
    UiConfig,
};
use aroov_testing::fixtures::{Harness, destination, fast_ui, group_json};
use serde_json::{Value, json};

const GROUPS: &str = "/api/user/groups";

fn manager(h: &Harness) -> OverlayManager {
    OverlayManager::new(h.ctx.clone(), CardVariant::Explore)
}

async fn share_open(h: &Harness, overlay: &OverlayManager) {
    h.gateway.ok(
        Method::Get,
        GROUPS,
        json!([group_json(5, "Semester Break", 4)]),
    );
    let outcome = overlay.open_share(&destination(1, "Penang Hill")).await;
    assert!(matches!(outcome, GroupsOutcome::Listed(ref groups) if groups.len() == 1));
}

#[test]
fn test_open_detail_needs_no_request() {
    let h = Harness::explore();
    let overlay = manager(&h);

    overlay.open_detail(&destination(1, "Penang Hill"));

    assert!(h.gateway.requests().is_empty());
    assert!(h.document().is_visible(Anchor::DetailModal));
    assert!(!h.document().is_visible(Anchor::ShareModal));
    assert!(
        h.document()
            .html(Anchor::DetailContent)
            .unwrap()
            .contains("Penang Hill")
    );
    assert!(matches!(overlay.state(), OverlayState::Detail(_)));
}

#[tokio::test]
async fn test_share_from_detail_swaps_overlays() {
    let h = Harness::explore();
    let overlay = manager(&h);
    overlay.open_detail(&destination(1, "Penang Hill"));
    h.gateway.ok(Method::Get, GROUPS, json!([group_json(5, "Semester Break", 4)]));

    let outcome = overlay.share_from_detail().await;

    assert!(matches!(outcome, Some(GroupsOutcome::Listed(_))));
    assert!(!h.document().is_visible(Anchor::DetailModal));
    assert!(h.document().is_visible(Anchor::ShareModal));
    assert_eq!(overlay.share_context().unwrap().record.name, "Penang Hill");
    assert!(
        h.document()
            .html(Anchor::ShareHeader)
            .unwrap()
            .contains("Share Penang Hill")
    );
    let list = h.document().html(Anchor::ShareGroupList).unwrap();
    assert!(list.contains(r#"id="add-group-5""#));
    assert_eq!(h.document().button("add-group-5").unwrap().label, "Add +");
}

#[tokio::test]
async fn test_share_shows_loading_until_groups_arrive() {
    let h = Harness::explore();
    let overlay = manager(&h);
    let gate = h.gateway.gated(Method::Get, GROUPS, Ok(json!([])));

    let shared_dest = destination(1, "Penang Hill");
    let open = overlay.open_share(&shared_dest);
    let observe = async {
        let html = h.document().html(Anchor::ShareGroupList);
        gate.open();
        html
    };
    let (outcome, during) = futures::join!(open, observe);

    assert_eq!(during, Some(placeholder::groups_loading().into_string()));
    assert_eq!(outcome, GroupsOutcome::NoGroups);
    assert_eq!(
        h.document().html(Anchor::ShareGroupList),
        Some(placeholder::groups_empty().into_string())
    );
}

#[tokio::test]
async fn test_groups_error_and_sign_in_placeholders() {
    let h = Harness::explore();
    let overlay = manager(&h);

    h.gateway.fail(Method::Get, GROUPS, 401, json!({"error": "Unauthorized"}));
    let outcome = overlay.open_share(&destination(1, "Penang Hill")).await;
    assert_eq!(outcome, GroupsOutcome::SignedOut);
    assert_eq!(
        h.document().html(Anchor::ShareGroupList),
        Some(placeholder::groups_sign_in().into_string())
    );

    h.gateway.network_error(Method::Get, GROUPS);
    let outcome = overlay.open_share(&destination(1, "Penang Hill")).await;
    assert!(matches!(outcome, GroupsOutcome::Failed(_)));
    assert_eq!(
        h.document().html(Anchor::ShareGroupList),
        Some(placeholder::groups_error().into_string())
    );
}

#[tokio::test]
async fn test_closing_drops_late_groups() {
    let h = Harness::explore();
    let overlay = manager(&h);
    let gate = h.gateway.gated(
        Method::Get,
        GROUPS,
        Ok(json!([group_json(5, "Semester Break", 4)])),
    );

    let shared_dest = destination(1, "Penang Hill");
    let open = overlay.open_share(&shared_dest);
    let close = async {
        overlay.close();
        gate.open();
    };
    let (outcome, ()) = futures::join!(open, close);

    assert_eq!(outcome, GroupsOutcome::Superseded);
    assert_eq!(overlay.state(), OverlayState::Closed);
    assert!(!h.document().is_visible(Anchor::ShareModal));
    assert!(
        !h.document()
            .html(Anchor::ShareGroupList)
            .unwrap()
            .contains("Semester Break")
    );
}

#[tokio::test]
async fn test_add_to_group_conflict_restores_button() {
    let h = Harness::explore();
    let overlay = manager(&h);
    share_open(&h, &overlay).await;
    h.gateway.fail(
        Method::Post,
        "/api/groups/5/recommend",
        409,
        json!({"error": "Already added"}),
    );

    let outcome = overlay.add_to_group(5).await;

    assert!(matches!(outcome, AddOutcome::Failed(ref err) if err.status() == Some(409)));
    let button = h.document().button("add-group-5").unwrap();
    assert_eq!(button.label, "Add +");
    assert!(!button.disabled);
    assert!(h.host.last_alert().unwrap().contains("Already added"));
}

#[tokio::test]
async fn test_add_to_group_success_marks_button() {
    let h = Harness::explore();
    let overlay = manager(&h);
    share_open(&h, &overlay).await;
    h.gateway
        .ok(Method::Post, "/api/groups/5/recommend", json!({"success": true}));

    assert_eq!(overlay.add_to_group(5).await, AddOutcome::Added);

    let button = h.document().button("add-group-5").unwrap();
    assert_eq!(button.label, "Added ✅");
    assert!(button.disabled);
    assert_eq!(button.tone, ButtonTone::Success);
    let request = h.gateway.requests().pop().unwrap();
    assert_eq!(request.body, Some(json!({"destination_id": 1})));
}

#[tokio::test]
async fn test_add_to_group_shows_pending_state() {
    let h = Harness::explore();
    let overlay = manager(&h);
    share_open(&h, &overlay).await;
    let gate = h
        .gateway
        .gated(Method::Post, "/api/groups/5/recommend", Ok(Value::Null));

    let add = overlay.add_to_group(5);
    let observe = async {
        let button = h.document().button("add-group-5");
        gate.open();
        button
    };
    let (_, during) = futures::join!(add, observe);

    let during = during.unwrap();
    assert_eq!(during.label, "...");
    assert!(during.disabled);
}

#[tokio::test]
async fn test_add_to_group_failure_messages() {
    let h = Harness::explore();
    let overlay = manager(&h);
    share_open(&h, &overlay).await;

    h.gateway
        .fail(Method::Post, "/api/groups/5/recommend", 500, Value::Null);
    overlay.add_to_group(5).await;
    assert_eq!(h.host.last_alert().as_deref(), Some("⚠️ Failed to add"));

    h.gateway
        .network_error(Method::Post, "/api/groups/5/recommend");
    overlay.add_to_group(5).await;
    assert_eq!(h.host.last_alert().as_deref(), Some("Network error"));
}

#[tokio::test]
async fn test_late_group_answer_leaves_next_share_alone() {
    let h = Harness::explore();
    let overlay = manager(&h);
    share_open(&h, &overlay).await;
    let gate = h
        .gateway
        .gated(Method::Post, "/api/groups/5/recommend", Ok(Value::Null));

    let add = overlay.add_to_group(5);
    let switch = async {
        overlay.close();
        h.gateway
            .ok(Method::Get, GROUPS, json!([group_json(5, "Semester Break", 4)]));
        overlay.open_share(&destination(2, "Cameron Highlands")).await;
        gate.open();
    };
    let (outcome, ()) = futures::join!(add, switch);

    assert_eq!(outcome, AddOutcome::Stale);
    assert_eq!(
        overlay.share_context().unwrap().record.name,
        "Cameron Highlands"
    );
    let button = h.document().button("add-group-5").unwrap();
    assert_eq!(button.label, "Add +");
    assert!(!button.disabled);
    assert_eq!(button.tone, ButtonTone::Normal);
}

#[tokio::test]
async fn test_failed_add_restores_label_after_double_click() {
    let h = Harness::explore();
    let overlay = manager(&h);
    share_open(&h, &overlay).await;
    let gate = h.gateway.gated(
        Method::Post,
        "/api/groups/5/recommend",
        Ok(json!({"success": true})),
    );
    h.gateway.fail(
        Method::Post,
        "/api/groups/5/recommend",
        409,
        json!({"error": "Already added"}),
    );

    let first = overlay.add_to_group(5);
    let second = async {
        let outcome = overlay.add_to_group(5).await;
        let button = h.document().button("add-group-5");
        gate.open();
        (outcome, button)
    };
    let (first, (second, after_failure)) = futures::join!(first, second);

    assert!(matches!(second, AddOutcome::Failed(_)));
    let after_failure = after_failure.unwrap();
    assert_eq!(after_failure.label, "Add +");
    assert!(!after_failure.disabled);
    assert_eq!(first, AddOutcome::Added);
}

#[tokio::test]
async fn test_add_to_group_without_share_context() {
    let h = Harness::explore();
    let overlay = manager(&h);

    assert_eq!(overlay.add_to_group(5).await, AddOutcome::NoContext);
    assert!(h.gateway.requests().is_empty());
}

#[tokio::test]
async fn test_backdrop_click_closes_only_on_container() {
    let h = Harness::explore();
    let overlay = manager(&h);
    share_open(&h, &overlay).await;

    assert!(!overlay.backdrop_click(Anchor::ShareHeader));
    assert!(!overlay.backdrop_click(Anchor::DetailModal));
    assert!(h.document().is_visible(Anchor::ShareModal));

    assert!(overlay.backdrop_click(Anchor::ShareModal));
    assert_eq!(overlay.state(), OverlayState::Closed);
    assert!(overlay.share_context().is_none());
}

#[tokio::test]
async fn test_copy_link_flashes_button() {
    let ui = UiConfig {
        copied_feedback_ms: 20,
        ..fast_ui()
    };
    let h = Harness::with_ui(Document::explore_page(), ui);
    let overlay = manager(&h);
    share_open(&h, &overlay).await;

    let copy = overlay.copy_link();
    let observe = async { h.document().button(COPY_BUTTON) };
    let (link, during) = futures::join!(copy, observe);

    assert_eq!(link.as_deref(), Some("https://aroov.test/destination?id=1"));
    assert_eq!(h.host.clipboard(), link);
    assert_eq!(during.unwrap().label, "✅ Copied!");
    assert_eq!(h.document().button(COPY_BUTTON).unwrap().label, "🔗 Copy Link");
}

#[tokio::test]
async fn test_overlapping_copies_restore_copy_label() {
    let ui = UiConfig {
        copied_feedback_ms: 50,
        ..fast_ui()
    };
    let h = Harness::with_ui(Document::explore_page(), ui);
    let overlay = manager(&h);
    share_open(&h, &overlay).await;

    let first = overlay.copy_link();
    let second = async {
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        overlay.copy_link().await
    };
    let (first, second) = futures::join!(first, second);

    assert!(first.is_some());
    assert!(second.is_some());
    let button = h.document().button(COPY_BUTTON).unwrap();
    assert_eq!(button.label, "🔗 Copy Link");
    assert!(!button.disabled);
}

#[tokio::test]
async fn test_copy_link_without_clipboard() {
    let h = Harness::explore();
    let overlay = manager(&h);
    share_open(&h, &overlay).await;
    h.host.set_clipboard_available(false);

    assert_eq!(overlay.copy_link().await, None);
    assert_eq!(h.document().button(COPY_BUTTON).unwrap().label, "🔗 Copy Link");
}

#[tokio::test]
async fn test_email_share_opens_mailto() {
    let h = Harness::explore();
    let overlay = manager(&h);
    share_open(&h, &overlay).await;

    let link = overlay.email_share().unwrap();

    assert!(link.starts_with("mailto:?subject=Trip%20Recommendation%3A%20Penang%20Hill&body="));
    assert!(link.contains("Est.%20Cost%3A%20RM20%20-%20RM80"));
    assert_eq!(h.host.opened(), vec![link]);
}
