//! Sample records, wire payloads and wiring for controller tests.

use aroov_client::Api;
use aroov_runtime::{Document, Host, PageContext, UiConfig};
use aroov_types::DestinationRecord;
use serde_json::{Value, json};
use std::rc::Rc;

use crate::gateway::ScriptedGateway;
use crate::host::RecordingHost;

/// Destination as the API sends it.
pub fn destination_json(id: i64, name: &str) -> Value {
    json!({
        "dest_id": id,
        "name": name,
        "state": "Penang",
        "type": "Culture",
        "price_min": "20",
        "price_max": 80,
        "images": "",
        "description": "Street art and hawker food",
        "activities": "Food,Photography",
        "is_liked": 0
    })
}

pub fn liked_destination_json(id: i64, name: &str) -> Value {
    let mut value = destination_json(id, name);
    value["is_liked"] = json!(1);
    value
}

/// Decoded form of [`destination_json`].
pub fn destination(id: i64, name: &str) -> DestinationRecord {
    match serde_json::from_value(destination_json(id, name)) {
        Ok(record) => record,
        Err(err) => panic!("fixture does not decode: {}", err),
    }
}

/// `GET /api/destinations` body.
pub fn page_json(items: Vec<Value>, total_pages: u32) -> Value {
    json!({ "data": items, "totalPages": total_pages })
}

pub fn group_json(id: i64, name: &str, members: u32) -> Value {
    json!({ "group_id": id, "group_name": name, "member_count": members })
}

/// UI settings with the animation delays removed.
pub fn fast_ui() -> UiConfig {
    UiConfig {
        origin: "https://aroov.test".to_string(),
        removal_delay_ms: 0,
        copied_feedback_ms: 0,
        ..UiConfig::default()
    }
}

/// Gateway, host and context for one page under test.
pub struct Harness {
    pub gateway: Rc<ScriptedGateway>,
    pub host: Rc<RecordingHost>,
    pub ctx: PageContext,
}

impl Harness {
    pub fn new(document: Document) -> Self {
        Self::with_ui(document, fast_ui())
    }

    pub fn with_ui(document: Document, ui: UiConfig) -> Self {
        let gateway = Rc::new(ScriptedGateway::new());
        let host = Rc::new(RecordingHost::new());
        let ctx = PageContext::new(
            Api::new(gateway.clone()),
            document,
            host.clone() as Rc<dyn Host>,
            ui,
        );
        Self { gateway, host, ctx }
    }

    pub fn explore() -> Self {
        Self::new(Document::explore_page())
    }

    pub fn favourites() -> Self {
        Self::new(Document::favourites_page())
    }

    pub fn profile() -> Self {
        Self::new(Document::profile_page())
    }

    pub fn document(&self) -> &Document {
        &self.ctx.document
    }
}
