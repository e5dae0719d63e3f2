use aroov_client::Api;
use std::rc::Rc;

use crate::config::UiConfig;
use crate::document::Document;
use crate::host::Host;

/// Collaborators shared by every controller on one page.
#[derive(Clone)]
pub struct PageContext {
    pub api: Api,
    pub document: Rc<Document>,
    pub host: Rc<dyn Host>,
    pub ui: Rc<UiConfig>,
}

impl PageContext {
    pub fn new(api: Api, document: Document, host: Rc<dyn Host>, ui: UiConfig) -> Self {
        Self {
            api,
            document: Rc::new(document),
            host,
            ui: Rc::new(ui),
        }
    }
}
