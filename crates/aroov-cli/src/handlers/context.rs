use anyhow::Result;
use aroov_client::{Api, HttpGateway};
use aroov_runtime::{Config, Document, Host, PageContext};
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::debug;

use crate::host::ConsoleHost;
use crate::presentation::view_models::CommandResultViewModel;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

/// Everything a handler needs: output format, loaded configuration and the
/// terminal host shared by every page it builds.
pub struct HandlerContext {
    pub format: OutputFormat,
    pub config: Config,
    pub config_path: PathBuf,
    host: Rc<ConsoleHost>,
}

impl HandlerContext {
    pub fn new(
        format: OutputFormat,
        config: Config,
        config_path: PathBuf,
        assume_yes: bool,
    ) -> Self {
        Self {
            format,
            config,
            config_path,
            host: Rc::new(ConsoleHost::new(assume_yes)),
        }
    }

    pub fn host(&self) -> &ConsoleHost {
        &self.host
    }

    /// Wire a page to the configured backend. Animation delays are dropped;
    /// nothing is drawn between steps in a terminal.
    pub fn page(&self, document: Document) -> Result<PageContext> {
        let gateway = HttpGateway::new(&self.config.api.base_url, self.config.api.timeout_secs)?;
        debug!(base_url = %self.config.api.base_url, "using backend");

        let mut ui = self.config.ui.clone();
        ui.removal_delay_ms = 0;
        ui.copied_feedback_ms = 0;

        Ok(PageContext::new(
            Api::new(Rc::new(gateway)),
            document,
            self.host.clone() as Rc<dyn Host>,
            ui,
        ))
    }

    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        ConsoleRenderer::new(self.format).render(view_model)
    }
}
