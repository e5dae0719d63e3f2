use aroov_runtime::DocumentSnapshot;
use maud::{PreEscaped, html};
use std::fmt;

/// The visible regions of a page, each wrapped in an element carrying its
/// anchor id. Regions inside a hidden overlay are left out.
pub struct DocumentView<'a> {
    data: &'a DocumentSnapshot,
}

impl<'a> DocumentView<'a> {
    pub fn new(data: &'a DocumentSnapshot) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for DocumentView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (anchor, region) in &self.data.regions {
            let container_hidden = anchor
                .container()
                .and_then(|container| self.data.regions.get(&container))
                .is_some_and(|container| !container.visible);
            if !region.visible || container_hidden || region.html.is_empty() {
                continue;
            }
            // Region html was produced by the page renderers and is already escaped.
            let markup = html! {
                div id=(anchor.id()) { (PreEscaped(region.html.as_str())) }
            };
            writeln!(f, "{}", markup.into_string())?;
        }
        Ok(())
    }
}
