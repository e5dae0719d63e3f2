use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{
    ConfigSetUrlViewModel, ConfigViewModel, GuidanceViewModel,
};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "# {}", self.data.config_path.display().dimmed())?;
        // Printed as the file would be written.
        let body = toml::to_string_pretty(&self.data.config).map_err(|_| fmt::Error)?;
        write!(f, "{}", body)
    }
}

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        ConfigView::new(self).fmt(f)
    }
}

pub struct ConfigSetUrlView<'a> {
    data: &'a ConfigSetUrlViewModel,
}

impl<'a> ConfigSetUrlView<'a> {
    pub fn new(data: &'a ConfigSetUrlViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigSetUrlView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Saved to {}", self.data.config_path.display())
    }
}

impl fmt::Display for ConfigSetUrlViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        ConfigSetUrlView::new(self).fmt(f)
    }
}

pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "aroov - Aroov Trip from the terminal")?;
        writeln!(f)?;
        writeln!(f, "Backend: {}", self.data.base_url)?;
        if !self.data.config_exists {
            writeln!(
                f,
                "No config at {} yet; using defaults.",
                self.data.config_path.display()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "For more commands:")?;
        writeln!(f, "  aroov --help")
    }
}

impl fmt::Display for GuidanceViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        GuidanceView::new(self).fmt(f)
    }
}
