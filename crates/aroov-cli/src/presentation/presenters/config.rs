use aroov_runtime::Config;
use std::path::PathBuf;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigSetUrlViewModel, ConfigViewModel, Guidance, GuidanceViewModel,
    StatusBadge,
};

pub fn present_config(
    config_path: PathBuf,
    exists: bool,
    config: Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let result = CommandResultViewModel::new(ConfigViewModel {
        config_path,
        exists,
        config,
    });
    if exists {
        result.with_badge(StatusBadge::info("Configuration"))
    } else {
        result
            .with_badge(StatusBadge::info("No config file, using defaults"))
            .with_suggestion(
                Guidance::new("Set your backend URL").with_command("aroov config set-url <URL>"),
            )
    }
}

pub fn present_config_set_url(
    config_path: PathBuf,
    base_url: String,
) -> CommandResultViewModel<ConfigSetUrlViewModel> {
    let label = format!("API URL set to {}", base_url);
    CommandResultViewModel::new(ConfigSetUrlViewModel {
        config_path,
        base_url,
    })
    .with_badge(StatusBadge::success(label))
}

pub fn present_guidance(
    config_path: PathBuf,
    config_exists: bool,
    base_url: String,
) -> CommandResultViewModel<GuidanceViewModel> {
    let mut result = CommandResultViewModel::new(GuidanceViewModel {
        config_path,
        config_exists,
        base_url,
    });

    if !config_exists {
        result = result.with_suggestion(
            Guidance::new("Point the client at your backend")
                .with_command("aroov config set-url https://aroov.example.com"),
        );
    }
    result
        .with_suggestion(Guidance::new("Browse destinations").with_command("aroov explore"))
        .with_suggestion(
            Guidance::new("See your saved trips").with_command("aroov favourites list"),
        )
}
