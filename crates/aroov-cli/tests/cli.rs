use aroov_testing::TestWorld;
use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn aroov(world: &TestWorld) -> Command {
    let mut cmd = Command::cargo_bin("aroov").unwrap();
    world.configure_command(&mut cmd);
    cmd
}

#[test]
fn test_help_lists_commands() {
    let world = TestWorld::new();
    aroov(&world)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("explore"))
        .stdout(predicate::str::contains("favourites"))
        .stdout(predicate::str::contains("availability"));
}

#[test]
fn test_no_command_shows_guidance() {
    let world = TestWorld::new();
    let result = world.run(&[]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("aroov --help"));
    assert!(result.stdout().contains("aroov config set-url"));
}

#[test]
fn test_config_show_defaults_as_json() {
    let world = TestWorld::new();
    let result = world.run(&["--format", "json", "config", "show"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().unwrap();
    assert_eq!(json["content"]["exists"], false);
    assert_eq!(
        json["content"]["config"]["api"]["base_url"],
        "http://localhost:3000"
    );
}

#[test]
fn test_set_url_persists_trimmed_url() {
    let world = TestWorld::new();
    let result = world
        .run(&["config", "set-url", "https://aroov.example.com/"])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("API URL set to https://aroov.example.com"));
    let written = world.read_config().unwrap();
    assert!(written.contains("base_url = \"https://aroov.example.com\""));
}

#[test]
fn test_set_url_rejects_other_schemes() {
    let world = TestWorld::new();
    aroov(&world)
        .args(["config", "set-url", "ftp://aroov.example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("must start with http://"));
    assert!(!world.config_path().exists());
}

#[test]
fn test_api_url_flag_is_not_persisted() {
    let world = TestWorld::new();
    world
        .write_config("[api]\nbase_url = \"https://saved.example.com\"\n")
        .unwrap();

    let result = world
        .run(&[
            "--api-url",
            "https://override.example.com",
            "--format",
            "json",
            "config",
            "show",
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(
        result.json().unwrap()["content"]["config"]["api"]["base_url"],
        "https://override.example.com"
    );

    world
        .run(&[
            "--api-url",
            "https://override.example.com",
            "config",
            "set-url",
            "https://next.example.com",
        ])
        .unwrap();
    assert!(
        world
            .read_config()
            .unwrap()
            .contains("https://next.example.com")
    );
}

#[test]
fn test_password_mismatch_fails_before_any_request() {
    let world = TestWorld::new();
    aroov(&world)
        .args(["password", "--current", "old", "--new", "one", "--confirm", "two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Passwords do not match"));
}

#[test]
fn test_availability_rejects_reversed_range() {
    let world = TestWorld::new();
    aroov(&world)
        .args([
            "availability",
            "add",
            "--start",
            "2025-03-05",
            "--end",
            "2025-03-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be after start"));
}

#[test]
fn test_invalid_date_is_a_usage_error() {
    let world = TestWorld::new();
    aroov(&world)
        .args(["availability", "add", "--start", "tomorrow", "--end", "2025-03-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--start"));
}

#[test]
fn test_unreachable_backend_reports_error() {
    let world = TestWorld::new();
    world
        .write_config("[api]\nbase_url = \"http://127.0.0.1:9\"\ntimeout_secs = 2\n")
        .unwrap();

    aroov(&world)
        .arg("explore")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Could not load destinations"));
}

#[test]
fn test_profile_set_requires_a_change() {
    let world = TestWorld::new();
    aroov(&world)
        .args(["profile", "set"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));
}
