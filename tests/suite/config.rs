//! Configuration resolution end to end: file, environment, default.

use vitrine_engine::{App, BACKEND_URL_ENV, VitrineConfig};

/// Environment manipulation lives in a single test so parallel tests never
/// race on `VITRINE_BACKEND_URL`.
#[test]
fn backend_url_resolution_order() {
    unsafe {
        std::env::remove_var(BACKEND_URL_ENV);
    }

    // Unset everywhere: the hardcoded fallback, exactly.
    let app = App::new(None);
    assert_eq!(app.backend().as_str(), "http://localhost:8000");

    // Environment only.
    unsafe {
        std::env::set_var(BACKEND_URL_ENV, "http://env.example.com:8080");
    }
    let app = App::new(None);
    assert_eq!(app.backend().as_str(), "http://env.example.com:8080");

    // Config file beats environment.
    let config: VitrineConfig = toml::from_str(
        r#"
[backend]
url = "http://file.example.com"
"#,
    )
    .unwrap();
    let app = App::new(Some(&config));
    assert_eq!(app.backend().as_str(), "http://file.example.com");

    // An invalid environment value is skipped for the fallback.
    unsafe {
        std::env::set_var(BACKEND_URL_ENV, "not a url");
    }
    let app = App::new(None);
    assert_eq!(app.backend().as_str(), "http://localhost:8000");

    unsafe {
        std::env::remove_var(BACKEND_URL_ENV);
    }
}

#[test]
fn config_file_supplies_profile_and_ui_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[backend]
url = "http://localhost:4000"

[profile]
name = "Ada Lovelace"
headline = "Engines, analytical and otherwise."
skills = ["Rust", "Mathematics"]

[app]
ascii_only = true
"#,
    )
    .unwrap();

    let config = VitrineConfig::load_from(&path).unwrap().unwrap();
    let app = App::new(Some(&config));

    assert_eq!(app.backend().as_str(), "http://localhost:4000");
    assert_eq!(app.profile().name, "Ada Lovelace");
    assert_eq!(app.profile().skills, vec!["Rust", "Mathematics"]);
    assert!(app.ui_options().ascii_only);
    assert!(!app.ui_options().high_contrast);
}

#[test]
fn unreadable_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not toml [").unwrap();

    // `main` logs the error and continues with no config.
    let config = VitrineConfig::load_from(&path).ok().flatten();
    let app = App::new(config.as_ref());
    assert_eq!(app.profile().name, "Your Name");
}
