use std::fs;

use tempfile::TempDir;

use halbot_core::config::Config;
use halbot_core::{Error, IndexRegistry};

#[test]
fn resolve_returns_registered_endpoint() {
    let registry: IndexRegistry = [("ai", "http://svc/ai"), ("news", "http://svc/news")].into_iter().collect();
    assert_eq!(registry.resolve("ai").expect("ai"), "http://svc/ai");
    assert_eq!(registry.resolve("news").expect("news"), "http://svc/news");
    assert_eq!(registry.len(), 2);
}

#[test]
fn resolve_unknown_alias_is_not_found() {
    let registry: IndexRegistry = [("ai", "http://svc/ai")].into_iter().collect();
    assert!(matches!(registry.resolve("bogus"), Err(Error::UnknownAlias(a)) if a == "bogus"));
}

#[test]
fn resolve_is_case_sensitive() {
    let registry: IndexRegistry = [("ai", "http://svc/ai")].into_iter().collect();
    assert!(registry.resolve("AI").is_err());
}

#[test]
fn duplicate_alias_last_write_wins() {
    let mut registry = IndexRegistry::new();
    registry.register("ai", "http://old/ai");
    registry.register("ai", "http://new/ai");
    assert_eq!(registry.resolve("ai").expect("ai"), "http://new/ai");
    assert_eq!(registry.len(), 1);
}

#[test]
fn aliases_are_sorted() {
    let registry: IndexRegistry = [("zeta", "http://z"), ("ai", "http://a"), ("mid", "http://m")].into_iter().collect();
    assert_eq!(registry.aliases().collect::<Vec<_>>(), vec!["ai", "mid", "zeta"]);
}

#[test]
fn missing_config_file_yields_empty_registry() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_for_env(&tmp.path().join("absent.toml"), "dev").expect("missing file is fine");
    assert!(IndexRegistry::from_settings(config.settings()).is_empty());
}

#[test]
fn registry_built_from_config_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("halrc.toml");
    fs::write(&path, "[solr]\nai = \"http://svc/ai\"\nbooks = \"https://svc/books\"\n").unwrap();

    let config = Config::load_for_env(&path, "dev").expect("load");
    let registry = IndexRegistry::from_settings(config.settings());
    assert_eq!(registry.resolve("ai").expect("ai"), "http://svc/ai");
    assert_eq!(registry.resolve("books").expect("books"), "https://svc/books");
}

#[test]
fn env_overlay_file_overrides_base() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("halrc.toml");
    fs::write(&path, "[solr]\nai = \"http://base/ai\"\n\n[bot]\ntrigger = \"hal\"\n").unwrap();
    fs::write(tmp.path().join("halrc.prod.toml"), "[solr]\nai = \"http://prod/ai\"\n").unwrap();

    let config = Config::load_for_env(&path, "prod").expect("load");
    assert_eq!(config.settings().solr["ai"], "http://prod/ai");
    assert_eq!(config.settings().bot.trigger, "hal");

    let dev = Config::load_for_env(&path, "dev").expect("load dev");
    assert_eq!(dev.settings().solr["ai"], "http://base/ai");
}

#[test]
fn malformed_config_file_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("halrc.toml");
    fs::write(&path, "[solr\nai = ").unwrap();
    assert!(matches!(Config::load_for_env(&path, "dev"), Err(Error::InvalidConfig(_))));
}
