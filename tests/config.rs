use std::collections::HashMap;

use axum_cart_api::config::AppConfig;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_apply_when_only_database_url_is_set() -> anyhow::Result<()> {
    let config = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/carts")]))?;

    assert_eq!(config.database_url, "postgres://localhost/carts");
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 3000);
    Ok(())
}

#[test]
fn host_and_port_are_read_and_bad_port_falls_back() -> anyhow::Result<()> {
    let config = AppConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://db/carts"),
        ("APP_HOST", "0.0.0.0"),
        ("APP_PORT", "8080"),
    ]))?;
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8080);

    let config = AppConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://db/carts"),
        ("APP_PORT", "not-a-port"),
    ]))?;
    assert_eq!(config.port, 3000);
    Ok(())
}

#[test]
fn missing_database_url_is_an_error() {
    assert!(AppConfig::from_lookup(lookup(&[])).is_err());
    assert!(AppConfig::from_lookup(lookup(&[("DATABASE_URL", "")])).is_err());
}
