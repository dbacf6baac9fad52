#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use msgapi_core::MsgApiError;
use msgapi_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8000"
app:
  nmae: "Message API" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INVALID_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8000");
    assert_eq!(cfg.app.name, "Message API");
    assert_eq!(cfg.app.version, "1.0.0");
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9000"
app:
  name: "Notes"
  version: "2.3.4"
  description: "notes service"
logging:
  level: "msgapi_server=debug,info"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9000);
    assert_eq!(cfg.app.name, "Notes");
    assert_eq!(cfg.app.version, "2.3.4");
    assert_eq!(cfg.logging.level, "msgapi_server=debug,info");
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(matches!(err, MsgApiError::UnsupportedVersion));
}

#[test]
fn rejects_bad_listen_address() {
    let bad = r#"
version: 1
server:
  listen: "not-an-address"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("server.listen"));
}

#[test]
fn rejects_empty_app_name() {
    let bad = r#"
version: 1
app:
  name: "  "
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("app.name"));
}

#[test]
fn rejects_bad_log_level() {
    let bad = r#"
version: 1
logging:
  level: "msgapi=loud"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("logging.level"));
}

#[test]
fn load_from_file_reads_yaml() {
    let path = std::env::temp_dir().join(format!("msgapi-config-{}.yaml", std::process::id()));
    std::fs::write(&path, "version: 1\napp:\n  name: \"From File\"\n").unwrap();

    let cfg = config::load_from_file(path.to_str().unwrap()).expect("must parse");
    std::fs::remove_file(&path).unwrap();
    assert_eq!(cfg.app.name, "From File");

    let (cfg, found) = config::load_or_default(path.to_str().unwrap()).unwrap();
    assert!(!found);
    assert_eq!(cfg.app.name, "Message API");
}

#[test]
fn load_from_file_missing_is_an_error() {
    let err = config::load_from_file("definitely/not/here/msgapi.yaml").expect_err("must fail");
    assert!(err.to_string().contains("read config failed"));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let (cfg, found) = config::load_or_default("definitely/not/here/msgapi.yaml").unwrap();
    assert!(!found);
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8000");
}
