mod common;

use common::{appliances_json, temp_path};
use energydash::api::{ApiResponse, Session, parse_payload};
use energydash::config::Config;
use energydash::errors::AppError;
use energydash::models::Appliance;
use std::path::Path;

#[test]
fn test_envelope_with_data_is_unwrapped() {
    let appliances: Vec<Appliance> = parse_payload(&appliances_json()).unwrap();
    assert_eq!(appliances.len(), 3);
    assert_eq!(appliances[0].kind, "Cooling");
    assert_eq!(appliances[0].average_usage, 20.0);
    assert!(appliances[0].exceeds_daily_target());
    assert!(appliances[1].recommended_schedule.is_empty());
}

#[test]
fn test_zero_daily_target_is_exceeded_by_any_usage() {
    let idle = Appliance::default();
    assert!(!idle.exceeds_daily_target());

    let untargeted = Appliance {
        usage_today: 0.5,
        ..Default::default()
    };
    assert!(untargeted.exceeds_daily_target());

    let on_target = Appliance {
        usage_today: 3.0,
        daily_use_target: 3.0,
        ..Default::default()
    };
    assert!(!on_target.exceeds_daily_target());
}

#[test]
fn test_bare_payload_is_accepted() {
    let names: Vec<String> = parse_payload(r#"["a", "b"]"#).unwrap();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn test_failed_envelope_surfaces_message() {
    let result: Result<Vec<String>, _> =
        parse_payload(r#"{"status": false, "message": "token expired"}"#);
    match result {
        Err(AppError::Api(msg)) => assert_eq!(msg, "token expired"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_envelope_without_data_is_an_error() {
    let env: ApiResponse<Vec<String>> = serde_json::from_str(r#"{"status": true}"#).unwrap();
    assert!(matches!(env.into_result(), Err(AppError::Api(_))));
}

#[test]
fn test_session_lifecycle() {
    let mut session = Session::from_config(&Config::default());
    assert!(!session.is_authenticated());
    assert!(matches!(
        session.authorization_header(),
        Err(AppError::NotAuthenticated)
    ));

    session.login("  abc.def.ghij  ").unwrap();
    assert_eq!(session.authorization_header().unwrap(), "Bearer abc.def.ghij");
    assert_eq!(session.masked().as_deref(), Some("********ghij"));

    session.logout();
    assert!(!session.is_authenticated());
    assert!(session.login("   ").is_err());
}

#[test]
fn test_session_round_trips_through_config_file() {
    let path = temp_path("session_roundtrip", "conf");
    let path = Path::new(&path);

    let mut cfg = Config::default();
    let mut session = Session::from_config(&cfg);
    session.login("secret-token").unwrap();
    session.store(&mut cfg);
    cfg.save_to(path).unwrap();

    let reloaded = Config::load_from(path).unwrap();
    assert_eq!(reloaded.token.as_deref(), Some("secret-token"));
    assert!(Session::from_config(&reloaded).is_authenticated());
}

#[test]
fn test_config_defaults_fill_missing_fields() {
    let path = temp_path("config_partial", "conf");
    std::fs::write(&path, "tariff_class: L/TR\n").unwrap();

    let cfg = Config::load_from(Path::new(&path)).unwrap();
    assert_eq!(cfg.tariff_class, "L/TR");
    assert_eq!(cfg.log_level, "warn");
    assert!(cfg.token.is_none());

    let missing = Config::load_from(Path::new(&temp_path("config_absent", "conf"))).unwrap();
    assert_eq!(missing, Config::default());
}

#[test]
fn test_malformed_config_is_an_error() {
    let path = temp_path("config_broken", "conf");
    std::fs::write(&path, "tariff_class: [unclosed\n").unwrap();
    assert!(matches!(
        Config::load_from(Path::new(&path)),
        Err(AppError::Config(_))
    ));
}
