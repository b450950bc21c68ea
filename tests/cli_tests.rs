use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{
    AC_LINE, DETAILED_CSV, FRIDGE_LINE, SUMMARY_LINE, appliances_json, edash, temp_config,
    temp_file, temp_path,
};

#[test]
fn test_validate_accepts_simplified_header() {
    let cfg = temp_config("validate_ok");
    let csv = temp_file("validate_ok", "csv", "appliance,energy_consumption\nFridge,3.2\n");

    edash()
        .args(["--config", &cfg, "validate", &csv])
        .assert()
        .success()
        .stdout(contains("header accepted (simplified layout)"));
}

#[test]
fn test_validate_reads_latin1_export() {
    let cfg = temp_config("validate_latin1");
    let csv = temp_path("validate_latin1", "csv");
    // "Energía" encoded as Latin-1, not valid UTF-8
    fs::write(&csv, b"Appliance,Energ\xeda kWh\nFridge,3.2\n").unwrap();

    edash()
        .args(["--config", &cfg, "validate", &csv])
        .assert()
        .success()
        .stdout(contains("header accepted (simplified layout)"));
}

#[test]
fn test_validate_rejects_empty_file() {
    let cfg = temp_config("validate_empty");
    let csv = temp_file("validate_empty", "csv", "\n  \n");

    edash()
        .args(["--config", &cfg, "validate", &csv])
        .assert()
        .failure()
        .stderr(contains("file is empty"));
}

#[test]
fn test_validate_json_decision() {
    let cfg = temp_config("validate_json");
    let csv = temp_file("validate_json", "csv", "foo,bar\n1,2\n");

    edash()
        .args(["--config", &cfg, "validate", "--json", &csv])
        .assert()
        .failure()
        .stdout(contains(r#""ok":false"#))
        .stdout(contains("unrecognized csv header with 2 columns"));
}

#[test]
fn test_stats_over_csv_table() {
    let cfg = temp_config("stats_csv");
    let table = temp_file("stats_csv", "csv", DETAILED_CSV);

    edash()
        .args(["--config", &cfg, "stats", "--table", &table, "--location", "Bedroom"])
        .assert()
        .success()
        .stdout(contains("12.10 kWh"))
        .stdout(contains("Air Conditioner (Cooling) 7.20 kWh"))
        .stdout(contains("Fridge (Cooling) 24 H 0 M"))
        .stdout(contains("Devices at Bedroom"))
        .stdout(contains("Lamp"));
}

#[test]
fn test_stats_over_backend_json_table() {
    let cfg = temp_config("stats_json");
    let json = r#"{"status": true, "data": {
        "Device Name": ["Fridge", "Lamp"],
        "Device Type": ["Cooling", "Lighting"],
        "Location": ["Kitchen", "Bedroom"],
        "Connectivity Status": ["Connected", "Disconnected"],
        "Energy Consumption (kWh)": ["3.5", "0.5"],
        "Duration (Hours)": ["24", "5"]
    }}"#;
    let table = temp_file("stats_json", "json", json);

    edash()
        .args(["--config", &cfg, "stats", "--table", &table])
        .assert()
        .success()
        .stdout(contains("4.00 kWh"))
        .stdout(contains("Kitchen"));
}

#[test]
fn test_stats_rejects_ragged_json_table() {
    let cfg = temp_config("stats_ragged");
    let table = temp_file(
        "stats_ragged",
        "json",
        r#"{"Device Name": ["Fridge", "Lamp"], "Location": ["Kitchen"]}"#,
    );

    edash()
        .args(["--config", &cfg, "stats", "--table", &table])
        .assert()
        .failure()
        .stderr(contains("expected 2"));
}

#[test]
fn test_overused_lists_only_matched_devices() {
    let cfg = temp_config("overused");
    let table = temp_file("overused", "csv", DETAILED_CSV);
    let appliances = temp_file("overused_appliances", "json", &appliances_json());

    edash()
        .args([
            "--config",
            &cfg,
            "overused",
            "--table",
            &table,
            "--appliances",
            &appliances,
        ])
        .assert()
        .success()
        .stdout(contains("Fridge"))
        .stdout(contains("Washing Machine"))
        .stdout(contains("Lamp").not())
        .stdout(contains("Over daily target today: Fridge"));
}

#[test]
fn test_recommend_lenient_marks_missing_fields() {
    let cfg = temp_config("recommend_lenient");
    let partial = "Name: Heater, Type: Heating, Monthly Use: 3 kWh, Cost: Rp4000, Schedule: [06:00–12:00]";
    let input = temp_file(
        "recommend_lenient",
        "txt",
        &format!("{SUMMARY_LINE}\n{FRIDGE_LINE}\n{partial}\n"),
    );

    edash()
        .args(["--config", &cfg, "recommend", "--input", &input])
        .assert()
        .success()
        .stdout(contains("42.00 kWh"))
        .stdout(contains("Heater"))
        .stdout(contains("1 recommendation(s) had missing fields"));
}

#[test]
fn test_recommend_strict_fails_on_partial_record() {
    let cfg = temp_config("recommend_strict");
    let json = format!(
        r#"{{"status": true, "data": {{"message": "ok", "recommendations": ["{}", "Name: Heater"]}}}}"#,
        FRIDGE_LINE
    );
    let input = temp_file("recommend_strict", "json", &json);

    edash()
        .args(["--config", &cfg, "recommend", "--input", &input, "--strict"])
        .assert()
        .failure()
        .stderr(contains("does not match the expected format"));
}

#[test]
fn test_tariff_lookup_and_estimate() {
    let cfg = temp_config("tariff");

    edash()
        .args([
            "--config",
            &cfg,
            "tariff",
            "R-1/TR daya 900 VA",
            "--kwh",
            "2",
            "--date",
            "2025-02-10",
        ])
        .assert()
        .success()
        .stdout(contains("Rp1352,00/kWh"))
        .stdout(contains("56,00 kWh"))
        .stdout(contains("Rp75712,00"));
}

#[test]
fn test_tariff_unknown_class_fails() {
    let cfg = temp_config("tariff_unknown");

    edash()
        .args(["--config", &cfg, "tariff", "Z-9"])
        .assert()
        .failure()
        .stderr(contains("Unknown tariff class: Z-9"));
}

#[test]
fn test_tariff_uses_configured_class() {
    let cfg = temp_config("tariff_default");
    fs::write(&cfg, "tariff_class: L/TM\n").unwrap();

    edash()
        .args(["--config", &cfg, "tariff"])
        .assert()
        .success()
        .stdout(contains("Tariff L/TM"))
        .stdout(contains("Rp1644,00/kWh"));
}

#[test]
fn test_session_login_status_logout() {
    let cfg = temp_config("session");

    edash()
        .args(["--config", &cfg, "session", "--login", "abcdefgh1234"])
        .assert()
        .success()
        .stdout(contains("Logged in."));

    let saved = fs::read_to_string(&cfg).unwrap();
    assert!(saved.contains("token: abcdefgh1234"));

    edash()
        .args(["--config", &cfg, "session", "--status"])
        .assert()
        .success()
        .stdout(contains("********1234"));

    edash()
        .args(["--config", &cfg, "session", "--logout"])
        .assert()
        .success();

    let saved = fs::read_to_string(&cfg).unwrap();
    assert!(!saved.contains("token"));

    edash()
        .args(["--config", &cfg, "session"])
        .assert()
        .success()
        .stdout(contains("Not logged in."));
}

#[test]
fn test_init_writes_default_config() {
    let cfg = temp_config("init");

    edash()
        .args(["--config", &cfg, "init"])
        .assert()
        .success();

    let saved = fs::read_to_string(&cfg).unwrap();
    assert!(saved.contains("tariff_class:"));
    assert!(saved.contains("R-1/TR daya 1300 VA"));

    edash()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("report_title: Appliance Usage Schedule"));
}

#[test]
fn test_recommend_reads_ac_schedule() {
    let cfg = temp_config("recommend_ac");
    let input = temp_file("recommend_ac", "txt", AC_LINE);

    edash()
        .args(["--config", &cfg, "recommend", "--input", &input, "--strict"])
        .assert()
        .success()
        .stdout(contains("18:00–24:00, 00:00–06:00"));
}
