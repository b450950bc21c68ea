#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DETAILED_HEADER: &str = "Device ID,Device Name,Device Type,Location,Power Rating (Watt),Status (ON/OFF),Connectivity Status,Usage Start Time,Usage End Time,Duration (Hours),Energy Consumption (kWh),Cost (IDR)";

pub const DETAILED_CSV: &str = "\
Device ID,Device Name,Device Type,Location,Power Rating (Watt),Status (ON/OFF),Connectivity Status,Usage Start Time,Usage End Time,Duration (Hours),Energy Consumption (kWh),Cost (IDR)
1,Fridge,Cooling,Kitchen,150,ON,Connected,2024-11-01 00:00,2024-11-01 23:59,24,3.6,5201
2,Washing Machine,Laundry,Bathroom,500,OFF,Disconnected,2024-11-01 08:00,2024-11-01 10:30,2.5,1.25,1806
3,Air Conditioner,Cooling,Bedroom,900,ON,Connected,2024-11-01 20:00,2024-11-02 04:00,8,7.2,10402
4,Lamp,Lighting,Bedroom,10,ON,Connected,2024-11-01 18:00,2024-11-01 23:00,5,0.05,72
";

pub const FRIDGE_LINE: &str = "Name: Fridge, Type: Cooling, Priority: true, Monthly Use: 12.5 kWh, Cost: Rp50000, Schedule: [08:00 12:00 18:00]";

pub const SUMMARY_LINE: &str =
    "Jadwal Penggunaan Appliances (Total Energi = 42.00 kWh, Biaya = Rp60677.40):";

pub const AC_LINE: &str = "Name: Air Conditioner, Type: Cooling, Priority: false, Monthly Use: 29.50 kWh, Cost: Rp42618.65, Schedule: [18:00–24:00 00:00–06:00]";

pub fn edash() -> Command {
    cargo_bin_cmd!("energydash")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("energydash_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp file and return its path.
pub fn temp_file(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write temp file");
    p
}

/// Config path for CLI tests, so the user's real config is never touched.
pub fn temp_config(name: &str) -> String {
    temp_path(&format!("{name}_config"), "conf")
}

pub fn appliances_json() -> String {
    r#"{
        "status": true,
        "data": [
            {"id": 1, "name": "Fridge", "type": "Cooling", "average_usage": 20.0, "usage_today": 22, "daily_use_target": 20},
            {"id": 2, "name": "Washing Machine", "type": "Laundry", "average_usage": 1.5},
            {"id": 3, "name": "Air Conditioner", "type": "Cooling", "average_usage": 8.0}
        ],
        "message": "ok"
    }"#
    .to_string()
}
