use serde::{Deserialize, Serialize};

/// One appliance as returned by the backend `/appliance` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appliance {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    /// Rated power in watts.
    pub power: i64,
    /// Hours used today.
    pub usage_today: f64,
    /// Energy consumed, kWh.
    pub energy: f64,
    pub cost: f64,
    pub status: String,
    pub connectivity: String,
    /// Historical average usage, hours per day.
    pub average_usage: f64,
    pub daily_use_target: f64,
    pub priority: bool,
    pub monthly_use: f64,
    pub recommended_schedule: Vec<String>,
}

impl Appliance {
    /// True when today's usage already passed the user's daily target.
    pub fn exceeds_daily_target(&self) -> bool {
        self.usage_today > self.daily_use_target
    }
}
