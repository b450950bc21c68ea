use serde::Serialize;

/// A table row whose duration went past the appliance's historical average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverusedDevice {
    pub name: String,
    pub duration: f64,
    pub average_usage: f64,
    pub usage_start_time: String,
    pub usage_end_time: String,
}

impl OverusedDevice {
    /// Hours above the historical average.
    pub fn excess(&self) -> f64 {
        self.duration - self.average_usage
    }
}
