use serde::{Deserialize, Serialize};

/// Fully parsed schedule recommendation for a single appliance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationCard {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: bool,
    /// kWh per month.
    pub monthly_use: f64,
    pub cost: f64,
    pub schedule: Vec<String>,
}

impl RecommendationCard {
    pub fn priority_label(&self) -> &'static str {
        if self.priority { "High" } else { "Low" }
    }
}

/// Result of the lenient parser: every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PartialRecommendation {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub priority: Option<bool>,
    pub monthly_use: Option<f64>,
    pub cost: Option<f64>,
    pub schedule: Option<Vec<String>>,
}

impl PartialRecommendation {
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the fields that were not recovered, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.kind.is_none() {
            missing.push("type");
        }
        if self.priority.is_none() {
            missing.push("priority");
        }
        if self.monthly_use.is_none() {
            missing.push("monthly_use");
        }
        if self.cost.is_none() {
            missing.push("cost");
        }
        if self.schedule.is_none() {
            missing.push("schedule");
        }
        missing
    }

    pub fn into_card(self) -> Option<RecommendationCard> {
        Some(RecommendationCard {
            name: self.name?,
            kind: self.kind?,
            priority: self.priority?,
            monthly_use: self.monthly_use?,
            cost: self.cost?,
            schedule: self.schedule?,
        })
    }
}

/// Totals for a whole recommendation set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RecommendationSummary {
    pub total_energy: f64,
    pub total_cost: f64,
}

impl RecommendationSummary {
    pub fn from_cards(cards: &[RecommendationCard]) -> Self {
        cards.iter().fold(Self::default(), |acc, c| Self {
            total_energy: acc.total_energy + c.monthly_use,
            total_cost: acc.total_cost + c.cost,
        })
    }
}

/// Body of the backend's recommendation endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Recommendations {
    pub message: String,
    pub recommendations: Vec<String>,
}
