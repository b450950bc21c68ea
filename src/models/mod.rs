pub mod appliance;
pub mod overused;
pub mod recommendation;
pub mod table;

pub use appliance::Appliance;
pub use overused::OverusedDevice;
pub use recommendation::{
    PartialRecommendation, RecommendationCard, RecommendationSummary, Recommendations,
};
pub use table::ApplianceTable;
