pub mod header;
pub mod overuse;
pub mod recommendation;
pub mod stats;
pub mod tariff;

pub use header::{HeaderDecision, HeaderSchema, split_header_line, validate_header};
pub use overuse::find_overused_devices;
pub use recommendation::{LenientParser, ParseRecommendation, StrictParser, parse_summary_line};
pub use stats::{ApplianceSummary, arg_max, devices_by_location};
