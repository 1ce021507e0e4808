pub mod report;
pub mod value;

pub use report::{DateRange, ReportOutput};
pub use value::{bytes_to_tb, convert_unit, parse_grouped_bytes, parse_traffic_value};
