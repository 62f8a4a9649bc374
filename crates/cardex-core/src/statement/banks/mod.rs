//! Issuer extraction strategies.
//!
//! One module per supported issuer, each holding its five priority-ordered
//! rule tables (most layout-specific variant first, loosest variant last).
//! Tables are compiled once at first use and shared across documents.

mod axis;
mod citi;
mod hdfc;
mod icici;
mod sbi;

pub use axis::AxisParser;
pub use citi::CitiParser;
pub use hdfc::HdfcParser;
pub use icici::IciciParser;
pub use sbi::SbiParser;

use super::StatementParser;

/// Build the full strategy registry with the given plausibility floor.
pub fn all_parsers(min_total_due: f64) -> Vec<Box<dyn StatementParser>> {
    vec![
        Box::new(HdfcParser::new().with_min_total(min_total_due)),
        Box::new(IciciParser::new().with_min_total(min_total_due)),
        Box::new(SbiParser::new().with_min_total(min_total_due)),
        Box::new(AxisParser::new().with_min_total(min_total_due)),
        Box::new(CitiParser::new().with_min_total(min_total_due)),
    ]
}
