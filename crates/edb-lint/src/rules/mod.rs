//! The fixed, domain-specific rule set.

mod desc_length;
mod desc_presence;
mod pv_syntax;
mod units_present;
mod units_valid;

pub use desc_length::DescriptionLength;
pub use desc_presence::DescriptionPresence;
pub use pv_syntax::PvSyntax;
pub use units_present::UnitsPresent;
pub use units_valid::UnitsValid;

use crate::engine::LintRule;

/// Every rule the engine runs by default, in report order.
pub fn default_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        Box::new(UnitsPresent),
        Box::new(DescriptionLength),
        Box::new(UnitsValid),
        Box::new(DescriptionPresence),
        Box::new(PvSyntax),
    ]
}
