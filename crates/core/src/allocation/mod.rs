//! The flight-time bucket allocation engine
//!
//! Expands a quick entry into the full bucket grid: the rule table picks
//! the primary "home" bucket from (role, engine class, night), tags add
//! qualifier buckets, caller overrides are merge-patched last, and the
//! totalizer derives the reconciled flight hours.

pub mod allocator;
pub mod rules;
pub mod totals;
pub mod validate;

pub use allocator::allocate;
pub use totals::{primary_sum, total_hours};
pub use validate::{validate_sum, validate_xc_subset};
