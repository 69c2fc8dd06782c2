//! Rule predicates.
//!
//! Each predicate is pure: it reads one record plus read-only reference
//! data and answers a single yes/no question. Combining the answers into a
//! decision is the job of [`crate::decision::resolve`].

mod completeness;
mod quarantine;
mod visa;
mod watchlist;

pub use completeness::is_record_incomplete;
pub use quarantine::is_quarantine_required;
pub use visa::is_visa_invalid;
pub use watchlist::is_on_watchlist;
