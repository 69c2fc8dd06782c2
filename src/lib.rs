//! # papers - border-entry decision engine
//!
//! Given a traveler record plus reference data (a watchlist and a table of
//! per-country policies), papers produces exactly one disposition per
//! record: `Accept`, `Reject`, `Secondary` or `Quarantine`.
//!
//! ## Core Concepts
//!
//! - **Rules**: four independent predicates (medical advisory, record
//!   completeness, visa validity, watchlist membership)
//! - **Resolver**: fixed precedence `Quarantine > Reject > Secondary > Accept`
//! - **Engine**: evaluates a batch in input order against read-only reference
//!   data, failing fast on records that cannot be evaluated at all
//!
//! ## Usage
//!
//! ```rust
//! use papers::{CountryPolicy, CountryTable, Decision, DecisionEngine, TravelerRecord, Watchlist};
//!
//! let countries = CountryTable::new()
//!     .with("KAN", CountryPolicy::open())
//!     .with("MEX", CountryPolicy::open().with_advisory("malaria"));
//! let watchlist = Watchlist::default();
//!
//! let record = TravelerRecord::builder()
//!     .passport("ABCDE-ABCDE-ABCDE-ABCDE-ABCDE")
//!     .name("A", "B")
//!     .home("KAN")
//!     .from("MEX")
//!     .entry_reason("returning")
//!     .build();
//!
//! let engine = DecisionEngine::new(&watchlist, &countries);
//! assert_eq!(engine.decide(&[record])?, vec![Decision::Quarantine]);
//! # Ok::<(), papers::PapersError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Reference data and records
pub mod country;
pub mod record;
pub mod watchlist;

// Rules and resolution
pub mod decision;
pub mod format;
pub mod policy;
pub mod rules;

// Evaluation and I/O
pub mod engine;
pub mod error;
pub mod loader;
pub mod snapshot;

// Re-export primary types at crate root for convenience
pub use country::{CountryPolicy, CountryTable};
pub use decision::{resolve, Decision, RuleFlags};
pub use engine::{decide, DecisionEngine, EngineConfig, Evaluation, DEFAULT_CITIZEN_COUNTRY};
pub use error::{ConfigError, LoadError, PapersError, PapersResult};
pub use loader::{decide_files, load_config, load_countries, load_records, load_watchlist};
pub use policy::ResolutionPolicy;
pub use record::{EntryReason, FieldValue, TravelerRecord, TravelerRecordBuilder};
pub use watchlist::{Watchlist, WatchlistEntry};
