//! Decision engine.
//!
//! Runs the rule predicates for each record against read-only reference
//! data and resolves them into a [`Decision`]. A batch is evaluated in input
//! order; the first record that cannot be evaluated at all (unknown country,
//! missing structural field) fails the whole batch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::country::CountryTable;
use crate::decision::{resolve, Decision, RuleFlags};
use crate::error::{ConfigError, PapersError, PapersResult};
use crate::policy::ResolutionPolicy;
use crate::record::TravelerRecord;
use crate::rules::{is_on_watchlist, is_quarantine_required, is_record_incomplete, is_visa_invalid};
use crate::snapshot::fingerprint;
use crate::watchlist::Watchlist;

/// Country code of the issuing state.
pub const DEFAULT_CITIZEN_COUNTRY: &str = "KAN";

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Rule ordering policy.
    pub policy: ResolutionPolicy,

    /// Country code whose holders are citizens. Only consulted by
    /// [`ResolutionPolicy::LegacyCitizenFirst`].
    pub citizen_country: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            policy: ResolutionPolicy::Strict,
            citizen_country: DEFAULT_CITIZEN_COUNTRY.to_string(),
        }
    }
}

/// Result of evaluating one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// The resolved decision.
    pub decision: Decision,

    /// Predicate outcomes up to the first rule that fired. Rules after it
    /// were not run and read `false`. All false when the rules were bypassed.
    pub flags: RuleFlags,

    /// The record was accepted as a citizen without running any rule.
    pub citizen_bypass: bool,
}

/// Evaluates records against a fixed watchlist and country table.
///
/// The evaluation instant is captured once at construction, so every record
/// of a batch is judged against the same "now".
#[derive(Debug, Clone)]
pub struct DecisionEngine<'a> {
    watchlist: &'a Watchlist,
    countries: &'a CountryTable,
    config: EngineConfig,
    now: DateTime<Utc>,
}

impl<'a> DecisionEngine<'a> {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new(watchlist: &'a Watchlist, countries: &'a CountryTable) -> Self {
        Self::with_config(watchlist, countries, EngineConfig::default())
    }

    /// Creates an engine with an explicit configuration.
    #[must_use]
    pub fn with_config(
        watchlist: &'a Watchlist,
        countries: &'a CountryTable,
        config: EngineConfig,
    ) -> Self {
        Self {
            watchlist,
            countries,
            config,
            now: Utc::now(),
        }
    }

    /// Pins the evaluation instant.
    #[must_use]
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Runs the predicates in precedence order, stopping at the first one
    /// that fires. Rules below it are never evaluated and stay `false`, so
    /// data they would need cannot fail a record that is already decided.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a rule that has to run cannot be evaluated.
    pub fn flags(&self, record: &TravelerRecord) -> Result<RuleFlags, ConfigError> {
        let quarantine = is_quarantine_required(record, self.countries)?;
        if quarantine {
            return Ok(RuleFlags { quarantine, ..RuleFlags::default() });
        }

        let incomplete = is_record_incomplete(record)?;
        if incomplete {
            return Ok(RuleFlags { incomplete, ..RuleFlags::default() });
        }

        let visa_invalid = is_visa_invalid(record, self.countries, self.now)?;
        if visa_invalid {
            return Ok(RuleFlags { visa_invalid, ..RuleFlags::default() });
        }

        let on_watchlist = is_on_watchlist(
            record.passport()?,
            record.first_name()?,
            record.last_name()?,
            self.watchlist,
        );
        Ok(RuleFlags { on_watchlist, ..RuleFlags::default() })
    }

    /// Evaluates one record.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the record cannot be evaluated.
    pub fn evaluate(&self, record: &TravelerRecord) -> Result<Evaluation, ConfigError> {
        if self.config.policy.citizens_bypass_rules() && self.is_citizen(record)? {
            return Ok(Evaluation {
                decision: Decision::Accept,
                flags: RuleFlags::default(),
                citizen_bypass: true,
            });
        }

        let flags = self.flags(record)?;
        Ok(Evaluation {
            decision: resolve(&flags),
            flags,
            citizen_bypass: false,
        })
    }

    /// Evaluates every record, keeping input order.
    ///
    /// # Errors
    ///
    /// Stops at the first record that cannot be evaluated and returns
    /// `PapersError::Record` with its index. No partial list is returned.
    pub fn evaluate_all(&self, records: &[TravelerRecord]) -> PapersResult<Vec<Evaluation>> {
        let batch_id = Uuid::new_v4();
        let span = info_span!(
            "batch",
            %batch_id,
            policy = self.config.policy.name(),
            records = records.len()
        );
        let _guard = span.enter();

        let mut evaluations = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let evaluation = self.evaluate(record).map_err(|source| {
                warn!(index, error = %source, "record cannot be evaluated");
                PapersError::at_record(index, source)
            })?;
            debug!(
                index,
                decision = %evaluation.decision,
                reason = evaluation.flags.reason().unwrap_or("none"),
                citizen_bypass = evaluation.citizen_bypass,
                "record decided"
            );
            evaluations.push(evaluation);
        }

        let count = |d: Decision| evaluations.iter().filter(|e| e.decision == d).count();
        info!(
            reference = %fingerprint(self.watchlist, self.countries),
            accept = count(Decision::Accept),
            secondary = count(Decision::Secondary),
            reject = count(Decision::Reject),
            quarantine = count(Decision::Quarantine),
            "batch decided"
        );
        Ok(evaluations)
    }

    /// Decides every record, keeping input order.
    ///
    /// # Errors
    ///
    /// See [`DecisionEngine::evaluate_all`].
    pub fn decide(&self, records: &[TravelerRecord]) -> PapersResult<Vec<Decision>> {
        Ok(self
            .evaluate_all(records)?
            .into_iter()
            .map(|e| e.decision)
            .collect())
    }

    fn is_citizen(&self, record: &TravelerRecord) -> Result<bool, ConfigError> {
        Ok(record.home()?.country()? == self.config.citizen_country)
    }
}

/// Decides a batch with the default configuration and the current time.
///
/// # Errors
///
/// See [`DecisionEngine::evaluate_all`].
pub fn decide(
    records: &[TravelerRecord],
    watchlist: &Watchlist,
    countries: &CountryTable,
) -> PapersResult<Vec<Decision>> {
    DecisionEngine::new(watchlist, countries).decide(records)
}
