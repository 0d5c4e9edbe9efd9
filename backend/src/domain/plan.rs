//! Subscription plans and quota counters.
//!
//! A [`PlanSnapshot`] is the server-reported state of a tenant's subscription
//! at fetch time. It is never mutated locally.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

/// Resource identifier under which the plan snapshot is fetched.
pub const PLAN_RESOURCE_KEY: &str = "plan";

/// Wire value standing for "no limit" in count fields.
pub const UNLIMITED_SENTINEL: i64 = -1;

/// Subscription tier.
///
/// Variants are ordered from cheapest to most capable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    /// Entry tier.
    Starter,
    /// Mid tier.
    Professional,
    /// Top tier.
    Enterprise,
}

impl PlanTier {
    /// Every tier, cheapest first.
    pub const ALL: [Self; 3] = [Self::Starter, Self::Professional, Self::Enterprise];

    /// Resolve a wire label, falling back to [`PlanTier::Starter`] for
    /// labels this service does not know.
    ///
    /// # Examples
    /// ```
    /// use portal::domain::PlanTier;
    ///
    /// assert_eq!(PlanTier::from_label("enterprise"), PlanTier::Enterprise);
    /// assert_eq!(PlanTier::from_label("trial"), PlanTier::Starter);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "starter" => Self::Starter,
            "professional" => Self::Professional,
            "enterprise" => Self::Enterprise,
            other => {
                debug!(plan_type = other, "unknown plan type; using starter");
                Self::Starter
            }
        }
    }

    /// Wire label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Professional => "professional",
            Self::Enterprise => "enterprise",
        }
    }

    /// Name shown to customers.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Professional => "Professional",
            Self::Enterprise => "Enterprise",
        }
    }

    /// The next tier up, or `None` at the top.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Starter => Some(Self::Professional),
            Self::Professional => Some(Self::Enterprise),
            Self::Enterprise => None,
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Server-reported subscription state.
///
/// `max_*` fields use [`UNLIMITED_SENTINEL`] for "no limit". `plan_type`
/// keeps the raw label so unknown tiers survive a round trip; use
/// [`PlanSnapshot::tier`] for the resolved tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSnapshot {
    /// Raw plan label as reported by the billing service.
    pub plan_type: String,
    /// Contract allowance, `-1` for unlimited.
    pub max_contracts: i64,
    /// Licence allowance, `-1` for unlimited.
    pub max_licenses: i64,
    /// Contracts currently on file.
    pub current_contracts: i64,
    /// Licences currently issued.
    pub current_licenses: i64,
}

impl PlanSnapshot {
    /// Resolved tier, with unknown labels mapped to starter.
    #[must_use]
    pub fn tier(&self) -> PlanTier {
        PlanTier::from_label(&self.plan_type)
    }
}

/// Remaining allowance for a countable resource.
///
/// Serialises as a plain integer with `-1` meaning unlimited, so the
/// unbounded case never leaks across the API boundary as anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quota {
    /// At most this many more may be created.
    Limited(u64),
    /// No limit applies.
    Unlimited,
}

impl Quota {
    /// No allowance left.
    pub const NONE: Self = Self::Limited(0);

    /// Remaining allowance given a cap and current usage.
    ///
    /// Usage above the cap saturates at zero.
    ///
    /// # Examples
    /// ```
    /// use portal::domain::Quota;
    ///
    /// assert_eq!(Quota::remaining(5, 3), Quota::Limited(2));
    /// assert_eq!(Quota::remaining(10, 12), Quota::Limited(0));
    /// assert_eq!(Quota::remaining(-1, 400), Quota::Unlimited);
    /// ```
    #[must_use]
    pub fn remaining(max: i64, current: i64) -> Self {
        if max == UNLIMITED_SENTINEL {
            return Self::Unlimited;
        }
        let left = max.saturating_sub(current).max(0);
        Self::Limited(u64::try_from(left).unwrap_or_default())
    }

    /// Whether at least one more item may be created.
    #[must_use]
    pub fn has_room(self) -> bool {
        match self {
            Self::Limited(left) => left > 0,
            Self::Unlimited => true,
        }
    }

    /// Wire representation.
    #[must_use]
    pub fn as_wire(self) -> i64 {
        match self {
            Self::Limited(left) => i64::try_from(left).unwrap_or(i64::MAX),
            Self::Unlimited => UNLIMITED_SENTINEL,
        }
    }

    /// Parse the wire representation; any negative value reads as unlimited.
    #[must_use]
    pub fn from_wire(value: i64) -> Self {
        u64::try_from(value).map_or(Self::Unlimited, Self::Limited)
    }
}

impl Serialize for Quota {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for Quota {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::from_wire)
    }
}
