//! Plan entitlements: capability flags and remaining quotas.
//!
//! [`resolve`] is a pure function of the plan snapshot and the admin flag.
//! It is recomputed on every request; nothing here is cached or mutated.
//!
//! | flag                   | starter | professional | enterprise |
//! |------------------------|---------|--------------|------------|
//! | `has_advanced_reports` | no      | yes          | yes        |
//! | `has_audit_trail`      | no      | yes          | yes        |
//! | `has_api_access`       | no      | no           | yes        |
//! | `has_multi_currency`   | no      | yes          | yes        |
//! | `has_custom_branding`  | no      | no           | yes        |
//! | `has_priority_support` | no      | no           | yes        |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{PlanSnapshot, PlanTier, Quota, UNLIMITED_SENTINEL};

/// Plan-gated capabilities that do not depend on quotas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSet {
    /// Disaggregation and waterfall reports.
    pub has_advanced_reports: bool,
    /// Immutable change history on contracts and the ledger.
    pub has_audit_trail: bool,
    /// Programmatic access through API keys.
    pub has_api_access: bool,
    /// Contracts in more than one currency.
    pub has_multi_currency: bool,
    /// Tenant logo and colours on exported documents.
    pub has_custom_branding: bool,
    /// Priority support channel.
    pub has_priority_support: bool,
}

impl FeatureSet {
    const NONE: Self = Self {
        has_advanced_reports: false,
        has_audit_trail: false,
        has_api_access: false,
        has_multi_currency: false,
        has_custom_branding: false,
        has_priority_support: false,
    };

    const ALL: Self = Self {
        has_advanced_reports: true,
        has_audit_trail: true,
        has_api_access: true,
        has_multi_currency: true,
        has_custom_branding: true,
        has_priority_support: true,
    };

    /// Matrix row for a tier.
    #[must_use]
    pub const fn for_tier(tier: PlanTier) -> Self {
        match tier {
            PlanTier::Starter => Self::NONE,
            PlanTier::Professional => Self {
                has_advanced_reports: true,
                has_audit_trail: true,
                has_multi_currency: true,
                ..Self::NONE
            },
            PlanTier::Enterprise => Self::ALL,
        }
    }

    /// Whether the row grants the given feature. Quota keys are never part
    /// of a row and always read as `false`.
    #[must_use]
    pub fn grants(&self, feature: FeatureKey) -> bool {
        match feature {
            FeatureKey::AdvancedReports => self.has_advanced_reports,
            FeatureKey::AuditTrail => self.has_audit_trail,
            FeatureKey::ApiAccess => self.has_api_access,
            FeatureKey::MultiCurrency => self.has_multi_currency,
            FeatureKey::CustomBranding => self.has_custom_branding,
            FeatureKey::PrioritySupport => self.has_priority_support,
            FeatureKey::Contracts | FeatureKey::Licenses => false,
        }
    }
}

/// Resolved entitlements for the current account.
///
/// Remaining counts serialise with `-1` for unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entitlements {
    /// Matrix capabilities.
    #[serde(flatten)]
    pub features: FeatureSet,
    /// Another contract may be created.
    pub can_create_contract: bool,
    /// Another licence may be issued.
    pub can_create_license: bool,
    /// A higher tier exists to upgrade to.
    pub can_upgrade: bool,
    /// Contracts that may still be created.
    pub contracts_remaining: Quota,
    /// Licences that may still be issued.
    pub licenses_remaining: Quota,
    /// The plan carries no contract cap.
    pub is_unlimited: bool,
}

impl Entitlements {
    /// Everything granted, nothing capped.
    pub const FULL_ACCESS: Self = Self {
        features: FeatureSet::ALL,
        can_create_contract: true,
        can_create_license: true,
        can_upgrade: true,
        contracts_remaining: Quota::Unlimited,
        licenses_remaining: Quota::Unlimited,
        is_unlimited: true,
    };

    /// Nothing granted, zero allowance.
    pub const NO_ACCESS: Self = Self {
        features: FeatureSet::NONE,
        can_create_contract: false,
        can_create_license: false,
        can_upgrade: false,
        contracts_remaining: Quota::NONE,
        licenses_remaining: Quota::NONE,
        is_unlimited: false,
    };

    /// Whether the given feature key is currently usable.
    #[must_use]
    pub fn allows(&self, feature: FeatureKey) -> bool {
        match feature {
            FeatureKey::Contracts => self.can_create_contract,
            FeatureKey::Licenses => self.can_create_license,
            other => self.features.grants(other),
        }
    }
}

/// Compute entitlements from a plan snapshot.
///
/// Administrators always get [`Entitlements::FULL_ACCESS`]. Without a
/// snapshot (not fetched yet, or the fetch failed) the result is
/// [`Entitlements::NO_ACCESS`].
///
/// # Examples
/// ```
/// use portal::domain::{resolve, Entitlements, PlanSnapshot, Quota};
///
/// let plan = PlanSnapshot {
///     plan_type: "starter".into(),
///     max_contracts: 5,
///     max_licenses: 2,
///     current_contracts: 3,
///     current_licenses: 2,
/// };
/// let resolved = resolve(Some(&plan), false);
/// assert_eq!(resolved.contracts_remaining, Quota::Limited(2));
/// assert!(resolved.can_create_contract);
/// assert!(!resolved.can_create_license);
/// assert_eq!(resolve(None, false), Entitlements::NO_ACCESS);
/// ```
#[must_use]
pub fn resolve(plan: Option<&PlanSnapshot>, is_admin: bool) -> Entitlements {
    if is_admin {
        return Entitlements::FULL_ACCESS;
    }
    let Some(plan) = plan else {
        return Entitlements::NO_ACCESS;
    };

    let tier = plan.tier();
    let is_unlimited = plan.max_contracts == UNLIMITED_SENTINEL;
    let (contracts_remaining, licenses_remaining) = if is_unlimited {
        (Quota::Unlimited, Quota::Unlimited)
    } else {
        (
            Quota::remaining(plan.max_contracts, plan.current_contracts),
            Quota::remaining(plan.max_licenses, plan.current_licenses),
        )
    };

    Entitlements {
        features: FeatureSet::for_tier(tier),
        can_create_contract: is_unlimited || contracts_remaining.has_room(),
        can_create_license: is_unlimited || licenses_remaining.has_room(),
        can_upgrade: tier.next().is_some(),
        contracts_remaining,
        licenses_remaining,
        is_unlimited,
    }
}

/// Keys for upgrade prompts: the six matrix features plus the two quotas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureKey {
    /// See [`FeatureSet::has_advanced_reports`].
    AdvancedReports,
    /// See [`FeatureSet::has_audit_trail`].
    AuditTrail,
    /// See [`FeatureSet::has_api_access`].
    ApiAccess,
    /// See [`FeatureSet::has_multi_currency`].
    MultiCurrency,
    /// See [`FeatureSet::has_custom_branding`].
    CustomBranding,
    /// See [`FeatureSet::has_priority_support`].
    PrioritySupport,
    /// Contract quota.
    Contracts,
    /// Licence quota.
    Licenses,
}

/// Raised when a feature key is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feature key: {0}")]
pub struct UnknownFeatureKey(pub String);

impl FeatureKey {
    /// Every key in display order.
    pub const ALL: [Self; 8] = [
        Self::AdvancedReports,
        Self::AuditTrail,
        Self::ApiAccess,
        Self::MultiCurrency,
        Self::CustomBranding,
        Self::PrioritySupport,
        Self::Contracts,
        Self::Licenses,
    ];

    /// Wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AdvancedReports => "advancedReports",
            Self::AuditTrail => "auditTrail",
            Self::ApiAccess => "apiAccess",
            Self::MultiCurrency => "multiCurrency",
            Self::CustomBranding => "customBranding",
            Self::PrioritySupport => "prioritySupport",
            Self::Contracts => "contracts",
            Self::Licenses => "licenses",
        }
    }

    /// Whether the key is a quota rather than a matrix feature.
    #[must_use]
    pub fn is_quota(self) -> bool {
        matches!(self, Self::Contracts | Self::Licenses)
    }

    /// Message shown when the feature is out of reach.
    #[must_use]
    pub fn upgrade_message(self) -> &'static str {
        match self {
            Self::AdvancedReports => {
                "Upgrade to unlock disaggregated revenue and contract waterfall reports."
            }
            Self::AuditTrail => "Upgrade to keep a full audit trail of contract and ledger changes.",
            Self::ApiAccess => "API access is available on the Enterprise plan.",
            Self::MultiCurrency => "Upgrade to manage contracts in multiple currencies.",
            Self::CustomBranding => "Custom branding is available on the Enterprise plan.",
            Self::PrioritySupport => "Priority support is available on the Enterprise plan.",
            Self::Contracts => "You have reached your plan's contract limit. Upgrade to add more.",
            Self::Licenses => "You have reached your plan's licence limit. Upgrade to add more.",
        }
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureKey {
    type Err = UnknownFeatureKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownFeatureKey(s.to_owned()))
    }
}

/// Upgrade suggestion for a feature the account cannot use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradePrompt {
    /// Feature the prompt is about.
    pub feature: FeatureKey,
    /// Message to show.
    pub message: String,
    /// Plan to suggest, `None` when nothing higher is available.
    pub suggested_plan: Option<PlanTier>,
}

impl UpgradePrompt {
    /// Build the prompt for `feature` given the account's current tier.
    ///
    /// Matrix features suggest the cheapest tier that grants them; quota
    /// keys suggest the next tier up from the current one.
    ///
    /// # Examples
    /// ```
    /// use portal::domain::{FeatureKey, PlanTier, UpgradePrompt};
    ///
    /// let prompt = UpgradePrompt::for_feature(FeatureKey::ApiAccess, Some(PlanTier::Starter));
    /// assert_eq!(prompt.suggested_plan, Some(PlanTier::Enterprise));
    /// ```
    #[must_use]
    pub fn for_feature(feature: FeatureKey, current: Option<PlanTier>) -> Self {
        let suggested_plan = if feature.is_quota() {
            current.map_or(Some(PlanTier::Starter), PlanTier::next)
        } else {
            PlanTier::ALL
                .into_iter()
                .find(|tier| FeatureSet::for_tier(*tier).grants(feature))
                .filter(|tier| current.is_none_or(|now| *tier > now))
        };
        Self {
            feature,
            message: feature.upgrade_message().to_owned(),
            suggested_plan,
        }
    }
}
