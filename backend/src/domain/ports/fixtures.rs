//! Development account directory shared by the fixture port implementations.
//!
//! One row per onboarding situation so every gatekeeper phase can be
//! reached from a browser without a database.

use crate::domain::{Account, Error, PlanSnapshot, UserId, UserRole};

/// Password shared by all fixture accounts.
pub const FIXTURE_PASSWORD: &str = "password";

pub(crate) struct FixtureAccount {
    pub(crate) email: &'static str,
    pub(crate) id: &'static str,
    pub(crate) role: UserRole,
    pub(crate) needs_password_change: bool,
    pub(crate) needs_license_activation: bool,
    pub(crate) plan: Option<FixturePlan>,
}

pub(crate) struct FixturePlan {
    plan_type: &'static str,
    max_contracts: i64,
    max_licenses: i64,
    current_contracts: i64,
    current_licenses: i64,
}

pub(crate) static FIXTURE_ACCOUNTS: [FixtureAccount; 4] = [
    FixtureAccount {
        email: "admin@portal.test",
        id: "123e4567-e89b-12d3-a456-426614174000",
        role: UserRole::Admin,
        needs_password_change: false,
        needs_license_activation: false,
        plan: Some(FixturePlan {
            plan_type: "professional",
            max_contracts: 10,
            max_licenses: 10,
            current_contracts: 10,
            current_licenses: 4,
        }),
    },
    FixtureAccount {
        email: "finance@portal.test",
        id: "3fa85f64-5717-4562-b3fc-2c963f66afa6",
        role: UserRole::User,
        needs_password_change: false,
        needs_license_activation: false,
        plan: Some(FixturePlan {
            plan_type: "starter",
            max_contracts: 5,
            max_licenses: 2,
            current_contracts: 3,
            current_licenses: 2,
        }),
    },
    FixtureAccount {
        email: "newhire@portal.test",
        id: "9b2f6a1e-8a4d-4c8e-9a53-2f1c0d7e6b10",
        role: UserRole::User,
        needs_password_change: true,
        needs_license_activation: false,
        plan: Some(FixturePlan {
            plan_type: "trial",
            max_contracts: -1,
            max_licenses: 1,
            current_contracts: 12,
            current_licenses: 0,
        }),
    },
    FixtureAccount {
        email: "pending@portal.test",
        id: "5d0c7f0e-3b8e-4f5e-8c1a-6e2b9d4a7c21",
        role: UserRole::User,
        needs_password_change: false,
        needs_license_activation: true,
        plan: None,
    },
];

impl FixtureAccount {
    pub(crate) fn by_email(email: &str) -> Option<&'static Self> {
        FIXTURE_ACCOUNTS.iter().find(|row| row.email == email)
    }

    pub(crate) fn by_id(id: &UserId) -> Option<&'static Self> {
        FIXTURE_ACCOUNTS
            .iter()
            .find(|row| row.id.eq_ignore_ascii_case(id.as_ref()))
    }

    pub(crate) fn user_id(&self) -> Result<UserId, Error> {
        UserId::new(self.id)
            .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))
    }

    pub(crate) fn account(&self) -> Result<Account, Error> {
        Ok(Account {
            id: self.user_id()?,
            role: self.role,
            needs_password_change: self.needs_password_change,
            needs_license_activation: self.needs_license_activation,
        })
    }

    pub(crate) fn plan_snapshot(&self) -> Option<PlanSnapshot> {
        self.plan.as_ref().map(|plan| PlanSnapshot {
            plan_type: plan.plan_type.to_owned(),
            max_contracts: plan.max_contracts,
            max_licenses: plan.max_licenses,
            current_contracts: plan.current_contracts,
            current_licenses: plan.current_licenses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn every_fixture_id_is_valid_and_unique() {
        let mut seen = Vec::new();
        for row in &FIXTURE_ACCOUNTS {
            let id = row.user_id().expect("fixture id parses");
            assert!(!seen.contains(&id), "duplicate fixture id {id}");
            seen.push(id);
        }
    }

    #[rstest]
    fn lookups_by_email_and_id_agree() {
        let row = FixtureAccount::by_email("pending@portal.test").expect("fixture row");
        let id = row.user_id().expect("fixture id");
        let again = FixtureAccount::by_id(&id).expect("lookup by id");
        assert_eq!(again.email, row.email);
        assert!(again.plan_snapshot().is_none());
    }
}
