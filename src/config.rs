//! Registry configuration.
//!
//! Loaded from environment variables with defaults; a value that does not parse is
//! logged and replaced by its default rather than aborting startup.

use crate::model::EnrollmentStatus;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

pub const MAILBOX_CAPACITY_VAR: &str = "REGISTRY_MAILBOX_CAPACITY";
pub const SEAT_RELEASE_POLICY_VAR: &str = "REGISTRY_SEAT_RELEASE_POLICY";
pub const COURSE_CATALOG_VAR: &str = "REGISTRY_COURSE_CATALOG";

/// Whether dropping an enrollment gives a seat back to the course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeatReleasePolicy {
    /// Only a dropped ALLOCATED enrollment frees a seat.
    #[default]
    AllocatedOnly,
    /// Every dropped enrollment frees a seat, including waitlisted ones that never held one.
    /// Repeated waitlisted drops can push `available_seats` above the original capacity.
    Always,
}

impl SeatReleasePolicy {
    /// Whether dropping an enrollment in `status` gives its course a seat back.
    pub fn frees_seat(self, status: EnrollmentStatus) -> bool {
        match self {
            SeatReleasePolicy::AllocatedOnly => status == EnrollmentStatus::Allocated,
            SeatReleasePolicy::Always => true,
        }
    }
}

impl FromStr for SeatReleasePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allocated-only" => Ok(SeatReleasePolicy::AllocatedOnly),
            "always" => Ok(SeatReleasePolicy::Always),
            other => Err(format!(
                "unknown seat release policy '{other}' (expected allocated-only or always)"
            )),
        }
    }
}

impl Display for SeatReleasePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeatReleasePolicy::AllocatedOnly => write!(f, "allocated-only"),
            SeatReleasePolicy::Always => write!(f, "always"),
        }
    }
}

/// Runtime settings for a [`RegistrationSystem`](crate::lifecycle::RegistrationSystem).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Bounded mailbox size of every store actor.
    pub mailbox_capacity: usize,
    pub seat_release_policy: SeatReleasePolicy,
    /// JSON catalog seeded into the course store at startup.
    pub course_catalog: Option<PathBuf>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            seat_release_policy: SeatReleasePolicy::default(),
            course_catalog: None,
        }
    }
}

impl RegistryConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let mailbox_capacity = parse_or(
            MAILBOX_CAPACITY_VAR,
            lookup(MAILBOX_CAPACITY_VAR),
            defaults.mailbox_capacity,
        );
        let mailbox_capacity = if mailbox_capacity == 0 {
            warn!(var = MAILBOX_CAPACITY_VAR, "Mailbox capacity must be positive, using default");
            defaults.mailbox_capacity
        } else {
            mailbox_capacity
        };

        Self {
            mailbox_capacity,
            seat_release_policy: parse_or(
                SEAT_RELEASE_POLICY_VAR,
                lookup(SEAT_RELEASE_POLICY_VAR),
                defaults.seat_release_policy,
            ),
            course_catalog: lookup(COURSE_CATALOG_VAR)
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

fn parse_or<T>(var: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|err| {
            warn!(var, value = %raw, error = %err, fallback = %default, "Invalid setting, using default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        assert_eq!(RegistryConfig::from_lookup(lookup(&[])), RegistryConfig::default());
        assert_eq!(RegistryConfig::default().mailbox_capacity, 32);
        assert_eq!(
            RegistryConfig::default().seat_release_policy,
            SeatReleasePolicy::AllocatedOnly
        );
    }

    #[test]
    fn test_reads_every_variable() {
        let config = RegistryConfig::from_lookup(lookup(&[
            (MAILBOX_CAPACITY_VAR, "128"),
            (SEAT_RELEASE_POLICY_VAR, "Always"),
            (COURSE_CATALOG_VAR, "data/courses.json"),
        ]));

        assert_eq!(config.mailbox_capacity, 128);
        assert_eq!(config.seat_release_policy, SeatReleasePolicy::Always);
        assert_eq!(config.course_catalog, Some(PathBuf::from("data/courses.json")));
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = RegistryConfig::from_lookup(lookup(&[
            (MAILBOX_CAPACITY_VAR, "lots"),
            (SEAT_RELEASE_POLICY_VAR, "sometimes"),
            (COURSE_CATALOG_VAR, "  "),
        ]));
        assert_eq!(config, RegistryConfig::default());

        let zero = RegistryConfig::from_lookup(lookup(&[(MAILBOX_CAPACITY_VAR, "0")]));
        assert_eq!(zero.mailbox_capacity, 32);
    }

    #[test]
    fn test_frees_seat() {
        assert!(SeatReleasePolicy::AllocatedOnly.frees_seat(EnrollmentStatus::Allocated));
        assert!(!SeatReleasePolicy::AllocatedOnly.frees_seat(EnrollmentStatus::Waitlisted));
        assert!(SeatReleasePolicy::Always.frees_seat(EnrollmentStatus::Waitlisted));
    }

    #[test]
    fn test_policy_round_trips_through_display() {
        for policy in [SeatReleasePolicy::AllocatedOnly, SeatReleasePolicy::Always] {
            assert_eq!(policy.to_string().parse::<SeatReleasePolicy>(), Ok(policy));
        }
    }
}
