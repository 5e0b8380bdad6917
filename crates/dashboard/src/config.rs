//! Environment configuration for the dashboard binary.

use std::path::PathBuf;
use std::str::FromStr;

use stockshift_recommend::{
    DEFAULT_CRITICAL_DEFICIT, DEFAULT_MAX_SUGGESTIONS, DEFAULT_MIN_SURPLUS,
    DEFAULT_URGENT_SHELF_LIFE_DAYS, TransferRecommender,
};

pub const SNAPSHOT_ENV: &str = "STOCKSHIFT_SNAPSHOT";
pub const MAX_SUGGESTIONS_ENV: &str = "STOCKSHIFT_MAX_SUGGESTIONS";
pub const MIN_SURPLUS_ENV: &str = "STOCKSHIFT_SURPLUS_THRESHOLD";
pub const CRITICAL_DEFICIT_ENV: &str = "STOCKSHIFT_CRITICAL_DEFICIT";
pub const URGENT_SHELF_LIFE_ENV: &str = "STOCKSHIFT_URGENT_SHELF_LIFE";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardConfig {
    pub snapshot_path: Option<PathBuf>,
    pub recommender: TransferRecommender,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source. Unparsable values are
    /// logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let snapshot_path = lookup(SNAPSHOT_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let recommender = TransferRecommender::new()
            .with_max_suggestions(setting(&lookup, MAX_SUGGESTIONS_ENV, DEFAULT_MAX_SUGGESTIONS))
            .with_min_surplus(setting(&lookup, MIN_SURPLUS_ENV, DEFAULT_MIN_SURPLUS))
            .with_critical_deficit(setting(&lookup, CRITICAL_DEFICIT_ENV, DEFAULT_CRITICAL_DEFICIT))
            .with_urgent_shelf_life(setting(
                &lookup,
                URGENT_SHELF_LIFE_ENV,
                DEFAULT_URGENT_SHELF_LIFE_DAYS,
            ));

        Self {
            snapshot_path,
            recommender,
        }
    }
}

fn setting<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy + core::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, %default, "invalid setting; using default");
            default
        }),
    }
}
