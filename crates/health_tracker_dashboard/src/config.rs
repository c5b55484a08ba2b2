use std::net::SocketAddr;
use std::path::PathBuf;

use crate::calendar::{DEFAULT_UTC_OFFSET_MINUTES, DisplayCalendar};
use crate::error::{DashboardError, DashboardResult};

pub const DEFAULT_DATABASE_PATH: &str = "./health_tracker.db";
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:8000";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_path: PathBuf,
    pub address: SocketAddr,
    pub calendar: DisplayCalendar,
}

impl Config {
    pub fn from_env() -> DashboardResult<Self> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function instead of the process environment.
    pub fn from_env_with<F>(mut get: F) -> DashboardResult<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let database_path = get("HEALTH_TRACKER_DATABASE_PATH")
            .unwrap_or_else(|| DEFAULT_DATABASE_PATH.into())
            .into();

        let address = match (get("HEALTH_TRACKER_ADDRESS"), get("PORT")) {
            (Some(addr), _) => addr.parse().map_err(|e| {
                DashboardError::Config(format!("invalid HEALTH_TRACKER_ADDRESS {addr:?}: {e}"))
            })?,
            (None, Some(port)) => {
                let port: u16 = port
                    .parse()
                    .map_err(|e| DashboardError::Config(format!("invalid PORT {port:?}: {e}")))?;
                SocketAddr::from(([0, 0, 0, 0], port))
            }
            (None, None) => SocketAddr::from(([127, 0, 0, 1], 8000)),
        };

        let offset_minutes = match get("HEALTH_TRACKER_UTC_OFFSET_MINUTES") {
            Some(raw) => raw.trim().parse::<i32>().map_err(|e| {
                DashboardError::Config(format!(
                    "invalid HEALTH_TRACKER_UTC_OFFSET_MINUTES {raw:?}: {e}"
                ))
            })?,
            None => DEFAULT_UTC_OFFSET_MINUTES,
        };
        let calendar = DisplayCalendar::from_offset_minutes(offset_minutes).ok_or_else(|| {
            DashboardError::Config(format!(
                "HEALTH_TRACKER_UTC_OFFSET_MINUTES out of range: {offset_minutes}"
            ))
        })?;

        Ok(Self {
            database_path,
            address,
            calendar,
        })
    }
}
