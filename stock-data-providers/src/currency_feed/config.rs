use std::time::Duration;

use serde::Deserialize;

/// What the refresh path does when the feed cannot be reached.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConnectFailurePolicy {
    /// Stop refreshing and leave the last published snapshot in place.
    #[default]
    StopRefresh,
    /// Terminate the whole process.
    ExitProcess,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RefreshConfig {
    /// Lower bound on the time between sweep starts. Zero keeps the loop
    /// back-to-back, so the sweep duration is the refresh interval.
    #[serde(default, with = "humantime_serde")]
    pub min_sweep_interval: Duration,
    #[serde(default)]
    pub on_connect_failure: ConnectFailurePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config: RefreshConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.min_sweep_interval, Duration::ZERO);
        assert_eq!(config.on_connect_failure, ConnectFailurePolicy::StopRefresh);
    }

    #[test]
    fn explicit_values() {
        let config: RefreshConfig = serde_yaml::from_str(
            "min_sweep_interval: 1s 500ms\non_connect_failure: exit_process\n",
        )
        .unwrap();
        assert_eq!(config.min_sweep_interval, Duration::from_millis(1500));
        assert_eq!(config.on_connect_failure, ConnectFailurePolicy::ExitProcess);
    }
}
