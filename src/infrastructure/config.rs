use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub patient: PatientSettings,
    pub poll: PollSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PatientSettings {
    pub host: String,
    pub timeout_secs: u64,
}

impl PatientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PollSettings {
    pub interval_ms: u64,
}

impl PollSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Load settings from config/dashboard.toml when present, falling back to
/// defaults that match the doctor's local setup.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .set_default("patient.host", "localhost:8080")?
        .set_default("patient.timeout_secs", 10_u64)?
        .set_default("poll.interval_ms", 2000_u64)?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dashboard_settings() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                "[patient]\nhost = \"patient:9090\"\ntimeout_secs = 3\n\n[poll]\ninterval_ms = 500\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let config: DashboardConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.patient.host, "patient:9090");
        assert_eq!(config.patient.timeout(), Duration::from_secs(3));
        assert_eq!(config.poll.interval(), Duration::from_millis(500));
    }
}
