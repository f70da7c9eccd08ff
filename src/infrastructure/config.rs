use crate::domain::theme::Theme;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub chart: ChartSettings,
    #[serde(default)]
    pub generator: GeneratorSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChartSettings {
    pub poll_interval_ms: u64,
    pub default_range_hours: i64,
    pub default_theme: Theme,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct GeneratorSettings {
    /// Fixed RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = base_builder()?
        .add_source(config::File::with_name("config/app").required(false))
        .add_source(
            config::Environment::with_prefix("SIGNAL_CHART")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

fn base_builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("chart.poll_interval_ms", 2000)?
        .set_default("chart.default_range_hours", 24)?
        .set_default("chart.default_theme", "light")?)
}
