use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

const DEFAULTS: &str = include_str!("../config/default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Root for `/app/*`; `/assets/*` is served from its `assets` subdirectory.
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub query_timeout_ms: u64,
}

impl DatabaseConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentConfig {
    pub platform: String,
}

impl DeploymentConfig {
    /// Destructive admin actions are only available on the `dev` platform.
    pub fn is_dev(&self) -> bool {
        self.platform == "dev"
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeaturesConfig {
    /// Mounts the user/chirp routes backed by the database.
    pub persistence: bool,
    /// Mounts the stateless `/api/validate_chirp` route.
    pub validate_endpoint: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub deployment: DeploymentConfig,
    pub features: FeaturesConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        // The embedded file is part of the binary; failing to parse it is a build defect.
        match from_toml_str("") {
            Ok(cfg) => cfg,
            Err(e) => panic!("Failed to load embedded default config: {}", e),
        }
    }
}

pub fn load() -> anyhow::Result<AppConfig> {
    // Load .env first (optional)
    let _ = dotenvy::dotenv();

    let mut builder = ::config::Config::builder()
        .add_source(::config::File::from_str(DEFAULTS, ::config::FileFormat::Toml))
        // Optional local file: chirpy.toml (in CWD)
        .add_source(::config::File::with_name("chirpy").required(false));

    if let Ok(custom_path) = std::env::var("CHIRPY_CONFIG") {
        builder = builder.add_source(::config::File::with_name(&custom_path).required(false));
    }
    builder = builder.add_source(::config::Environment::with_prefix("CHIRPY").separator("__"));

    // The historical variable names win over everything else.
    builder = builder
        .set_override_option("database.url", std::env::var("DB_URL").ok())?
        .set_override_option("deployment.platform", std::env::var("PLATFORM").ok())?;

    let app_cfg: AppConfig = builder.build()?.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

/// Embedded defaults overlaid with a TOML fragment, without touching the
/// environment or the working directory.
pub fn from_toml_str(overrides: &str) -> anyhow::Result<AppConfig> {
    let app_cfg: AppConfig = ::config::Config::builder()
        .add_source(::config::File::from_str(DEFAULTS, ::config::FileFormat::Toml))
        .add_source(::config::File::from_str(overrides, ::config::FileFormat::Toml))
        .build()?
        .try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    if cfg.server.port == 0 {
        return Err(anyhow::anyhow!("invalid server.port: {}", cfg.server.port));
    }
    #[cfg(unix)]
    if cfg.server.port < 1024 {
        tracing::warn!("Using privileged port {} - may require elevated permissions", cfg.server.port);
    }

    if cfg.database.url.trim().is_empty() {
        return Err(anyhow::anyhow!("database.url must not be empty"));
    }
    if cfg.database.max_connections == 0 || cfg.database.max_connections > 64 {
        return Err(anyhow::anyhow!("database.max_connections must be in 1..=64"));
    }
    if cfg.database.query_timeout_ms == 0 {
        return Err(anyhow::anyhow!("database.query_timeout_ms must be > 0"));
    }

    if !cfg.features.persistence && !cfg.features.validate_endpoint {
        return Err(anyhow::anyhow!(
            "at least one of features.persistence and features.validate_endpoint must be enabled"
        ));
    }

    Ok(())
}

pub fn ensure_sqlite_parent_dir(url: &str) -> anyhow::Result<()> {
    if let Some(path) = url.strip_prefix("sqlite://") {
        let p = Path::new(path);
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }
    Ok(())
}
