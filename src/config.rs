//! Layered configuration: defaults → config file → environment → CLI.

use clap::Parser;
use config::{Config, Environment};
use serde::Deserialize;

/// Command-line interface. Every flag has an environment fallback handled
/// by clap, on top of the `HEROES_`-prefixed variables handled by the
/// config layer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Host to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub preview: PreviewConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PreviewConfig {
    /// Title shown on the catalog index.
    pub catalog_title: String,
    /// Directory served under /static.
    pub static_dir: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Load with explicit arguments; the test seam for CLI behavior.
    ///
    /// Precedence, lowest to highest: built-in defaults, config file
    /// (`--config`/`CONFIG_FILE`, else `./config.yaml` when present),
    /// `HEROES_`-prefixed environment variables (`__` separator, e.g.
    /// `HEROES_SERVER__PORT`), explicit CLI flags.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder();

        builder = builder
            .set_default("server.port", 6006)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("preview.catalog_title", "Leptos Heroes")?
            .set_default("preview.static_dir", "static")?;

        if let Some(path) = &cli.config {
            builder = builder.add_source(config::File::with_name(path));
        } else if std::path::Path::new("config.yaml").exists() {
            builder = builder.add_source(config::File::with_name("config.yaml"));
        }

        builder = builder.add_source(
            Environment::with_prefix("HEROES")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // CLI flags (and their env fallbacks) win over everything.
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(dir) = cli.static_dir {
            builder = builder.set_override("preview.static_dir", dir)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
