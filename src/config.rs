use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Deserialize;

/// Server configuration.
///
/// Built from defaults, then an optional YAML file (`--config <path>`),
/// then a positional port argument.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interface to bind (loopback unless overridden)
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
    /// Directory to serve; the working directory when unset
    pub root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            root: None,
        }
    }
}

impl Config {
    /// Loads the configuration from the process arguments.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_args(std::env::args().skip(1))
    }

    /// Builds a configuration from command-line style arguments
    /// (program name already stripped).
    pub fn from_args<I, S>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config_file = None;
        let mut port = None;

        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            if arg == "--config" {
                let path = args.next().context("--config requires a file path")?;
                config_file = Some(PathBuf::from(path));
            } else if port.is_none() {
                let parsed = arg
                    .parse::<u16>()
                    .with_context(|| format!("invalid port argument: {arg}"))?;
                port = Some(parsed);
            } else {
                bail!("unexpected argument: {arg}");
            }
        }

        let mut cfg = match config_file {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if let Some(port) = port {
            cfg.port = port;
        }

        Ok(cfg)
    }

    /// Reads a YAML configuration file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Address string suitable for `TcpListener::bind`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Absolute, canonical directory that requests are served from.
    ///
    /// Captured once at startup; later changes to the working directory
    /// do not move the served tree.
    pub fn root_dir(&self) -> anyhow::Result<PathBuf> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("failed to read working directory")?,
        };
        root.canonicalize()
            .with_context(|| format!("root directory {} is not accessible", root.display()))
    }
}
