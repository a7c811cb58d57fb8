//! # bee Docs Server Configuration
//!
//! File: cli/src/commands/rundocs/config.rs
//! Author: bee Contributors
//!
//! ## Overview
//!
//! This module turns the `rundocs` flags into the explicit `DocsConfig` that
//! the download, install and serve steps receive. Settings come from, in
//! order of priority:
//! 1. Command-line flags (`-isDownload`, `-docport`)
//! 2. Environment variables (`BEE_DOCS_DOWNLOAD`, `BEE_DOCPORT`)
//! 3. A `.bee-docs.toml` file in the working directory (if present)
//! 4. Default values
//!
//! The flags keep their historical Go-style spelling. `normalize_go_style_flags`
//! rewrites `-isDownload=true` into `--isDownload=true` before clap sees it, so
//! both spellings work.
//!
//! ## Examples
//!
//! Configuration file format (all keys optional):
//!
//! ```toml
//! docport = "9000"
//! swagger_version = "3"
//! download_url = "https://mirror.example/swagger-v3.zip"
//! ```
//!
//! Loading the configuration:
//!
//! ```rust
//! let args = RundocsArgs::parse_from(["rundocs", "--isDownload=true"]);
//! let config = load_config(args, &env::current_dir()?)?;
//! assert!(config.download);
//! ```
//!
use crate::core::error::{DocsError, Result};
use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Port the docs server listens on when none is configured.
pub const DEFAULT_DOC_PORT: &str = "8089";

/// Version of the Swagger UI bundle fetched by default.
pub const DEFAULT_SWAGGER_VERSION: &str = "2";

/// Name of the downloaded archive inside the working directory.
pub const ARCHIVE_FILE_NAME: &str = "swagger.zip";

/// Name of the directory that is served.
pub const DOCS_DIR_NAME: &str = "swagger";

/// Optional per-project settings file, looked up in the working directory.
const CONFIG_FILE_NAME: &str = ".bee-docs.toml";

/// Long flags that may be written with a single leading dash.
const GO_STYLE_FLAGS: [&str; 2] = ["isDownload", "docport"];

/// # Rundocs Command Arguments (`RundocsArgs`)
///
/// Flags accepted by `bee rundocs`. Both values are kept as strings to match
/// their historical behavior: only the literal `true` triggers a download,
/// and an empty port falls back to the default.
#[derive(Parser, Debug)]
pub struct RundocsArgs {
    /// Download and install the Swagger docs before serving (only the literal `true` enables it).
    #[arg(
        long = "isDownload",
        short = 'd',
        env = "BEE_DOCS_DOWNLOAD",
        default_value = ""
    )]
    pub is_download: String,

    /// Port for the docs server [default: 8089].
    #[arg(long = "docport", short = 'p', env = "BEE_DOCPORT")]
    pub docport: Option<String>,
}

/// # Effective Docs Configuration (`DocsConfig`)
///
/// Everything the `rundocs` steps need, resolved once at startup and passed
/// explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsConfig {
    /// Download and install the bundle before serving.
    pub download: bool,
    /// Port to serve on, as given. Parsed by [`DocsConfig::port_number`].
    pub port: String,
    /// Directory that holds the archive and the extracted docs.
    pub work_dir: PathBuf,
    /// Version embedded in the archive URL and the extracted directory name.
    pub swagger_version: String,
    /// Where the archive is downloaded from.
    pub download_url: String,
}

/// Settings read from `.bee-docs.toml`.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    docport: Option<String>,
    swagger_version: Option<String>,
    download_url: Option<String>,
}

/// Builds the upstream archive URL for a Swagger UI bundle version.
pub fn swagger_url(version: &str) -> String {
    format!("https://github.com/beego/swagger/archive/v{}.zip", version)
}

impl DocsConfig {
    /// Default configuration rooted at `work_dir`.
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            download: false,
            port: DEFAULT_DOC_PORT.to_string(),
            work_dir: work_dir.into(),
            swagger_version: DEFAULT_SWAGGER_VERSION.to_string(),
            download_url: swagger_url(DEFAULT_SWAGGER_VERSION),
        }
    }

    pub fn archive_path(&self) -> PathBuf {
        self.work_dir.join(ARCHIVE_FILE_NAME)
    }

    /// The canonical directory that gets served.
    pub fn docs_dir(&self) -> PathBuf {
        self.work_dir.join(DOCS_DIR_NAME)
    }

    /// The top-level directory the archive extracts to, e.g. `swagger-2`.
    pub fn versioned_dir(&self) -> PathBuf {
        self.work_dir
            .join(format!("{}-{}", DOCS_DIR_NAME, self.swagger_version))
    }

    /// Parses the configured port; an empty value means the default.
    pub fn port_number(&self) -> std::result::Result<u16, DocsError> {
        let raw = if self.port.is_empty() {
            DEFAULT_DOC_PORT
        } else {
            self.port.trim()
        };
        raw.parse()
            .map_err(|_| DocsError::InvalidPort(self.port.clone()))
    }
}

/// # Load Docs Configuration (`load_config`)
///
/// Merges parsed arguments with `.bee-docs.toml` from `work_dir` and the
/// defaults.
///
/// ## Arguments
///
/// * `args` - The parsed `rundocs` flags (environment fallbacks applied).
/// * `work_dir` - Directory searched for `.bee-docs.toml`; all paths are
///   resolved against it.
///
/// ## Returns
///
/// * `Result<DocsConfig>` - The merged configuration.
///
/// ## Errors
///
/// Returns an error if the configuration file exists but cannot be read or
/// parsed (including unknown keys).
pub fn load_config(args: RundocsArgs, work_dir: &Path) -> Result<DocsConfig> {
    let file_config = load_config_file(work_dir)?.unwrap_or_default();
    let mut config = DocsConfig::new(work_dir);

    // Only the exact string `true` enables the download.
    config.download = args.is_download == "true";

    // An explicitly empty flag behaves like an unset one.
    let cli_port = args.docport.filter(|port| !port.is_empty());
    if let Some(port) = cli_port.or(file_config.docport) {
        config.port = port;
    }

    // A version change moves the default URL along with it; an explicit
    // `download_url` still wins.
    if let Some(version) = file_config.swagger_version {
        config.download_url = swagger_url(&version);
        config.swagger_version = version;
    }
    if let Some(url) = file_config.download_url {
        config.download_url = url;
    }

    Ok(config)
}

/// Reads `.bee-docs.toml` from `dir`, returning `Ok(None)` when it is absent.
fn load_config_file(dir: &Path) -> Result<Option<FileConfig>> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        debug!("No config file found at {}", config_path.display());
        return Ok(None);
    }

    info!("Loading configuration from {}", config_path.display());
    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    // Parse errors become `DocsError::Config` so they carry the file path.
    let file_config = toml::from_str(&content).map_err(|e| {
        DocsError::Config(format!("{}: {}", config_path.display(), e))
    })?;
    Ok(Some(file_config))
}

/// # Normalize Go-Style Flags (`normalize_go_style_flags`)
///
/// Rewrites single-dash spellings of the long `rundocs` flags
/// (`-isDownload=true`, `-docport 9000`) to the double-dash form clap parses.
/// Everything after a bare `--` is left untouched.
///
/// ## Arguments
///
/// * `args` - The raw process arguments, program name included.
///
/// ## Returns
///
/// * `Vec<OsString>` - The arguments with known Go-style flags rewritten.
pub fn normalize_go_style_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    // Set once a bare `--` has been seen.
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            // Non-UTF-8 arguments can never name one of our flags.
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            match text.strip_prefix('-') {
                // Exactly one leading dash: compare the name before any `=`.
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split('=').next().unwrap_or(rest);
                    if GO_STYLE_FLAGS.contains(&name) {
                        OsString::from(format!("-{}", text))
                    } else {
                        // Short flags like `-v` or `-d` stay as they are.
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}
