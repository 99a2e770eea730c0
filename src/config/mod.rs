pub mod cli;
pub mod toml_config;

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::api::{
    DEFAULT_BASE_URL, DEFAULT_LOOKUP_TIMEOUT, DEFAULT_SCHEME_KIND, DEFAULT_STATUS_TIMEOUT,
};
use crate::domain::model::{ColorSpace, SortOrder};
use crate::domain::ports::ConfigProvider;
use crate::export::ExportFormat;
use crate::i18n::Lang;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::FileConfig;

pub const DEFAULT_LIBRARY_PATH: &str = "./palettes";

#[derive(Debug, Parser)]
#[command(name = "huegen")]
#[command(about = "Color palette generator, library, and exporter")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Base URL of the color API
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Directory holding the palette library
    #[arg(long, global = true)]
    pub library_path: Option<String>,

    /// Language for user-facing messages
    #[arg(long, global = true, value_enum)]
    pub lang: Option<Lang>,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Probe the color API and report availability
    Status,
    /// Look up display-ready facts about a color
    Info {
        /// Hex color, with or without the leading '#'
        color: String,
    },
    /// Generate a five-color scheme from a base color
    Scheme {
        /// Base hex color
        color: String,
        /// Scheme kind understood by the service (analogous, monochrome, ...)
        #[arg(long, default_value = DEFAULT_SCHEME_KIND)]
        kind: String,
        /// Save the generated scheme as a palette under this name
        #[arg(long, value_name = "NAME")]
        save: Option<String>,
        /// Tags attached when saving
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },
    /// Convert a color between representations
    Convert {
        /// Color in the source representation
        color: String,
        /// Source representation
        #[arg(long, value_enum)]
        from: ColorSpace,
        /// Target representation
        #[arg(long, value_enum)]
        to: ColorSpace,
    },
    /// Save a palette from explicit colors
    Save {
        /// Palette name
        name: String,
        /// Colors as 6-digit hex codes
        #[arg(required = true, num_args = 1..)]
        colors: Vec<String>,
        /// Tags for later search
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },
    /// List saved palettes
    List {
        /// Filter by substring on name or tags
        #[arg(long)]
        query: Option<String>,
        /// Sort order
        #[arg(long, value_enum, default_value = "newest")]
        sort: SortOrder,
    },
    /// Show one palette in full
    Show {
        /// Palette name
        name: String,
    },
    /// Delete a saved palette
    Delete {
        /// Palette name
        name: String,
    },
    /// Export a palette
    Export {
        /// Palette name
        name: String,
        /// Output format
        #[arg(long, value_enum, default_value = "css")]
        format: ExportFormat,
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
}

/// Resolved application settings: CLI flag over config file over default.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub library_path: String,
    pub status_timeout: Duration,
    pub lookup_timeout: Duration,
    pub lang: Lang,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => Some(FileConfig::from_file(path)?),
            None => None,
        };
        Ok(Self::merge(cli, file.as_ref()))
    }

    fn merge(cli: &Cli, file: Option<&FileConfig>) -> Self {
        let api = file.and_then(|config| config.api.as_ref());
        let library = file.and_then(|config| config.library.as_ref());
        let ui = file.and_then(|config| config.ui.as_ref());

        let base_url = cli
            .base_url
            .clone()
            .or_else(|| api.and_then(|section| section.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let library_path = cli
            .library_path
            .clone()
            .or_else(|| library.and_then(|section| section.path.clone()))
            .unwrap_or_else(|| DEFAULT_LIBRARY_PATH.to_string());

        let status_timeout = api
            .and_then(|section| section.status_timeout_seconds)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_STATUS_TIMEOUT);

        let lookup_timeout = api
            .and_then(|section| section.lookup_timeout_seconds)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_LOOKUP_TIMEOUT);

        let lang = cli
            .lang
            .or_else(|| {
                ui.and_then(|section| section.language.as_deref())
                    .map(Lang::from_code)
            })
            .unwrap_or_default();

        Self {
            base_url,
            library_path,
            status_timeout,
            lookup_timeout,
            lang,
        }
    }
}

impl ConfigProvider for Settings {
    fn api_base_url(&self) -> &str {
        &self.base_url
    }

    fn library_path(&self) -> &str {
        &self.library_path
    }

    fn status_timeout(&self) -> Duration {
        self.status_timeout
    }

    fn lookup_timeout(&self) -> Duration {
        self.lookup_timeout
    }

    fn language(&self) -> Lang {
        self.lang
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.base_url)?;
        validation::validate_path("library.path", &self.library_path)?;
        validation::validate_range(
            "api.status_timeout_seconds",
            self.status_timeout.as_secs(),
            1,
            60,
        )?;
        validation::validate_range(
            "api.lookup_timeout_seconds",
            self.lookup_timeout.as_secs(),
            1,
            60,
        )?;
        Ok(())
    }
}
