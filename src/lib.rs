pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod export;
pub mod i18n;
pub mod library;
pub mod utils;

pub use api::{ColorApiClient, UNKNOWN_COLOR_NAME};
pub use config::{cli::LocalStorage, Cli, Settings};
pub use domain::model::{canonical_hex, ColorInfo, ColorSpace, Palette, SchemeColor, SortOrder};
pub use export::ExportFormat;
pub use i18n::Lang;
pub use library::PaletteLibrary;
pub use utils::error::{HuegenError, Result};
