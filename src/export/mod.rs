use clap::ValueEnum;

use crate::domain::model::Palette;
use crate::utils::error::Result;

/// Output format for palette export. The variable-based formats number
/// colors from 1 and render hex codes lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Css,
    Scss,
    Tailwind,
    Json,
}

/// Render a palette into the requested format. Pure string formatting;
/// only the JSON path can fail.
pub fn render(palette: &Palette, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Css => Ok(render_css(palette)),
        ExportFormat::Scss => Ok(render_scss(palette)),
        ExportFormat::Tailwind => Ok(render_tailwind(palette)),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(palette)?),
    }
}

fn render_css(palette: &Palette) -> String {
    let variables: Vec<String> = palette
        .colors
        .iter()
        .enumerate()
        .map(|(index, color)| format!("  --color-{}: {};", index + 1, color.to_lowercase()))
        .collect();

    format!(":root {{\n{}\n}}", variables.join("\n"))
}

fn render_scss(palette: &Palette) -> String {
    palette
        .colors
        .iter()
        .enumerate()
        .map(|(index, color)| format!("$color-{}: {};", index + 1, color.to_lowercase()))
        .collect::<Vec<String>>()
        .join("\n")
}

fn render_tailwind(palette: &Palette) -> String {
    let entries: Vec<String> = palette
        .colors
        .iter()
        .enumerate()
        .map(|(index, color)| {
            format!("        'color-{}': '{}',", index + 1, color.to_lowercase())
        })
        .collect();

    format!(
        "module.exports = {{\n  theme: {{\n    extend: {{\n      colors: {{\n{}\n      }}\n    }}\n  }}\n}}",
        entries.join("\n")
    )
}
