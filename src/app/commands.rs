use crate::api::ColorApiClient;
use crate::config::cli::LocalStorage;
use crate::config::{Command, Settings};
use crate::domain::model::{canonical_hex, ColorSpace, Palette, SortOrder};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::export::{self, ExportFormat};
use crate::i18n::{self, Lang};
use crate::library::PaletteLibrary;
use crate::utils::error::{HuegenError, Result};
use crate::utils::validation;

/// Dispatch one subcommand. The returned value is the process exit code:
/// 0 for success, 1 when the service is unavailable or the palette is
/// missing. Hard failures (storage, config) propagate as errors.
pub async fn run(command: &Command, settings: &Settings) -> Result<i32> {
    let client = ColorApiClient::from_config(settings);
    let library = PaletteLibrary::new(LocalStorage::from_config(settings));
    let lang = settings.language();

    match command {
        Command::Status => status(&client, lang).await,
        Command::Info { color } => info(&client, lang, color).await,
        Command::Scheme {
            color,
            kind,
            save,
            tags,
        } => scheme(&client, &library, lang, color, kind, save.as_deref(), tags).await,
        Command::Convert { color, from, to } => convert(&client, lang, color, *from, *to).await,
        Command::Save { name, colors, tags } => save(&library, lang, name, colors, tags).await,
        Command::List { query, sort } => list(&library, lang, query.as_deref(), *sort).await,
        Command::Show { name } => show(&library, lang, name).await,
        Command::Delete { name } => delete(&library, lang, name).await,
        Command::Export {
            name,
            format,
            output,
        } => export_palette(&library, lang, name, *format, output.as_deref()).await,
    }
}

async fn status(client: &ColorApiClient, lang: Lang) -> Result<i32> {
    if client.check_status().await {
        println!("✅ {}", i18n::translate(lang, "apiOnline"));
        Ok(0)
    } else {
        println!("❌ {}", i18n::translate(lang, "offlineMode"));
        Ok(1)
    }
}

async fn info(client: &ColorApiClient, lang: Lang, color: &str) -> Result<i32> {
    match client.color_info(color).await {
        Some(info) => {
            println!("{}  {}", info.hex, info.name);
            println!("  rgb:  {}", info.rgb);
            println!("  hsl:  {}", info.hsl);
            if let Some(cmyk) = &info.cmyk {
                println!("  cmyk: {}", cmyk);
            }
            Ok(0)
        }
        None => unavailable(lang),
    }
}

async fn scheme<S: Storage>(
    client: &ColorApiClient,
    library: &PaletteLibrary<S>,
    lang: Lang,
    color: &str,
    kind: &str,
    save_as: Option<&str>,
    tags: &[String],
) -> Result<i32> {
    let colors = match client.scheme(color, kind).await {
        Some(colors) => colors,
        None => return unavailable(lang),
    };

    for entry in &colors {
        println!("{}  {}  {}", entry.hex, entry.rgb, entry.name);
    }

    if let Some(name) = save_as {
        validation::validate_non_empty_string("name", name)?;

        let hexes: Vec<String> = colors.iter().map(|entry| canonical_hex(&entry.hex)).collect();
        let palette = Palette::new(name, hexes).with_tags(tags.to_vec());
        library.save(palette).await?;

        println!("✅ {}", i18n::translate(lang, "paletteSaved"));
    }

    Ok(0)
}

async fn convert(
    client: &ColorApiClient,
    lang: Lang,
    color: &str,
    from: ColorSpace,
    to: ColorSpace,
) -> Result<i32> {
    match client.convert(color, from, to).await {
        Some(value) => {
            println!("{}", value);
            Ok(0)
        }
        None => unavailable(lang),
    }
}

async fn save<S: Storage>(
    library: &PaletteLibrary<S>,
    lang: Lang,
    name: &str,
    colors: &[String],
    tags: &[String],
) -> Result<i32> {
    validation::validate_non_empty_string("name", name)?;
    for color in colors {
        validation::validate_hex_color("colors", color)?;
    }

    let canonical: Vec<String> = colors.iter().map(|color| canonical_hex(color)).collect();
    let palette = Palette::new(name, canonical).with_tags(tags.to_vec());
    library.save(palette).await?;

    println!("✅ {}", i18n::translate(lang, "paletteSaved"));
    Ok(0)
}

async fn list<S: Storage>(
    library: &PaletteLibrary<S>,
    lang: Lang,
    query: Option<&str>,
    sort: SortOrder,
) -> Result<i32> {
    let palettes = match query {
        Some(query) => library.search(query, sort).await?,
        None => library.list(sort).await?,
    };

    if palettes.is_empty() {
        println!("{}", i18n::translate(lang, "noPalettesFound"));
        let hint = if query.is_some() {
            "tryDifferentSearch"
        } else {
            "createFirstPalette"
        };
        println!("💡 {}", i18n::translate(lang, hint));
        return Ok(0);
    }

    println!("{}", i18n::translate(lang, "libraryTitle"));
    for palette in &palettes {
        println!("{}", format_palette_line(palette));
    }

    Ok(0)
}

async fn show<S: Storage>(
    library: &PaletteLibrary<S>,
    lang: Lang,
    name: &str,
) -> Result<i32> {
    match library.get(name).await? {
        Some(palette) => {
            println!("{}", palette.name);
            println!("  created: {}", palette.created_at.format("%Y-%m-%d %H:%M"));
            if !palette.tags.is_empty() {
                println!("  tags: {}", palette.tags.join(", "));
            }
            for color in &palette.colors {
                println!("  {}", color);
            }
            Ok(0)
        }
        None => missing_palette(lang),
    }
}

async fn delete<S: Storage>(
    library: &PaletteLibrary<S>,
    lang: Lang,
    name: &str,
) -> Result<i32> {
    match library.delete(name).await {
        Ok(()) => {
            println!("✅ {}", i18n::translate(lang, "paletteDeleted"));
            Ok(0)
        }
        Err(HuegenError::PaletteNotFoundError(_)) => missing_palette(lang),
        Err(err) => Err(err),
    }
}

async fn export_palette<S: Storage>(
    library: &PaletteLibrary<S>,
    lang: Lang,
    name: &str,
    format: ExportFormat,
    output: Option<&str>,
) -> Result<i32> {
    let palette = match library.get(name).await? {
        Some(palette) => palette,
        None => return missing_palette(lang),
    };

    let rendered = export::render(&palette, format)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            println!("✅ {} -> {}", palette.name, path);
        }
        None => println!("{}", rendered),
    }

    Ok(0)
}

fn unavailable(lang: Lang) -> Result<i32> {
    println!("❌ {}", i18n::translate(lang, "offlineMode"));
    Ok(1)
}

fn missing_palette(lang: Lang) -> Result<i32> {
    println!("❌ {}", i18n::translate(lang, "paletteNotFound"));
    Ok(1)
}

fn format_palette_line(palette: &Palette) -> String {
    let mut line = format!(
        "{}  {}  {}",
        palette.created_at.format("%Y-%m-%d"),
        palette.name,
        palette.colors.join(" ")
    );

    if !palette.tags.is_empty() {
        line.push_str(&format!("  #{}", palette.tags.join(" #")));
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_palette_line_includes_tags_when_present() {
        let mut palette = Palette::new(
            "Sunset",
            vec!["#FF0000".to_string(), "#FFA500".to_string()],
        );
        palette.created_at = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();

        assert_eq!(
            format_palette_line(&palette),
            "2026-03-14  Sunset  #FF0000 #FFA500"
        );

        let tagged = palette.with_tags(vec!["warm".to_string(), "bold".to_string()]);
        assert_eq!(
            format_palette_line(&tagged),
            "2026-03-14  Sunset  #FF0000 #FFA500  #warm #bold"
        );
    }
}
