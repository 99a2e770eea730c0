use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Interface language for user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ru,
}

impl Lang {
    /// Map a language code from configuration. Anything that is not `ru`
    /// falls back to English rather than failing the whole config load.
    pub fn from_code(code: &str) -> Self {
        if code.eq_ignore_ascii_case("ru") {
            Lang::Ru
        } else {
            Lang::En
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lang::En => write!(f, "en"),
            Lang::Ru => write!(f, "ru"),
        }
    }
}

/// Translate a message key. Unknown keys are echoed back unchanged, so a
/// missing entry degrades to something still readable instead of panicking.
pub fn translate<'a>(lang: Lang, key: &'a str) -> &'a str {
    lookup(lang, key).unwrap_or(key)
}

fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    match lang {
        Lang::En => lookup_en(key),
        Lang::Ru => lookup_ru(key),
    }
}

fn lookup_en(key: &str) -> Option<&'static str> {
    let message = match key {
        "apiOnline" => "API Online",
        "offlineMode" => "Offline Mode",
        "libraryTitle" => "🎨 Color Library",
        "paletteSaved" => "Palette saved!",
        "paletteDeleted" => "Palette deleted",
        "paletteNotFound" => "Palette not found",
        "noPalettesFound" => "No palettes found",
        "tryDifferentSearch" => "Try a different search term",
        "createFirstPalette" => "Create your first palette in the generator",
        _ => return None,
    };
    Some(message)
}

fn lookup_ru(key: &str) -> Option<&'static str> {
    let message = match key {
        "apiOnline" => "API онлайн",
        "offlineMode" => "Оффлайн режим",
        "libraryTitle" => "🎨 Библиотека цветов",
        "paletteSaved" => "Палитра сохранена!",
        "paletteDeleted" => "Палитра удалена",
        "paletteNotFound" => "Палитра не найдена",
        "noPalettesFound" => "Палитры не найдены",
        "tryDifferentSearch" => "Попробуйте другой поисковый запрос",
        "createFirstPalette" => "Создайте свою первую палитру в генераторе",
        _ => return None,
    };
    Some(message)
}
