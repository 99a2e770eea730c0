use crate::domain::model::{Palette, SortOrder};
use crate::domain::ports::Storage;
use crate::utils::error::{HuegenError, Result};

/// Name of the JSON document holding every saved palette, relative to the
/// storage root.
const LIBRARY_FILE_NAME: &str = "palettes.json";

/// Saved-palette collection backed by a single JSON document behind the
/// `Storage` port. Deliberately thin: the whole document is read and
/// rewritten per operation.
pub struct PaletteLibrary<S: Storage> {
    storage: S,
}

impl<S: Storage> PaletteLibrary<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Upsert by name: saving under an existing name replaces that palette,
    /// which is also how edits are done.
    pub async fn save(&self, palette: Palette) -> Result<()> {
        let mut palettes = self.load_all().await?;

        match palettes
            .iter_mut()
            .find(|existing| existing.name == palette.name)
        {
            Some(slot) => *slot = palette,
            None => palettes.push(palette),
        }

        self.store_all(&palettes).await
    }

    pub async fn list(&self, sort: SortOrder) -> Result<Vec<Palette>> {
        let mut palettes = self.load_all().await?;
        sort_palettes(&mut palettes, sort);
        Ok(palettes)
    }

    /// Case-insensitive substring match on the palette name or any tag.
    pub async fn search(&self, query: &str, sort: SortOrder) -> Result<Vec<Palette>> {
        let needle = query.to_lowercase();
        let mut palettes: Vec<Palette> = self
            .load_all()
            .await?
            .into_iter()
            .filter(|palette| matches_query(palette, &needle))
            .collect();
        sort_palettes(&mut palettes, sort);
        Ok(palettes)
    }

    pub async fn get(&self, name: &str) -> Result<Option<Palette>> {
        Ok(self
            .load_all()
            .await?
            .into_iter()
            .find(|palette| palette.name == name))
    }

    pub async fn delete(&self, name: &str) -> Result<()> {
        let mut palettes = self.load_all().await?;
        let before = palettes.len();
        palettes.retain(|palette| palette.name != name);

        if palettes.len() == before {
            return Err(HuegenError::PaletteNotFoundError(name.to_string()));
        }

        self.store_all(&palettes).await
    }

    /// A missing document is an empty library. A document that exists but
    /// does not parse is a real error; it is never silently overwritten.
    async fn load_all(&self) -> Result<Vec<Palette>> {
        let bytes = match self.storage.read_file(LIBRARY_FILE_NAME).await {
            Ok(bytes) => bytes,
            Err(HuegenError::IoError(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn store_all(&self, palettes: &[Palette]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(palettes)?;
        self.storage.write_file(LIBRARY_FILE_NAME, &bytes).await
    }
}

fn sort_palettes(palettes: &mut [Palette], sort: SortOrder) {
    match sort {
        SortOrder::Newest => palettes.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => palettes.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::ByName => {
            palettes.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
    }
}

fn matches_query(palette: &Palette, needle: &str) -> bool {
    palette.name.to_lowercase().contains(needle)
        || palette
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn palette_at(name: &str, tags: &[&str], year: i32) -> Palette {
        Palette {
            name: name.to_string(),
            colors: vec!["#FF0000".to_string()],
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            created_at: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_sort_newest_puts_latest_first() {
        let mut palettes = vec![
            palette_at("old", &[], 2023),
            palette_at("new", &[], 2025),
            palette_at("mid", &[], 2024),
        ];
        sort_palettes(&mut palettes, SortOrder::Newest);

        let names: Vec<&str> = palettes.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let mut palettes = vec![
            palette_at("beta", &[], 2024),
            palette_at("Alpha", &[], 2024),
            palette_at("GAMMA", &[], 2024),
        ];
        sort_palettes(&mut palettes, SortOrder::ByName);

        let names: Vec<&str> = palettes.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "GAMMA"]);
    }

    #[test]
    fn test_query_matches_name_and_tags() {
        let palette = palette_at("Sunset Warm", &["orange", "Evening"], 2024);

        assert!(matches_query(&palette, "sunset"));
        assert!(matches_query(&palette, "warm"));
        assert!(matches_query(&palette, "evening"));
        assert!(!matches_query(&palette, "ocean"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let palette = palette_at("Anything", &[], 2024);
        assert!(matches_query(&palette, ""));
    }
}
