use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use skrifa::{FontRef, MetadataProvider};
use unicode_info::{glyph_name_for_codepoint, Cmap, Config};

/// файл настроек, если не указан явно
pub const DEFAULT_CONFIG: &str = "unicode_info.toml";

/// настройки с учетом аргументов командной строки
pub fn load_config(config: Option<&Path>, data_dir: Option<PathBuf>) -> anyhow::Result<Config>
{
    let mut config = Config::load(config.unwrap_or(Path::new(DEFAULT_CONFIG)))?;

    if let Some(data_dir) = data_dir {
        config.data_dir = data_dir;
    }

    Ok(config)
}

/// набор символов шрифта (первого шрифта коллекции)
pub fn font_cmap(path: &Path) -> anyhow::Result<Cmap>
{
    let data = std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    let font = FontRef::from_index(&data, 0).map_err(|e| anyhow!("{}: {}", path.display(), e))?;

    let cmap: Cmap = font
        .charmap()
        .mappings()
        .map(|(code, _)| (code, glyph_name_for_codepoint(code)))
        .collect();

    log::debug!("{}: {} codepoints", path.display(), cmap.len());

    Ok(cmap)
}

/// кодпоинт из строки: 0x1E9E, U+1E9E или десятичное число
pub fn parse_codepoint(s: &str) -> Option<u32>
{
    let lower = s.trim().to_lowercase();

    let code = match lower.strip_prefix("0x").or_else(|| lower.strip_prefix("u+")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => lower.parse().ok(),
    };

    code.filter(|&code| code <= 0x10FFFF)
}
