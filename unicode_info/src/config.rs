use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// каталог, поставляемый вместе с репозиторием
pub const DEFAULT_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/json");
/// имя файла каталога CLDR (без расширения)
pub const DEFAULT_CATALOG: &str = "language_characters";
/// штрих и двойной штрих: есть во многих описаниях CLDR, но мало в каких шрифтах
pub const DEFAULT_IGNORED_UNICODES: [u32; 2] = [0x2032, 0x2033];
/// порог "почти поддерживаемых" орфографий
pub const DEFAULT_NEAR_MISS: usize = 5;

/// настройки, файл в формате TOML; все поля необязательны
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct Config
{
    /// каталог с JSON-файлами данных
    pub data_dir: PathBuf,
    /// имя файла орфографий без расширения
    pub catalog: String,
    /// кодпоинты, исключаемые из всех орфографий
    pub ignored_unicodes: Vec<u32>,
    /// порог для отчета о почти поддерживаемых орфографиях
    pub near_miss: usize,
}

impl Default for Config
{
    fn default() -> Self
    {
        Config {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog: DEFAULT_CATALOG.to_owned(),
            ignored_unicodes: DEFAULT_IGNORED_UNICODES.to_vec(),
            near_miss: DEFAULT_NEAR_MISS,
        }
    }
}

impl Config
{
    /// загрузка настроек; если файла нет - настройки по умолчанию
    pub fn load(path: &Path) -> Result<Self>
    {
        if !path.exists() {
            log::debug!("{} not found, using default configuration", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_owned(),
            source,
        })
    }
}
