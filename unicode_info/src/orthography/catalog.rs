use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::reduced;
use crate::error::{Error, Result};

/// язык -> письменность -> территория -> описание орфографии
pub type CharacterCatalog = BTreeMap<String, BTreeMap<String, BTreeMap<String, OrthographyEntry>>>;

/// описание орфографии в каталоге
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OrthographyEntry
{
    pub name: Option<String>,
    #[serde(default)]
    pub unicodes: CharacterSets,
}

/// наборы символов орфографии
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CharacterSets
{
    #[serde(default)]
    pub base: CharacterList,
    #[serde(default)]
    pub optional: CharacterList,
    #[serde(default)]
    pub punctuation: CharacterList,
}

/// список символов: кодпоинты или строка символов (пробелы игнорируются)
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CharacterList
{
    Codepoints(Vec<u32>),
    Text(String),
}

impl Default for CharacterList
{
    fn default() -> Self
    {
        Self::Codepoints(vec![])
    }
}

impl CharacterList
{
    /// кодпоинты списка; строка символов раскладывается на кодпоинты без повторов и без прописных букв,
    /// чьи строчные пары тоже есть в строке
    pub fn codepoints(&self) -> Vec<u32>
    {
        match self {
            Self::Codepoints(codepoints) => codepoints.clone(),
            Self::Text(text) => {
                let codepoints: Vec<u32> = text.chars().filter(|c| !c.is_whitespace()).map(u32::from).collect();
                reduced(&codepoints)
            }
        }
    }
}

/// данные каталога: орфографии и справочники названий
#[derive(Debug, Clone, Default)]
pub struct Catalog
{
    pub characters: CharacterCatalog,
    /// код языка -> название
    pub languages: HashMap<String, String>,
    /// код письменности -> название
    pub scripts: HashMap<String, String>,
    /// код территории -> название
    pub territories: HashMap<String, String>,
    /// код языка -> количество носителей
    pub speakers: HashMap<String, u64>,
}

/// файл количества носителей языков, необязательный
pub const SPEAKERS_FILE: &str = "language_speakers";

impl Catalog
{
    /// загрузка каталога из директории: <catalog>.json, languages.json, scripts.json, territories.json
    /// и необязательный language_speakers.json
    pub fn load(dir: &Path, catalog: &str) -> Result<Self>
    {
        let characters = read_json(&dir.join(format!("{}.json", catalog)))?;
        let languages = read_json(&dir.join("languages.json"))?;
        let scripts = read_json(&dir.join("scripts.json"))?;
        let territories = read_json(&dir.join("territories.json"))?;

        let speakers_path = dir.join(format!("{}.json", SPEAKERS_FILE));

        let speakers = match speakers_path.exists() {
            true => read_json(&speakers_path)?,
            false => {
                log::info!("{} not found, speaker counts are unknown", speakers_path.display());
                HashMap::new()
            }
        };

        Ok(Self { characters, languages, scripts, territories, speakers })
    }

    /// каталог из JSON-строки с орфографиями (без справочников)
    pub fn from_characters_json(json: &str) -> serde_json::Result<Self>
    {
        Ok(Self { characters: serde_json::from_str(json)?, ..Self::default() })
    }
}

/// чтение JSON-файла
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T>
{
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_owned(),
        source,
    })
}
