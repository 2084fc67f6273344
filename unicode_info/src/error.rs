use std::path::PathBuf;

use thiserror::Error;

/// ошибки загрузки каталога и конфигурации
#[derive(Debug, Error)]
pub enum Error
{
    /// файл не читается
    #[error("cannot read {}: {source}", .path.display())]
    Io
    {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// файл каталога не соответствует схеме
    #[error("invalid catalog data in {}: {source}", .path.display())]
    Json
    {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// файл конфигурации не соответствует схеме
    #[error("invalid configuration in {}: {source}", .path.display())]
    Config
    {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
