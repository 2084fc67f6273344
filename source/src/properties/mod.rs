mod decomposition;
mod general_category;
mod simple_case_mapping;

pub use decomposition::Decomposition;
pub use decomposition::DecompositionTag;
pub use general_category::GeneralCategory;
pub use simple_case_mapping::SimpleCaseMapping;

/// Кодпоинт Unicode
/// источник - UCD, UnicodeData.txt
#[derive(Debug, Clone)]
pub struct Codepoint
{
    /// код символа
    pub code: u32,
    /// название
    pub name: String,
    /// категория символа (general category)
    pub gc: GeneralCategory,
    /// соответствующая прописная буква
    pub simple_uppercase_mapping: Option<u32>,
    /// соответствующая строчная буква
    pub simple_lowercase_mapping: Option<u32>,
    /// соответствующая заглавная буква
    pub simple_titlecase_mapping: Option<u32>,
    /// тег декомпозиции
    pub decomposition_tag: Option<DecompositionTag>,
    /// декомпозиция
    pub decomposition: Vec<u32>,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PropertiesError
{
    #[error("unknown property value")]
    UnknownPropertyValue,
    /// в строке UCD неверное количество полей
    #[error("malformed record")]
    MalformedRecord,
    /// диапазоны таблицы пересекаются
    #[error("overlapping ranges")]
    OverlappingRanges,
}

impl From<core::num::ParseIntError> for PropertiesError
{
    fn from(_: core::num::ParseIntError) -> Self
    {
        Self::UnknownPropertyValue
    }
}
