use super::PropertiesError;

/// Simple Uppercase/Lowercase/Titlecase Mapping
/// берется из UCD: 12, 13, 14 колонки UnicodeData.txt
///
/// соответствующая символу прописная/строчная/заглавная буква, один символ.
/// отображения регистра не обязаны быть взаимно обратными: U+1E9E -> U+00DF, но U+00DF не имеет
/// простого отображения в прописную
///
/// более детально - https://www.unicode.org/reports/tr44/#Casemapping
///
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SimpleCaseMapping(Option<u32>);

impl SimpleCaseMapping
{
    #[inline]
    pub fn code(&self) -> Option<u32>
    {
        self.0
    }
}

impl TryFrom<&str> for SimpleCaseMapping
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(match value.is_empty() {
            true => Self(None),
            false => Self(Some(u32::from_str_radix(value, 16)?)),
        })
    }
}

impl From<SimpleCaseMapping> for Option<u32>
{
    #[inline]
    fn from(value: SimpleCaseMapping) -> Self
    {
        value.0
    }
}
