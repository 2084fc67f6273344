use std::cell::OnceCell;

use unicode_info_source::properties::GeneralCategory;
use unicode_info_source::*;

use crate::glyph_names::glyph_name_for_codepoint;
use crate::nice_name::nice_name;

/// отображается вместо отсутствующих свойств
pub const UNDEFINED: &str = "<undefined>";

/// информация о кодпоинте
///
/// объект привязан к одному кодпоинту (или ни к какому); свойства вычисляются при первом обращении
/// и сбрасываются при смене кодпоинта
#[derive(Debug, Default, Clone)]
pub struct UniInfo
{
    unicode: Option<u32>,
    derived: Derived,
}

/// вычисленные свойства
#[derive(Debug, Default, Clone)]
struct Derived
{
    name: OnceCell<Option<String>>,
    nice_name: OnceCell<Option<String>>,
    glyph_name: OnceCell<Option<String>>,
    category: OnceCell<Option<GeneralCategory>>,
    block: OnceCell<Option<&'static str>>,
    script: OnceCell<Option<&'static str>>,
}

impl UniInfo
{
    pub fn new(unicode: Option<u32>) -> Self
    {
        Self { unicode, derived: Derived::default() }
    }

    /// текущий кодпоинт
    #[inline]
    pub fn unicode(&self) -> Option<u32>
    {
        self.unicode
    }

    /// привязка к другому кодпоинту, все свойства будут вычислены заново
    pub fn set_unicode(&mut self, unicode: Option<u32>)
    {
        if self.unicode != unicode {
            self.unicode = unicode;
            self.derived = Derived::default();
        }
    }

    /// название символа Unicode
    pub fn name(&self) -> Option<&str>
    {
        self.derived
            .name
            .get_or_init(|| self.unicode.and_then(name_for))
            .as_deref()
    }

    /// человекочитаемое название
    pub fn nice_name(&self) -> Option<&str>
    {
        self.derived
            .nice_name
            .get_or_init(|| self.name().map(nice_name))
            .as_deref()
    }

    /// имя глифа
    pub fn glyph_name(&self) -> Option<&str>
    {
        self.derived
            .glyph_name
            .get_or_init(|| self.unicode.map(glyph_name_for_codepoint))
            .as_deref()
    }

    /// основная категория
    pub fn general_category(&self) -> Option<GeneralCategory>
    {
        *self
            .derived
            .category
            .get_or_init(|| self.unicode.and_then(category_for))
    }

    /// двухбуквенное обозначение категории (Lu, Ll, ...)
    pub fn category_short(&self) -> Option<&'static str>
    {
        self.general_category().map(|gc| gc.abbr())
    }

    /// название категории (Letter, Uppercase, ...)
    pub fn category(&self) -> Option<&'static str>
    {
        self.general_category().map(|gc| gc.description())
    }

    pub fn block(&self) -> Option<&'static str>
    {
        *self.derived.block.get_or_init(|| self.unicode.and_then(block_for))
    }

    pub fn script(&self) -> Option<&'static str>
    {
        *self.derived.script.get_or_init(|| self.unicode.and_then(script_for))
    }

    /// соответствующая прописная буква
    #[inline]
    pub fn uc_mapping(&self) -> Option<u32>
    {
        self.unicode.and_then(uppercase_of)
    }

    /// соответствующая строчная буква
    #[inline]
    pub fn lc_mapping(&self) -> Option<u32>
    {
        self.unicode.and_then(lowercase_of)
    }

    /// соответствующая заглавная буква
    #[inline]
    pub fn tc_mapping(&self) -> Option<u32>
    {
        self.unicode.and_then(titlecase_of)
    }

    /// декомпозиция
    #[inline]
    pub fn decomposition_mapping(&self) -> &'static [u32]
    {
        match self.unicode {
            Some(code) => decomposition_of(code),
            None => &[],
        }
    }

    /// символ (для суррогатов и без кодпоинта - None)
    #[inline]
    pub fn char(&self) -> Option<char>
    {
        self.unicode.and_then(char::from_u32)
    }
}

impl From<u32> for UniInfo
{
    fn from(code: u32) -> Self
    {
        Self::new(Some(code))
    }
}

impl core::fmt::Display for UniInfo
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        match self.unicode {
            Some(code) => write!(f, "      Unicode: 0x{:04X} (dec. {})", code, code)?,
            None => write!(f, "      Unicode: None")?,
        }

        match self.unicode {
            Some(_) => write!(f, "\n         Name: {}", self.name().unwrap_or(UNDEFINED))?,
            None => write!(f, "\n         Name: None")?,
        }

        write!(
            f,
            "\n     Category: {} ({})",
            self.category_short().unwrap_or(UNDEFINED),
            self.category().unwrap_or(UNDEFINED)
        )?;

        if let Some(block) = self.block() {
            write!(f, "\n        Block: {}", block)?;
        }

        if let Some(script) = self.script() {
            write!(f, "\n       Script: {}", script)?;
        }

        if let Some(uc) = self.uc_mapping() {
            write!(f, "\n    Uppercase: 0x{:04X}", uc)?;
        }

        if let Some(lc) = self.lc_mapping() {
            write!(f, "\n    Lowercase: 0x{:04X}", lc)?;
        }

        let decomposition = self.decomposition_mapping();

        if !decomposition.is_empty() {
            let codes: Vec<String> = decomposition.iter().map(|c| format!("0x{:04X}", c)).collect();
            write!(f, "\nDecomposition: {}", codes.join(" "))?;
        }

        Ok(())
    }
}
