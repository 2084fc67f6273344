use std::collections::HashMap;

use crate::properties::*;

lazy_static! {
    /// таблица Unicode
    pub static ref UNICODE: UnicodeTable = unicode();
}

const DATA: &str = include_str!("./../data/ucd/16.0.0/UnicodeData.txt");

/// данные UnicodeData.txt
#[derive(Debug, Default)]
pub struct UnicodeTable
{
    /// кодпоинты, перечисленные по одному
    pub codepoints: HashMap<u32, Codepoint>,
    /// диапазоны, заданные парами First/Last
    pub groups: Vec<CodepointGroup>,
}

/// диапазон кодпоинтов с общими свойствами
#[derive(Debug, Clone)]
pub struct CodepointGroup
{
    /// первый кодпоинт диапазона
    pub first: u32,
    /// последний кодпоинт диапазона (включительно)
    pub last: u32,
    /// название диапазона без угловых скобок и ", First"
    pub label: String,
    /// категория символов диапазона
    pub gc: GeneralCategory,
}

impl CodepointGroup
{
    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        (self.first ..= self.last).contains(&code)
    }
}

/// разбор UnicodeData.txt из UCD: таблица отдельных кодпоинтов и список диапазонов
pub fn unicode() -> UnicodeTable
{
    let mut table = UnicodeTable::default();

    // пригодится, когда встретим диапазоны
    let mut range_start: Option<Codepoint> = None;

    for line in DATA.lines() {
        let codepoint = match parse_line(line) {
            Ok(codepoint) => codepoint,
            Err(e) => {
                log::warn!("UnicodeData.txt: {}: {}", e, line);
                continue;
            }
        };

        // диапазоны:
        //
        // U+3400 ..= U+4DBF CJK Ideograph Extension A
        // U+4E00 ..= U+9FFF CJK Ideograph
        // U+AC00 ..= U+D7A3 Hangul Syllable
        // U+D800 ..= U+DB7F Non Private Use High Surrogate
        // U+DB80 ..= U+DBFF Private Use High Surrogate
        // U+DC00 ..= U+DFFF Low Surrogate
        // U+E000 ..= U+F8FF Private Use
        // U+17000 ..= U+187F7 Tangut Ideograph
        // U+18D00 ..= U+18D08 Tangut Ideograph Supplement
        // U+20000 ..= U+323AF CJK Ideograph Extension B - I
        // U+F0000 ..= U+10FFFD Plane 15/16 Private Use

        if codepoint.name.starts_with('<') && codepoint.name.ends_with(", First>") {
            range_start = Some(codepoint);
            continue;
        }

        if codepoint.name.starts_with('<') && codepoint.name.ends_with(", Last>") {
            match range_start.take() {
                Some(group) => table.groups.push(CodepointGroup {
                    first: group.code,
                    last: codepoint.code,
                    label: group.name[1 .. group.name.len() - 8].to_owned(),
                    gc: group.gc,
                }),
                None => log::warn!("UnicodeData.txt: range end without start: {}", line),
            }

            continue;
        }

        table.codepoints.insert(codepoint.code, codepoint);
    }

    table
}

/// разбор строки UnicodeData.txt
fn parse_line(line: &str) -> Result<Codepoint, PropertiesError>
{
    let props: Vec<&str> = line.split(';').collect();

    if props.len() != 15 {
        return Err(PropertiesError::MalformedRecord);
    }

    // код и название
    let code = u32::from_str_radix(props[0], 16)?;
    let name = props[1].to_owned();

    // категория
    let gc = GeneralCategory::try_from(props[2])?;

    // декомпозиция и тег декомпозиции
    let decomposition = Decomposition::try_from(props[5])?;

    // связанные символы в другом регистре (если есть)
    let simple_uppercase_mapping = SimpleCaseMapping::try_from(props[12])?;
    let simple_lowercase_mapping = SimpleCaseMapping::try_from(props[13])?;
    let simple_titlecase_mapping = SimpleCaseMapping::try_from(props[14])?;

    // пропускаем колонки 3, 4, 6 - 11: CCC, Bidi, числовые значения, устаревшие названия

    Ok(Codepoint {
        code,
        name,
        gc,
        simple_uppercase_mapping: simple_uppercase_mapping.code(),
        simple_lowercase_mapping: simple_lowercase_mapping.code(),
        simple_titlecase_mapping: simple_titlecase_mapping.code(),
        decomposition_tag: decomposition.tag,
        decomposition: decomposition.codes,
    })
}

/// свойства кодпоинта, если он перечислен в UnicodeData.txt отдельной строкой
#[inline]
pub fn codepoint(code: u32) -> Option<&'static Codepoint>
{
    UNICODE.codepoints.get(&code)
}

/// диапазон First/Last, которому принадлежит кодпоинт
pub fn group_for(code: u32) -> Option<&'static CodepointGroup>
{
    UNICODE.groups.iter().find(|group| group.contains(code))
}

/// основная категория символа, None - если символ не назначен
pub fn category_for(code: u32) -> Option<GeneralCategory>
{
    match codepoint(code) {
        Some(codepoint) => Some(codepoint.gc),
        None => group_for(code).map(|group| group.gc),
    }
}

/// прописная буква, соответствующая символу
#[inline]
pub fn uppercase_of(code: u32) -> Option<u32>
{
    codepoint(code).and_then(|c| c.simple_uppercase_mapping)
}

/// строчная буква, соответствующая символу
#[inline]
pub fn lowercase_of(code: u32) -> Option<u32>
{
    codepoint(code).and_then(|c| c.simple_lowercase_mapping)
}

/// заглавная буква, соответствующая символу
#[inline]
pub fn titlecase_of(code: u32) -> Option<u32>
{
    codepoint(code).and_then(|c| c.simple_titlecase_mapping)
}

/// декомпозиция символа (пустая, если ее нет)
#[inline]
pub fn decomposition_of(code: u32) -> &'static [u32]
{
    match codepoint(code) {
        Some(codepoint) => &codepoint.decomposition,
        None => &[],
    }
}

/// тег декомпозиции, если она не каноническая
#[inline]
pub fn decomposition_tag_of(code: u32) -> Option<DecompositionTag>
{
    codepoint(code).and_then(|c| c.decomposition_tag)
}
