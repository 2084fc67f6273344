use std::collections::BTreeSet;
use std::fmt::Write;

use unicode_info_source::name_for;

use crate::glyph_names::glyph_name_for_codepoint;
use crate::info::UNDEFINED;
use crate::nice_name::title;
use crate::orthography::index::{OrthographyIndex, UsageLevel};
use crate::orthography::Orthography;

/// набор символов орфографии, выводимый в отчете
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportField
{
    MissingBase,
    MissingOptional,
    MissingPunctuation,
    MissingAll,
    UnicodesBase,
    UnicodesOptional,
    UnicodesPunctuation,
}

impl ReportField
{
    pub fn of<'a>(&self, orthography: &'a Orthography) -> &'a BTreeSet<u32>
    {
        match self {
            Self::MissingBase => orthography.missing_base(),
            Self::MissingOptional => orthography.missing_optional(),
            Self::MissingPunctuation => orthography.missing_punctuation(),
            Self::MissingAll => orthography.missing_all(),
            Self::UnicodesBase => orthography.unicodes_base(),
            Self::UnicodesOptional => orthography.unicodes_optional(),
            Self::UnicodesPunctuation => orthography.unicodes_punctuation(),
        }
    }
}

/// кодпоинты шрифта, которые не используются ни одной поддерживаемой орфографией
/// (основные символы и пунктуация); их можно удалить без потери поддержки языков
pub fn kill_list(index: &OrthographyIndex) -> Vec<u32>
{
    index
        .cmap()
        .keys()
        .copied()
        .filter(|&code| {
            !index
                .orthographies_using(code, UsageLevel::Base)
                .iter()
                .any(|o| o.support_basic())
        })
        .collect()
}

/// пары символов для кернинга: все неупорядоченные пары из основных (и, если нужно, дополнительных)
/// символов орфографий, для которых есть как минимум основные символы
pub fn kerning_pairs(index: &OrthographyIndex, include_optional: bool, with_repetition: bool) -> BTreeSet<(u32, u32)>
{
    let mut pairs = BTreeSet::new();

    for orthography in index.supported_minimum_inclusive() {
        let mut codepoints: BTreeSet<u32> = orthography.unicodes_base().clone();

        if include_optional {
            codepoints.extend(orthography.unicodes_optional());
        }

        pairs.extend(combinations(&codepoints, with_repetition));
    }

    pairs
}

/// неупорядоченные пары (a <= b), с повторением или без
fn combinations(codepoints: &BTreeSet<u32>, with_repetition: bool) -> impl Iterator<Item = (u32, u32)> + '_
{
    codepoints.iter().flat_map(move |&left| {
        codepoints
            .range(left ..)
            .filter(move |&&right| with_repetition || right != left)
            .map(move |&right| (left, right))
    })
}

/// строка таблицы символов: код, имя глифа, название
fn character_line(out: &mut String, code: u32)
{
    let name = name_for(code).map(|name| title(&name));

    let _ = writeln!(
        out,
        "    0x{:04X}\t{}\t{}",
        code,
        glyph_name_for_codepoint(code),
        name.as_deref().unwrap_or(UNDEFINED)
    );
}

/// названия орфографий, по одному в строке, по алфавиту
fn name_list(out: &mut String, mut orthographies: Vec<&Orthography>)
{
    orthographies.sort();

    for orthography in orthographies {
        let _ = writeln!(out, "{}", orthography.name());
    }
}

/// для каждой орфографии - название и таблица символов выбранного набора
pub fn format_orthography_table(mut orthographies: Vec<&Orthography>, field: ReportField) -> String
{
    let mut out = String::new();

    orthographies.sort();

    for orthography in orthographies {
        let _ = writeln!(out, "\n{}", orthography.name());

        for &code in field.of(orthography) {
            character_line(&mut out, code);
        }
    }

    out
}

/// поддерживаемые орфографии
pub fn format_supported(index: &OrthographyIndex, full_only: bool) -> String
{
    let supported = index.supported(full_only);
    let mut out = format!("The font supports {} orthographies:\n", supported.len());

    name_list(&mut out, supported);
    out
}

/// орфографии только с основными символами
pub fn format_supported_minimum(index: &OrthographyIndex) -> String
{
    let supported = index.supported_minimum();
    let mut out = format!("The font has minimal support for {} orthographies:\n", supported.len());

    name_list(&mut out, supported);
    out
}

/// орфографии как минимум с основными символами
pub fn format_supported_minimum_inclusive(index: &OrthographyIndex) -> String
{
    let supported = index.supported_minimum_inclusive();
    let mut out = format!(
        "The font has minimal or better support for {} orthographies:\n",
        supported.len()
    );

    name_list(&mut out, supported);
    out
}

/// орфографии, которым не хватает только пунктуации
pub fn format_missing_punctuation(index: &OrthographyIndex, max_missing: usize) -> String
{
    let mut out = String::from("Orthographies which can be supported by adding punctuation characters:\n");

    out.push_str(&format_orthography_table(
        index.almost_supported_punctuation(max_missing),
        ReportField::MissingPunctuation,
    ));
    out
}

/// орфографии, которым не хватает не более n основных символов
pub fn format_near_misses(index: &OrthographyIndex, n: usize) -> String
{
    let mut out = format!(
        "Orthographies which can be supported with max. {} additional {}:\n",
        n,
        match n == 1 {
            true => "character",
            false => "characters",
        }
    );

    out.push_str(&format_orthography_table(index.almost_supported(n), ReportField::MissingBase));
    out
}

/// символы шрифта, не используемые поддерживаемыми орфографиями
pub fn format_kill_list(index: &OrthographyIndex) -> String
{
    let codepoints = kill_list(index);
    let mut out = format!(
        "The font has {} characters which are not used by any supported orthography:\n",
        codepoints.len()
    );

    for code in codepoints {
        character_line(&mut out, code);
    }

    out
}

/// пары для кернинга, по одной в строке (имена глифов)
pub fn format_kerning_pairs(index: &OrthographyIndex, include_optional: bool, with_repetition: bool) -> String
{
    let mut out = String::new();

    let mut orthographies = index.supported_minimum_inclusive();
    orthographies.sort();

    for orthography in orthographies {
        let count = orthography.unicodes_base().len()
            + match include_optional {
                true => orthography.unicodes_optional().len(),
                false => 0,
            };

        let _ = writeln!(out, "{}: {} characters", orthography.name(), count);
    }

    let pairs = kerning_pairs(index, include_optional, with_repetition);
    let _ = writeln!(out, "{} possible combinations:", pairs.len());

    for (left, right) in pairs {
        let _ = writeln!(
            out,
            "{} {}",
            glyph_name_for_codepoint(left),
            glyph_name_for_codepoint(right)
        );
    }

    out
}

/// уровень поддержки орфографии
pub fn support_level(orthography: &Orthography) -> &'static str
{
    if orthography.support_full() {
        "full"
    } else if orthography.support_basic() {
        "basic"
    } else if orthography.support_minimal() {
        "minimal"
    } else if orthography.support_minimal_inclusive() {
        "minimal or better"
    } else {
        "none"
    }
}

/// уровень поддержки и недостающие символы одной орфографии
pub fn format_support(orthography: &Orthography) -> String
{
    let scan = orthography.scan_result();
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", orthography.name(), orthography.id());
    let _ = writeln!(out, "    Support: {}", support_level(orthography));
    let _ = writeln!(
        out,
        "    Coverage: base {:.1} %, optional {:.1} %, punctuation {:.1} %",
        scan.base_pc * 100.0,
        scan.optional_pc * 100.0,
        scan.punctuation_pc * 100.0
    );

    for (heading, field) in [
        ("Missing base characters", ReportField::MissingBase),
        ("Missing optional characters", ReportField::MissingOptional),
        ("Missing punctuation", ReportField::MissingPunctuation),
    ] {
        let missing = field.of(orthography);

        if missing.is_empty() {
            continue;
        }

        let _ = writeln!(out, "  {} ({}):", heading, missing.len());

        for &code in missing {
            character_line(&mut out, code);
        }
    }

    out
}
