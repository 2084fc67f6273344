use crate::unicode::{codepoint, group_for};

/// начало блока слогов хангыль
pub const HANGUL_S_BASE: u32 = 0xAC00;
/// количество гласных * количество завершающих согласных
pub const HANGUL_N_COUNT: u32 = 588;
/// количество завершающих согласных (на 1 больше)
pub const HANGUL_T_COUNT: u32 = 28;
/// количество слогов хангыль в Unicode
pub const HANGUL_S_COUNT: u32 = 11172;

/// краткие названия ведущих согласных чамо
const JAMO_L: [&str; 19] = [
    "G", "GG", "N", "D", "DD", "R", "M", "B", "BB", "S", "SS", "", "J", "JJ", "C", "K", "T", "P", "H",
];

/// краткие названия гласных чамо
const JAMO_V: [&str; 21] = [
    "A", "AE", "YA", "YAE", "EO", "E", "YEO", "YE", "O", "WA", "WAE", "OE", "YO", "U", "WEO", "WE", "WI", "YU", "EU",
    "YI", "I",
];

/// краткие названия завершающих согласных чамо (первый вариант - отсутствие согласной)
const JAMO_T: [&str; 28] = [
    "", "G", "GG", "GS", "N", "NJ", "NH", "D", "L", "LG", "LM", "LB", "LS", "LT", "LP", "LH", "M", "B", "BS", "S",
    "SS", "NG", "J", "C", "K", "T", "P", "H",
];

/// название символа Unicode
///
/// для диапазонов UnicodeData.txt название составляется по правилам NR1 (слоги хангыль), NR2 (иероглифы),
/// для суррогатов и символов для приватного использования - метка в угловых скобках
pub fn name_for(code: u32) -> Option<String>
{
    if let Some(codepoint) = codepoint(code) {
        return Some(codepoint.name.clone());
    }

    let group = group_for(code)?;
    let label = group.label.as_str();

    Some(match label {
        "Hangul Syllable" => hangul_syllable_name(code)?,
        "Non Private Use High Surrogate" | "Private Use High Surrogate" | "Low Surrogate" => {
            format!("<{} #{}>", label, code - group.first)
        }
        _ if label.ends_with("Private Use") => "<Private Use>".to_owned(),
        _ if label.starts_with("CJK Ideograph") => format!("CJK UNIFIED IDEOGRAPH-{:04X}", code),
        _ if label.starts_with("Tangut Ideograph") => format!("TANGUT IDEOGRAPH-{:04X}", code),
        _ => {
            log::debug!("no name rule for range {}", label);
            return None;
        }
    })
}

/// название слога хангыль (NR1)
pub fn hangul_syllable_name(code: u32) -> Option<String>
{
    let s_index = code.wrapping_sub(HANGUL_S_BASE);

    if s_index >= HANGUL_S_COUNT {
        return None;
    }

    let l = (s_index / HANGUL_N_COUNT) as usize;
    let v = ((s_index % HANGUL_N_COUNT) / HANGUL_T_COUNT) as usize;
    let t = (s_index % HANGUL_T_COUNT) as usize;

    Some(format!("HANGUL SYLLABLE {}{}{}", JAMO_L[l], JAMO_V[v], JAMO_T[t]))
}
