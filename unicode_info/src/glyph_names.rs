use std::collections::BTreeSet;

use unicode_info_source::{aglfn_code, aglfn_name, lowercase_of, uppercase_of};

/// начало диапазона орнаментов orn001 - orn999 в области для приватного использования
pub const ORNAMENTS_BASE: u32 = 0xEA00;

/// кодпоинт для имени глифа
///
/// распознаются имена из AGLFN, uniXXXX, uXXXXX и ornNNN; для лигатур (a_b) и вариантов (a.sc) - None
pub fn codepoint_for_glyph_name(name: &str) -> Option<u32>
{
    if name.contains('_') || name.get(1 ..).is_some_and(|rest| rest.contains('.')) {
        return None;
    }

    if let Some(code) = aglfn_code(name) {
        return Some(code);
    }

    if let Some(hex) = name.strip_prefix("uni").filter(|hex| hex.len() == 4) {
        return parse_hex(hex);
    }

    if let Some(hex) = name.strip_prefix('u').filter(|hex| hex.len() == 5) {
        return parse_hex(hex);
    }

    if let Some(digits) = name.strip_prefix("orn").filter(|digits| digits.len() == 3) {
        return match digits.bytes().all(|b| b.is_ascii_digit()) {
            true => digits.parse::<u32>().ok().map(|n| ORNAMENTS_BASE + n),
            false => None,
        };
    }

    None
}

/// имя глифа для кодпоинта: из AGLFN, иначе uniXXXX (BMP) или uXXXXX
pub fn glyph_name_for_codepoint(code: u32) -> String
{
    match aglfn_name(code) {
        Some(name) => name.to_owned(),
        None => match code < 0x10000 {
            true => format!("uni{:04X}", code),
            false => format!("u{:05X}", code),
        },
    }
}

/// кодпоинты вместе с соответствующими им строчными (или прописными) буквами и именами глифов,
/// без повторов, по возрастанию кодпоинта
pub fn expanded_glyph_list(codepoints: &[u32]) -> Vec<(u32, String)>
{
    let mut expanded: BTreeSet<u32> = BTreeSet::new();

    for &code in codepoints {
        expanded.insert(code);

        if let Some(mapped) = lowercase_of(code).or_else(|| uppercase_of(code)) {
            expanded.insert(mapped);
        }
    }

    expanded
        .into_iter()
        .map(|code| (code, glyph_name_for_codepoint(code)))
        .collect()
}

/// строго шестнадцатеричные цифры (from_str_radix допускает знак)
fn parse_hex(hex: &str) -> Option<u32>
{
    match hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        true => u32::from_str_radix(hex, 16).ok(),
        false => None,
    }
}
