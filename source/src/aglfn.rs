use std::collections::HashMap;

lazy_static! {
    /// имя глифа -> кодпоинт (Adobe Glyph List For New Fonts)
    pub static ref AGLFN_CODES: HashMap<&'static str, u32> = aglfn().0;
    /// кодпоинт -> имя глифа
    pub static ref AGLFN_NAMES: HashMap<u32, &'static str> = aglfn().1;
}

const DATA: &str = include_str!("./../data/agl/aglfn.txt");

/// разбор aglfn.txt: строки вида "0041;A;LATIN CAPITAL LETTER A"
fn aglfn() -> (HashMap<&'static str, u32>, HashMap<u32, &'static str>)
{
    let mut codes = HashMap::new();
    let mut names = HashMap::new();

    for line in DATA.lines() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(';');

        let entry = match (fields.next(), fields.next()) {
            (Some(code), Some(name)) => u32::from_str_radix(code, 16).ok().map(|code| (code, name)),
            _ => None,
        };

        match entry {
            Some((code, name)) => {
                codes.insert(name, code);
                names.insert(code, name);
            }
            None => log::warn!("aglfn.txt: malformed record: {}", line),
        }
    }

    (codes, names)
}

/// кодпоинт для имени глифа из AGLFN
#[inline]
pub fn aglfn_code(name: &str) -> Option<u32>
{
    AGLFN_CODES.get(name).copied()
}

/// имя глифа из AGLFN для кодпоинта
#[inline]
pub fn aglfn_name(code: u32) -> Option<&'static str>
{
    AGLFN_NAMES.get(&code).copied()
}
