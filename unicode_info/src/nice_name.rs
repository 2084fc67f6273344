use regex::{Captures, Regex};

lazy_static! {
    static ref RE_SMALL_LETTER: Regex = Regex::new(r"^(.+SMALL LETTER )([A-Z\- ]+?)( WITH.+)?$").unwrap();
    static ref RE_CAPITAL_LETTER: Regex = Regex::new(r"^(.+CAPITAL LETTER )([A-Z\- ]+?)( WITH.+)?$").unwrap();
    static ref RE_ALLAH: Regex = Regex::new(r"^(.+?)(ALLAH)(.+)?$").unwrap();
}

/// правило преобразования названия: None, если правило не подходит
type NameRule = fn(&str) -> Option<String>;

/// правила в порядке применения, срабатывает первое подходящее
const NICE_NAME_RULES: [NameRule; 3] = [capital_letter, small_letter, allah];

/// названия букв, которые не меняют регистр
fn letter_name(letter: &str) -> Option<&'static str>
{
    match letter {
        "AE" => Some("AE"),
        _ => None,
    }
}

/// человекочитаемое название символа, полученное из названия Unicode
///
/// "LATIN CAPITAL LETTER A WITH ACUTE" -> "Latin capital letter A with acute"
pub fn nice_name(name: &str) -> String
{
    NICE_NAME_RULES
        .iter()
        .filter_map(|rule| rule(name))
        .find(|result| !result.is_empty())
        .unwrap_or_else(|| capitalize(name))
}

fn capital_letter(name: &str) -> Option<String>
{
    let captures = RE_CAPITAL_LETTER.captures(name)?;
    let letter = &captures[2];

    let mut result = capitalize(&captures[1]);

    let mut parts = letter.split_whitespace();

    match (letter.contains(' '), parts.next()) {
        (true, Some(first @ ("SHORT" | "STRAIGHT"))) => {
            let rest: Vec<String> = parts.map(title).collect();

            result.push_str(&first.to_lowercase());
            rest.iter().for_each(|part| {
                result.push(' ');
                result.push_str(part);
            });
        }
        _ => result.push_str(&letter_name(letter).map(str::to_owned).unwrap_or_else(|| title(letter))),
    }

    push_lowercase_tail(&mut result, &captures);

    Some(result)
}

fn small_letter(name: &str) -> Option<String>
{
    let captures = RE_SMALL_LETTER.captures(name)?;
    let letter = &captures[2];

    let mut result = capitalize(&captures[1]);

    let mut parts = letter.split_whitespace();

    match (letter.contains(' '), parts.next()) {
        (true, Some(first @ ("UKRAINIAN" | "BYELORUSSIAN-UKRAINIAN"))) => {
            let rest: Vec<String> = parts.map(str::to_lowercase).collect();

            result.push_str(&title(first));
            rest.iter().for_each(|part| {
                result.push(' ');
                result.push_str(part);
            });
        }
        _ => result.push_str(
            &letter_name(letter)
                .map(str::to_owned)
                .unwrap_or_else(|| letter.to_lowercase()),
        ),
    }

    push_lowercase_tail(&mut result, &captures);

    Some(result)
}

fn allah(name: &str) -> Option<String>
{
    let captures = RE_ALLAH.captures(name)?;

    let mut result = capitalize(&captures[1]);
    result.push_str(&title(&captures[2]));

    push_lowercase_tail(&mut result, &captures);

    Some(result)
}

/// третья группа (если есть) добавляется строчными буквами
#[inline]
fn push_lowercase_tail(result: &mut String, captures: &Captures)
{
    if let Some(tail) = captures.get(3) {
        result.push_str(&tail.as_str().to_lowercase());
    }
}

/// первая буква прописная, остальные строчные
pub fn capitalize(s: &str) -> String
{
    let mut chars = s.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// прописная буква в начале каждого слова, словом считается последовательность букв, имеющих регистр
pub fn title(s: &str) -> String
{
    let mut result = String::with_capacity(s.len());
    let mut previous_cased = false;

    for c in s.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();

        match previous_cased {
            true => result.extend(c.to_lowercase()),
            false => result.extend(c.to_uppercase()),
        }

        previous_cased = cased;
    }

    result
}
