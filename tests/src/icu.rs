use icu_normalizer::DecomposingNormalizer as icu;
use unicode_info_source::{codepoint, decomposition_of, decomposition_tag_of};

/// диапазоны, декомпозиции которых не менялись между версиями Unicode
const RANGES: [(u32, u32); 5] = [
    (0x00A0, 0x024F),
    (0x0370, 0x03FF),
    (0x0400, 0x052F),
    (0x1E00, 0x1EFF),
    (0x1F00, 0x1FFF),
];

/// полная декомпозиция по UnicodeData.txt; compatibility - учитывать ли декомпозиции с тегами
fn decompose(code: u32, compatibility: bool, result: &mut Vec<u32>)
{
    let decomposition = decomposition_of(code);

    match decomposition.is_empty() || (!compatibility && decomposition_tag_of(code).is_some()) {
        true => result.push(code),
        false => decomposition
            .iter()
            .for_each(|&c| decompose(c, compatibility, result)),
    }
}

fn string(codes: &[u32]) -> String
{
    codes.iter().filter_map(|&c| char::from_u32(c)).collect()
}

/// сравниваем декомпозиции из UCD с результатами нормализации ICU
#[test]
fn icu()
{
    let icu_nfd = icu::new_nfd();
    let icu_nfkd = icu::new_nfkd();

    for (first, last) in RANGES {
        for code in first ..= last {
            if codepoint(code).is_none() {
                continue;
            }

            let source = string(&[code]);

            let mut nfd = vec![];
            decompose(code, false, &mut nfd);

            assert_eq!(icu_nfd.normalize(&source), string(&nfd), "nfd,  0x{:04X}", code);

            // совместимые декомпозиции проверяем только для латиницы
            if code > 0x024F {
                continue;
            }

            let mut nfkd = vec![];
            decompose(code, true, &mut nfkd);

            assert_eq!(icu_nfkd.normalize(&source), string(&nfkd), "nfkd, 0x{:04X}", code);
        }
    }
}
