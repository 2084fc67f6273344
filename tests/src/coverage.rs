use std::collections::BTreeSet;

use unicode_info::{Catalog, Cmap, Error, Orthography, OrthographyIndex, OrthographyKey, UsageLevel};

use crate::data::{cmap, ids, index, latin1};

/// каталог загружается целиком, орфографии без основной территории остаются как есть
#[test]
fn catalog()
{
    let index = index();

    assert_eq!(
        ids(index.iter()),
        vec!["abc", "abc_ZA", "de", "or_ZA", "pr", "ru"]
    );

    let za = index.orthography("abc", "DFLT", "ZA").unwrap();
    let abc = index.orthography("abc", "DFLT", "dflt").unwrap();

    assert_eq!(za.name(), "Abc (South Africa)");
    assert_eq!(za.unicodes_base(), abc.unicodes_base());
    assert_eq!(za.unicodes_optional(), abc.unicodes_optional());
    assert_eq!(za.unicodes_punctuation(), abc.unicodes_punctuation());
    assert_eq!(za.speakers(), 100);

    let orphan = index.orthography_by_id("or_ZA").unwrap();

    assert_eq!(orphan.name(), "or_ZA");
    assert_eq!(orphan.unicodes_base(), &BTreeSet::from([0x58, 0x78]));
    assert_eq!(orphan.speakers(), 0);
}

/// наборы дополняются парами в другом регистре, игнорируемые кодпоинты исключаются
#[test]
fn character_sets()
{
    let index = index();

    let abc = index.orthography_by_id("abc").unwrap();
    assert_eq!(abc.unicodes_base(), &BTreeSet::from([0x41, 0x42, 0x43, 0x61, 0x62, 0x63]));
    assert_eq!(abc.unicodes_optional(), &BTreeSet::from([0x44, 0x64]));
    assert_eq!(abc.unicodes_any().len(), 9);

    let prime = index.orthography_by_id("pr").unwrap();
    assert_eq!(prime.unicodes_base(), &BTreeSet::from([0x41, 0x61]));
    assert_eq!(prime.unicodes_punctuation(), &BTreeSet::from([0x2E]));

    let german = index.orthography_by_id("de").unwrap();
    assert!(german.unicodes_base().contains(&0x1E9E));
    assert!(german.unicodes_base().contains(&0xDF));
    assert!(german.unicodes_base().contains(&0xC4));
    assert!(!german.unicodes_optional().contains(&0xE4));
}

/// шрифт с двумя буквами из трех
#[test]
fn partial_cmap()
{
    let mut index = index();
    index.set_cmap(cmap([0x41, 0x42]));

    let abc = index.orthography_by_id("abc").unwrap();

    assert_eq!(abc.missing_base(), &BTreeSet::from([0x43, 0x61, 0x62, 0x63]));
    assert_eq!(abc.missing_optional(), &BTreeSet::from([0x44, 0x64]));
    assert_eq!(abc.missing_punctuation(), &BTreeSet::from([0x2E]));
    assert_eq!(abc.num_missing_all(), 7);

    let scan = abc.scan_result();
    assert!(scan.scanned);
    assert!((scan.base_pc - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(scan.optional_pc, 0.0);
    assert_eq!(scan.punctuation_pc, 0.0);

    assert!(!abc.support_minimal_inclusive());
    assert!(abc.almost_supported_basic(4));
    assert!(!abc.almost_supported_basic(3));

    assert_eq!(ids(index.almost_supported(1)), vec!["pr"]);
    assert_eq!(ids(index.almost_supported(2)), vec!["or_ZA", "pr"]);
    assert!(index.supported(false).is_empty());
}

/// шрифт с Latin-1: не хватает только прописной эсцет
#[test]
fn latin1_cmap()
{
    let mut index = index();
    index.set_cmap(latin1());

    assert_eq!(ids(index.supported(false)), vec!["abc", "abc_ZA", "or_ZA", "pr"]);
    assert_eq!(ids(index.supported(true)), vec!["abc", "abc_ZA", "or_ZA", "pr"]);
    assert!(index.supported_minimum().is_empty());
    assert_eq!(ids(index.supported_minimum_inclusive()), vec!["abc", "abc_ZA", "or_ZA", "pr"]);

    let german = index.orthography_by_id("de").unwrap();

    assert_eq!(german.missing_base(), &BTreeSet::from([0x1E9E]));
    assert_eq!(german.missing_punctuation(), &BTreeSet::from([0x201C, 0x201E]));
    assert!(german.missing_optional().is_empty());

    assert_eq!(ids(index.almost_supported(1)), vec!["de"]);
    assert!(index.almost_supported_punctuation(5).is_empty());

    let russian = index.orthography_by_id("ru").unwrap();

    assert_eq!(russian.num_missing_base(), 66);
    assert!(russian.missing_punctuation().is_empty());
    assert_eq!(russian.scan_result().base_pc, 0.0);
}

/// не хватает только пунктуации
#[test]
fn punctuation_only()
{
    let mut index = index();
    index.set_cmap(cmap([0x41, 0x42, 0x43, 0x58, 0x61, 0x62, 0x63, 0x78]));

    assert_eq!(ids(index.almost_supported_punctuation(1)), vec!["abc", "abc_ZA", "pr"]);
    assert_eq!(ids(index.supported_minimum()), vec!["abc", "abc_ZA"]);
    assert_eq!(ids(index.supported(false)), vec!["or_ZA"]);
}

/// полная поддержка влечет основную, основная - минимальную
#[test]
fn support_levels()
{
    let mut index = index();

    for font in [Cmap::new(), cmap([0x41, 0x42]), latin1(), cmap(0x20 ..= 0x7E), cmap(0x400 ..= 0x4FF)] {
        index.set_cmap(font);

        for o in index.iter() {
            if o.support_full() {
                assert!(o.support_basic(), "{}", o.id());
            }

            if o.support_basic() || o.support_minimal() {
                assert!(o.support_minimal_inclusive(), "{}", o.id());
            }

            for n in 1 .. 10 {
                if o.almost_supported_basic(n) {
                    assert!(!o.support_minimal_inclusive(), "{}", o.id());
                }

                if o.almost_supported_full(n) {
                    assert!(!o.support_full(), "{}", o.id());
                }
            }
        }
    }
}

/// обратный индекс совпадает с перебором
#[test]
fn reverse_index()
{
    let mut index = index();
    index.build_reverse_index();

    let codepoints: BTreeSet<u32> = index.iter().flat_map(|o| o.unicodes_any().iter().copied()).collect();

    for &code in codepoints.iter() {
        let expected: Vec<String> = ids(index.iter().filter(|o| o.uses_unicode_base(code)));
        assert_eq!(ids(index.orthographies_using(code, UsageLevel::Base)), expected, "0x{:04X}", code);

        let expected: Vec<String> = ids(index.iter().filter(|o| o.uses_unicode_any(code)));
        assert_eq!(ids(index.orthographies_using(code, UsageLevel::Any)), expected, "0x{:04X}", code);
    }

    // дополнительные символы не попадают в обратный индекс
    assert!(index.orthographies_using(0xE9, UsageLevel::Base).is_empty());
    assert_eq!(ids(index.orthographies_using(0xE9, UsageLevel::Any)), vec!["de"]);
}

/// новая орфография видна в обратном индексе и сравнивается с текущим шрифтом
#[test]
fn added_orthography()
{
    let mut index = index();
    index.set_cmap(latin1());
    index.build_reverse_index();

    let before = index.orthographies_using(0xE6, UsageLevel::Base).len();
    let ignored = index.ignored_unicodes().clone();

    index.add_orthography(Orthography::new(
        OrthographyKey::new("da", "DFLT", "dflt"),
        "Danish",
        &[0x61, 0xE6, 0xF8, 0xE5],
        &[],
        &[0x2E],
        &ignored,
    ));

    assert_eq!(index.orthographies_using(0xE6, UsageLevel::Base).len(), before + 1);

    let danish = index.orthography_by_id("da").unwrap();

    assert!(danish.scan_result().scanned);
    assert!(danish.support_full());
}

/// повторная установка того же шрифта и сброс
#[test]
fn idempotence()
{
    let mut index = index();

    index.set_cmap(latin1());
    let first: Vec<_> = index.iter().map(|o| o.scan_result().clone()).collect();

    index.set_cmap(latin1());
    let second: Vec<_> = index.iter().map(|o| o.scan_result().clone()).collect();

    assert_eq!(first, second);

    index.set_cmap(cmap([0x41]));
    index.set_cmap(latin1());
    let third: Vec<_> = index.iter().map(|o| o.scan_result().clone()).collect();

    assert_eq!(first, third);

    index.clear_cmap();

    assert!(index.cmap().is_empty());
    assert!(index.iter().all(|o| !o.scan_result().scanned && o.missing_all().is_empty()));
}

/// носители языков, поддерживаемых шрифтом
#[test]
fn speakers()
{
    let mut index = index();
    index.set_cmap(latin1());

    // abc и abc_ZA считаются отдельно
    assert_eq!(index.speakers_supported_by(0x61), 210);
    assert_eq!(index.speakers_supported_by(0x2E), 210);
    assert_eq!(index.speakers_supported_by(0x43), 200);
    assert_eq!(index.speakers_supported_by(0x7A), 0);
    assert_eq!(index.speakers_supported_by(0x430), 0);
    assert_eq!(index.speakers_supported_by(0x78), 0);
}

/// у каждой территориальной орфографии свое число носителей
#[test]
fn speakers_per_territory()
{
    let mut catalog = Catalog::from_characters_json(
        r#"{ "en": { "DFLT": {
            "dflt": { "name": "English", "unicodes": { "base": "A" } },
            "ZA": { "name": "English (South Africa)", "unicodes": { "base": "A" } },
            "GB": { "name": "English (United Kingdom)", "unicodes": { "base": "A" } }
        } } }"#,
    )
    .unwrap();

    catalog.speakers.insert("en".to_owned(), 100);

    let mut index = OrthographyIndex::from_catalog(catalog, BTreeSet::new());
    index.set_cmap(cmap([0x41, 0x61]));

    assert_eq!(index.len(), 3);
    assert_eq!(index.speakers_supported_by(0x41), 300);
    assert_eq!(index.speakers_supported_by(0x61), 300);
    assert_eq!(index.speakers_supported_by(0x62), 0);
}

/// названия языков, письменностей и территорий
#[test]
fn display_names()
{
    let index = index();

    assert_eq!(index.language_name("de"), "German");
    assert_eq!(index.language_name("or"), "or");
    assert_eq!(index.script_name("DFLT"), "Default");
    assert_eq!(index.script_name("Cyrl"), "Cyrillic");
    assert_eq!(index.territory_name("dflt"), "Default");
    assert_eq!(index.territory_name("ZA"), "South Africa");
    assert_eq!(index.territory_name("XX"), "XX");
}

/// каталог в виде строк символов
#[test]
fn text_catalog()
{
    let catalog = Catalog::from_characters_json(
        r#"{ "el": { "DFLT": { "dflt": { "name": "Greek", "unicodes": { "base": "Α α Β β Γ γ ς" } } } } }"#,
    )
    .unwrap();

    let index = OrthographyIndex::from_catalog(catalog, BTreeSet::new());
    let greek = index.orthography_by_id("el").unwrap();

    assert_eq!(
        greek.unicodes_base(),
        &BTreeSet::from([0x391, 0x392, 0x393, 0x3A3, 0x3B1, 0x3B2, 0x3B3, 0x3C2])
    );
}

/// отсутствующий каталог
#[test]
fn missing_catalog()
{
    let mut config = crate::data::config();
    config.catalog = "nonexistent".to_owned();

    match OrthographyIndex::load(&config) {
        Err(Error::Io { path, .. }) => assert!(path.ends_with("nonexistent.json")),
        other => panic!("unexpected result: {:?}", other.map(|index| index.len())),
    }
}
