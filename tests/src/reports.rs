use unicode_info::reports::*;

use crate::data::{index, latin1};

#[test]
fn supported()
{
    let mut index = index();
    index.set_cmap(latin1());

    assert_eq!(
        format_supported(&index, false),
        "The font supports 4 orthographies:\nAbc\nAbc (South Africa)\nPrime\nor_ZA\n"
    );
    assert_eq!(
        format_supported_minimum(&index),
        "The font has minimal support for 0 orthographies:\n"
    );
}

/// прописной эсцет нет ни в Latin-1, ни в AGLFN
#[test]
fn near_misses()
{
    let mut index = index();
    index.set_cmap(latin1());

    assert_eq!(
        format_near_misses(&index, 1),
        "Orthographies which can be supported with max. 1 additional character:\n\
         \nGerman\n    0x1E9E\tuni1E9E\tLatin Capital Letter Sharp S\n"
    );
}

#[test]
fn kill()
{
    let mut index = index();
    index.set_cmap(latin1());

    let codepoints = kill_list(&index);

    for used in [0x41, 0x42, 0x43, 0x61, 0x62, 0x63, 0x2E, 0x58, 0x78] {
        assert!(!codepoints.contains(&used), "0x{:04X}", used);
    }

    // or_ZA без носителей, но поддерживается: ее символы остаются
    assert_eq!(index.speakers_supported_by(0x78), 0);

    assert!(codepoints.contains(&0x20));
    assert!(codepoints.contains(&0x7A));
    assert!(codepoints.contains(&0xE4));
    assert_eq!(codepoints.len(), latin1().len() - 9);

    assert!(format_kill_list(&index).starts_with("The font has 182 characters which are not used"));
}

#[test]
fn pairs()
{
    let mut index = index();
    index.set_cmap(latin1());

    assert_eq!(kerning_pairs(&index, false, false).len(), 16);
    assert_eq!(kerning_pairs(&index, false, true).len(), 24);
    assert_eq!(kerning_pairs(&index, true, false).len(), 29);

    let report = format_kerning_pairs(&index, false, true);
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(
        &lines[.. 6],
        &[
            "Abc: 6 characters",
            "Abc (South Africa): 6 characters",
            "Prime: 2 characters",
            "or_ZA: 2 characters",
            "24 possible combinations:",
            "A A",
        ]
    );
}

#[test]
fn support()
{
    let mut index = index();
    index.set_cmap(latin1());

    let german = index.orthography_by_id("de").unwrap();
    let report = format_support(german);

    assert!(report.starts_with("German (de)\n    Support: none\n"));
    assert!(report.contains("  Missing base characters (1):\n    0x1E9E\tuni1E9E\t"));
    assert!(report.contains("  Missing punctuation (2):\n"));
    assert!(!report.contains("Missing optional"));

    assert_eq!(support_level(index.orthography_by_id("abc").unwrap()), "full");
    assert_eq!(support_level(index.orthography_by_id("ru").unwrap()), "none");
}
