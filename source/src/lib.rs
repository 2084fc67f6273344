#[macro_use]
extern crate lazy_static;

pub mod properties;

mod aglfn;
mod blocks;
mod names;
mod ranges;
mod scripts;
mod unicode;

pub use unicode::CodepointGroup;
pub use unicode::UnicodeTable;
pub use unicode::UNICODE;

pub use unicode::category_for;
pub use unicode::codepoint;
pub use unicode::decomposition_of;
pub use unicode::decomposition_tag_of;
pub use unicode::group_for;
pub use unicode::lowercase_of;
pub use unicode::titlecase_of;
pub use unicode::uppercase_of;

pub use ranges::RangeEntry;
pub use ranges::RangeTable;

pub use blocks::block_codepoints;
pub use blocks::block_for;
pub use blocks::block_range;
pub use blocks::blocks;
pub use blocks::BLOCKS;

pub use scripts::script_for;
pub use scripts::SCRIPTS;

pub use aglfn::aglfn_code;
pub use aglfn::aglfn_name;

pub use names::hangul_syllable_name;
pub use names::name_for;
