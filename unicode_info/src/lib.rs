#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod error;
pub mod glyph_names;
pub mod info;
pub mod nice_name;
pub mod orthography;
pub mod reports;

pub use config::Config;
pub use error::Error;
pub use error::Result;

pub use info::UniInfo;

pub use glyph_names::codepoint_for_glyph_name;
pub use glyph_names::expanded_glyph_list;
pub use glyph_names::glyph_name_for_codepoint;

pub use nice_name::nice_name;

pub use orthography::catalog::Catalog;
pub use orthography::index::Cmap;
pub use orthography::index::OrthographyIndex;
pub use orthography::index::UsageLevel;
pub use orthography::Orthography;
pub use orthography::OrthographyKey;
pub use orthography::DEFAULT_SCRIPT;
pub use orthography::DEFAULT_TERRITORY;

pub use unicode_info_source as source;
