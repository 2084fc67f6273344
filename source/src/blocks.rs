use core::ops::RangeInclusive;

use crate::ranges::{RangeEntry, RangeTable};

lazy_static! {
    /// блоки Unicode
    pub static ref BLOCKS: RangeTable = blocks_table();
}

const DATA: &str = include_str!("./../data/ucd/16.0.0/Blocks.txt");

/// разбор Blocks.txt из UCD
fn blocks_table() -> RangeTable
{
    match RangeTable::parse("Blocks.txt", DATA) {
        Ok(table) => table,
        Err(e) => {
            log::warn!("Blocks.txt: {}", e);
            RangeTable::default()
        }
    }
}

/// название блока, которому принадлежит кодпоинт
#[inline]
pub fn block_for(code: u32) -> Option<&'static str>
{
    BLOCKS.label_for(code)
}

/// первый и последний кодпоинты блока
pub fn block_range(name: &str) -> Option<(u32, u32)>
{
    BLOCKS.find_label(name).map(|e| (e.low, e.high))
}

/// кодпоинты блока (пустой диапазон, если блок неизвестен)
#[allow(clippy::reversed_empty_ranges)]
pub fn block_codepoints(name: &str) -> RangeInclusive<u32>
{
    match block_range(name) {
        Some((low, high)) => low ..= high,
        None => 1 ..= 0,
    }
}

/// все блоки по порядку
#[inline]
pub fn blocks() -> impl Iterator<Item = &'static RangeEntry>
{
    BLOCKS.iter()
}
