use crate::ranges::RangeTable;

lazy_static! {
    /// письменности Unicode
    pub static ref SCRIPTS: RangeTable = scripts_table();
}

const DATA: &str = include_str!("./../data/ucd/16.0.0/Scripts.txt");

/// разбор Scripts.txt из UCD
fn scripts_table() -> RangeTable
{
    match RangeTable::parse("Scripts.txt", DATA) {
        Ok(table) => table,
        Err(e) => {
            log::warn!("Scripts.txt: {}", e);
            RangeTable::default()
        }
    }
}

/// письменность, к которой относится кодпоинт
///
/// None - для кодпоинтов, не перечисленных в Scripts.txt (неявное значение Unknown)
#[inline]
pub fn script_for(code: u32) -> Option<&'static str>
{
    SCRIPTS.label_for(code)
}
