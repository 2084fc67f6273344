use crate::properties::PropertiesError;

/// диапазон кодпоинтов с названием (блок, письменность)
#[derive(Debug, Clone, PartialEq)]
pub struct RangeEntry
{
    /// первый кодпоинт
    pub low: u32,
    /// последний кодпоинт (включительно)
    pub high: u32,
    /// название
    pub label: String,
}

/// упорядоченный набор непересекающихся диапазонов
#[derive(Debug, Default)]
pub struct RangeTable
{
    entries: Vec<RangeEntry>,
}

impl RangeTable
{
    /// таблица из набора диапазонов: сортируем и проверяем, что диапазоны не пересекаются
    pub fn new(mut entries: Vec<RangeEntry>) -> Result<Self, PropertiesError>
    {
        entries.sort_by_key(|e| e.low);

        for pair in entries.windows(2) {
            if pair[0].high >= pair[1].low {
                return Err(PropertiesError::OverlappingRanges);
            }
        }

        match entries.iter().all(|e| e.low <= e.high) {
            true => Ok(Self { entries }),
            false => Err(PropertiesError::MalformedRecord),
        }
    }

    /// разбор файла UCD в формате "XXXX..YYYY ; Label # комментарий"
    ///
    /// строки с ошибками пропускаются, соседние диапазоны с одинаковым названием объединяются
    pub fn parse(source: &str, data: &str) -> Result<Self, PropertiesError>
    {
        let mut entries: Vec<RangeEntry> = Vec::new();

        for line in data.lines() {
            let line = match line.split_once('#') {
                Some((content, _)) => content,
                None => line,
            };

            if line.trim().is_empty() {
                continue;
            }

            let entry = match parse_entry(line) {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("{}: {}: {}", source, e, line);
                    continue;
                }
            };

            match entries.last_mut() {
                Some(last) if last.label == entry.label && last.high + 1 == entry.low => last.high = entry.high,
                _ => entries.push(entry),
            }
        }

        Self::new(entries)
    }

    /// диапазон, содержащий кодпоинт (двоичный поиск)
    pub fn find(&self, code: u32) -> Option<&RangeEntry>
    {
        let index = self.entries.partition_point(|e| e.high < code);

        self.entries.get(index).filter(|e| e.low <= code)
    }

    /// название диапазона, содержащего кодпоинт
    #[inline]
    pub fn label_for(&self, code: u32) -> Option<&str>
    {
        self.find(code).map(|e| e.label.as_str())
    }

    /// первый диапазон с указанным названием
    pub fn find_label(&self, label: &str) -> Option<&RangeEntry>
    {
        self.entries.iter().find(|e| e.label == label)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &RangeEntry>
    {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }
}

fn parse_entry(line: &str) -> Result<RangeEntry, PropertiesError>
{
    let (range, label) = line.split_once(';').ok_or(PropertiesError::MalformedRecord)?;

    let (low, high) = match range.trim().split_once("..") {
        Some((low, high)) => (u32::from_str_radix(low, 16)?, u32::from_str_radix(high, 16)?),
        None => {
            let code = u32::from_str_radix(range.trim(), 16)?;
            (code, code)
        }
    };

    let label = label.trim();

    if label.is_empty() || low > high {
        return Err(PropertiesError::MalformedRecord);
    }

    Ok(RangeEntry { low, high, label: label.to_owned() })
}
