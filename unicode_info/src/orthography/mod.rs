use std::cmp::Ordering;
use std::collections::BTreeSet;

use unicode_info_source::{lowercase_of, uppercase_of};

pub mod catalog;
pub mod index;

/// основная письменность языка
pub const DEFAULT_SCRIPT: &str = "DFLT";
/// основная территория языка
pub const DEFAULT_TERRITORY: &str = "dflt";

/// идентификатор орфографии: язык, письменность, территория
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrthographyKey
{
    pub code: String,
    pub script: String,
    pub territory: String,
}

impl OrthographyKey
{
    pub fn new(code: &str, script: &str, territory: &str) -> Self
    {
        Self {
            code: code.to_owned(),
            script: script.to_owned(),
            territory: territory.to_owned(),
        }
    }

    /// орфография основной территории для того же языка и письменности
    pub fn default_territory(&self) -> Self
    {
        Self::new(&self.code, &self.script, DEFAULT_TERRITORY)
    }

    #[inline]
    pub fn is_default_territory(&self) -> bool
    {
        self.territory == DEFAULT_TERRITORY
    }

    /// код[_письменность][_территория], письменность и территория по умолчанию не указываются
    pub fn id(&self) -> String
    {
        let mut id = self.code.clone();

        if self.script != DEFAULT_SCRIPT {
            id.push('_');
            id.push_str(&self.script);
        }

        if self.territory != DEFAULT_TERRITORY {
            id.push('_');
            id.push_str(&self.territory);
        }

        id
    }
}

/// для каждого кодпоинта - соответствующая строчная буква, если ее нет - прописная;
/// кодпоинты без пары в другом регистре отбрасываются
pub fn cased(codepoints: &[u32]) -> BTreeSet<u32>
{
    codepoints
        .iter()
        .filter_map(|&c| lowercase_of(c).or_else(|| uppercase_of(c)))
        .collect()
}

/// кодпоинты без тех, чья строчная пара уже есть в списке; по возрастанию, без повторов
pub fn reduced(codepoints: &[u32]) -> Vec<u32>
{
    let set: BTreeSet<u32> = codepoints.iter().copied().collect();

    set.iter()
        .copied()
        .filter(|&c| !lowercase_of(c).is_some_and(|lc| set.contains(&lc)))
        .collect()
}

/// набор символов вместе с парами в другом регистре, без игнорируемых
fn extended(codepoints: &[u32], ignored: &BTreeSet<u32>) -> BTreeSet<u32>
{
    codepoints
        .iter()
        .copied()
        .chain(cased(codepoints))
        .filter(|c| !ignored.contains(c))
        .collect()
}

/// результат сравнения орфографии с набором символов шрифта
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanResult
{
    pub missing_base: BTreeSet<u32>,
    pub missing_optional: BTreeSet<u32>,
    pub missing_punctuation: BTreeSet<u32>,
    pub missing_all: BTreeSet<u32>,
    /// доля имеющихся основных символов (0, если набор пуст)
    pub base_pc: f64,
    pub optional_pc: f64,
    pub punctuation_pc: f64,
    /// сравнение выполнено
    pub scanned: bool,
}

/// орфография: набор символов, необходимый для записи языка
#[derive(Debug, Clone)]
pub struct Orthography
{
    key: OrthographyKey,
    name: String,
    speakers: u64,
    unicodes_base: BTreeSet<u32>,
    unicodes_optional: BTreeSet<u32>,
    unicodes_punctuation: BTreeSet<u32>,
    unicodes_base_punctuation: BTreeSet<u32>,
    unicodes_any: BTreeSet<u32>,
    scan: ScanResult,
}

impl Orthography
{
    /// наборы символов дополняются парами в другом регистре, игнорируемые кодпоинты исключаются,
    /// из дополнительных символов исключаются основные
    pub fn new(
        key: OrthographyKey,
        name: &str,
        base: &[u32],
        optional: &[u32],
        punctuation: &[u32],
        ignored: &BTreeSet<u32>,
    ) -> Self
    {
        let mut orthography = Self {
            key,
            name: name.to_owned(),
            speakers: 0,
            unicodes_base: extended(base, ignored),
            unicodes_optional: extended(optional, ignored),
            unicodes_punctuation: extended(punctuation, ignored),
            unicodes_base_punctuation: BTreeSet::new(),
            unicodes_any: BTreeSet::new(),
            scan: ScanResult::default(),
        };

        orthography.update_derived_sets();
        orthography
    }

    /// пересчет производных наборов
    fn update_derived_sets(&mut self)
    {
        self.unicodes_optional = &self.unicodes_optional - &self.unicodes_base;
        self.unicodes_base_punctuation = &self.unicodes_base | &self.unicodes_punctuation;
        self.unicodes_any = &self.unicodes_base_punctuation | &self.unicodes_optional;
    }

    /// заполнение пустых наборов из орфографии основной территории
    ///
    /// вызывается после загрузки всего каталога; возвращает true, если что-то было заимствовано
    pub fn fill_from_default(&mut self, parent: &Orthography) -> bool
    {
        if self.key.is_default_territory() {
            return false;
        }

        let mut filled = false;

        for (own, inherited) in [
            (&mut self.unicodes_base, &parent.unicodes_base),
            (&mut self.unicodes_optional, &parent.unicodes_optional),
            (&mut self.unicodes_punctuation, &parent.unicodes_punctuation),
        ] {
            if own.is_empty() && !inherited.is_empty() {
                own.clone_from(inherited);
                filled = true;
            }
        }

        if filled {
            self.update_derived_sets();
            self.forget_cmap();
        }

        filled
    }

    /// сравнение с набором символов шрифта
    pub fn scan(&mut self, cmap: &BTreeSet<u32>)
    {
        let missing_base: BTreeSet<u32> = self.unicodes_base.difference(cmap).copied().collect();
        let missing_optional: BTreeSet<u32> = self.unicodes_optional.difference(cmap).copied().collect();
        let missing_punctuation: BTreeSet<u32> = self.unicodes_punctuation.difference(cmap).copied().collect();

        let missing_all = missing_base
            .iter()
            .chain(missing_optional.iter())
            .chain(missing_punctuation.iter())
            .copied()
            .collect();

        self.scan = ScanResult {
            base_pc: coverage(missing_base.len(), self.unicodes_base.len()),
            optional_pc: coverage(missing_optional.len(), self.unicodes_optional.len()),
            punctuation_pc: coverage(missing_punctuation.len(), self.unicodes_punctuation.len()),
            missing_base,
            missing_optional,
            missing_punctuation,
            missing_all,
            scanned: true,
        };
    }

    /// сброс результатов сравнения
    #[inline]
    pub fn forget_cmap(&mut self)
    {
        self.scan = ScanResult::default();
    }

    #[inline]
    pub fn key(&self) -> &OrthographyKey
    {
        &self.key
    }

    #[inline]
    pub fn code(&self) -> &str
    {
        &self.key.code
    }

    #[inline]
    pub fn script(&self) -> &str
    {
        &self.key.script
    }

    #[inline]
    pub fn territory(&self) -> &str
    {
        &self.key.territory
    }

    #[inline]
    pub fn id(&self) -> String
    {
        self.key.id()
    }

    #[inline]
    pub fn name(&self) -> &str
    {
        &self.name
    }

    /// количество носителей языка, 0 - неизвестно
    #[inline]
    pub fn speakers(&self) -> u64
    {
        self.speakers
    }

    #[inline]
    pub fn set_speakers(&mut self, speakers: u64)
    {
        self.speakers = speakers;
    }

    #[inline]
    pub fn unicodes_base(&self) -> &BTreeSet<u32>
    {
        &self.unicodes_base
    }

    #[inline]
    pub fn unicodes_optional(&self) -> &BTreeSet<u32>
    {
        &self.unicodes_optional
    }

    #[inline]
    pub fn unicodes_punctuation(&self) -> &BTreeSet<u32>
    {
        &self.unicodes_punctuation
    }

    #[inline]
    pub fn unicodes_base_punctuation(&self) -> &BTreeSet<u32>
    {
        &self.unicodes_base_punctuation
    }

    #[inline]
    pub fn unicodes_any(&self) -> &BTreeSet<u32>
    {
        &self.unicodes_any
    }

    #[inline]
    pub fn scan_result(&self) -> &ScanResult
    {
        &self.scan
    }

    #[inline]
    pub fn missing_base(&self) -> &BTreeSet<u32>
    {
        &self.scan.missing_base
    }

    #[inline]
    pub fn missing_optional(&self) -> &BTreeSet<u32>
    {
        &self.scan.missing_optional
    }

    #[inline]
    pub fn missing_punctuation(&self) -> &BTreeSet<u32>
    {
        &self.scan.missing_punctuation
    }

    #[inline]
    pub fn missing_all(&self) -> &BTreeSet<u32>
    {
        &self.scan.missing_all
    }

    #[inline]
    pub fn num_missing_base(&self) -> usize
    {
        self.scan.missing_base.len()
    }

    #[inline]
    pub fn num_missing_optional(&self) -> usize
    {
        self.scan.missing_optional.len()
    }

    #[inline]
    pub fn num_missing_punctuation(&self) -> usize
    {
        self.scan.missing_punctuation.len()
    }

    #[inline]
    pub fn num_missing_all(&self) -> usize
    {
        self.scan.missing_all.len()
    }

    /// есть все символы: основные, дополнительные и пунктуация
    pub fn support_full(&self) -> bool
    {
        self.num_missing_base() == 0 && self.num_missing_optional() == 0 && self.num_missing_punctuation() == 0
    }

    /// есть основные символы и пунктуация
    pub fn support_basic(&self) -> bool
    {
        self.num_missing_base() == 0 && self.num_missing_punctuation() == 0
    }

    /// есть только основные символы: не хватает и дополнительных символов, и пунктуации
    pub fn support_minimal(&self) -> bool
    {
        self.num_missing_base() == 0 && self.num_missing_optional() != 0 && self.num_missing_punctuation() != 0
    }

    /// есть основные символы, остальное не важно
    pub fn support_minimal_inclusive(&self) -> bool
    {
        self.num_missing_base() == 0
    }

    /// не хватает не более max_missing символов из всех наборов
    pub fn almost_supported_full(&self, max_missing: usize) -> bool
    {
        (1 ..= max_missing).contains(&self.num_missing_all())
    }

    /// не хватает не более max_missing основных символов
    pub fn almost_supported_basic(&self, max_missing: usize) -> bool
    {
        (1 ..= max_missing).contains(&self.num_missing_base())
    }

    /// основные символы есть, не хватает не более max_missing знаков пунктуации
    pub fn almost_supported_punctuation(&self, max_missing: usize) -> bool
    {
        self.num_missing_base() == 0 && (1 ..= max_missing).contains(&self.num_missing_punctuation())
    }

    /// используется ли кодпоинт в основных символах или пунктуации
    #[inline]
    pub fn uses_unicode_base(&self, code: u32) -> bool
    {
        self.unicodes_base_punctuation.contains(&code)
    }

    /// используется ли кодпоинт в каком-либо наборе
    #[inline]
    pub fn uses_unicode_any(&self, code: u32) -> bool
    {
        self.unicodes_any.contains(&code)
    }
}

/// доля имеющихся символов набора
#[inline]
fn coverage(missing: usize, total: usize) -> f64
{
    match total {
        0 => 0.0,
        _ => 1.0 - missing as f64 / total as f64,
    }
}

impl PartialEq for Orthography
{
    fn eq(&self, other: &Self) -> bool
    {
        self.name == other.name && self.key == other.key
    }
}

impl Eq for Orthography {}

impl PartialOrd for Orthography
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering>
    {
        Some(self.cmp(other))
    }
}

/// по названию, затем по идентификатору
impl Ord for Orthography
{
    fn cmp(&self, other: &Self) -> Ordering
    {
        self.name
            .cmp(&other.name)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl core::fmt::Display for Orthography
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{}", self.name)
    }
}
