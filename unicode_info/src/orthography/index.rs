use std::cell::OnceCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::time::Instant;

use super::catalog::Catalog;
use super::{Orthography, OrthographyKey, DEFAULT_SCRIPT, DEFAULT_TERRITORY};
use crate::config::Config;
use crate::error::Result;

/// набор символов шрифта: кодпоинт -> имя глифа
pub type Cmap = BTreeMap<u32, String>;

/// в каких наборах орфографии искать кодпоинт
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel
{
    /// основные символы и пунктуация (обратный индекс)
    Base,
    /// любые символы (перебор без кеширования)
    Any,
}

/// все орфографии каталога
#[derive(Debug, Default)]
pub struct OrthographyIndex
{
    orthographies: Vec<Orthography>,
    index: HashMap<OrthographyKey, usize>,
    /// кодпоинт -> орфографии, использующие его в основных символах или пунктуации
    reverse: OnceCell<HashMap<u32, Vec<usize>>>,
    cmap: Option<Cmap>,
    ignored_unicodes: BTreeSet<u32>,
    language_names: HashMap<String, String>,
    script_names: HashMap<String, String>,
    territory_names: HashMap<String, String>,
}

impl OrthographyIndex
{
    /// загрузка каталога, указанного в настройках
    pub fn load(config: &Config) -> Result<Self>
    {
        let start = Instant::now();

        let catalog = Catalog::load(&config.data_dir, &config.catalog)?;
        let index = Self::from_catalog(catalog, config.ignored_unicodes.iter().copied().collect());

        log::info!(
            "loaded {} orthographies from {} in {:?}",
            index.len(),
            config.catalog,
            start.elapsed()
        );

        Ok(index)
    }

    /// построение индекса: сначала все орфографии, затем заполнение пустых наборов из основных территорий
    pub fn from_catalog(catalog: Catalog, ignored_unicodes: BTreeSet<u32>) -> Self
    {
        let mut index = Self {
            ignored_unicodes,
            language_names: catalog.languages,
            script_names: catalog.scripts,
            territory_names: catalog.territories,
            ..Self::default()
        };

        for (code, scripts) in catalog.characters.iter() {
            for (script, territories) in scripts.iter() {
                for (territory, entry) in territories.iter() {
                    let key = OrthographyKey::new(code, script, territory);

                    let name = match &entry.name {
                        Some(name) => name.clone(),
                        None => {
                            log::warn!("orthography {} has no name", key.id());
                            key.id()
                        }
                    };

                    let mut orthography = Orthography::new(
                        key,
                        &name,
                        &entry.unicodes.base.codepoints(),
                        &entry.unicodes.optional.codepoints(),
                        &entry.unicodes.punctuation.codepoints(),
                        &index.ignored_unicodes,
                    );

                    orthography.set_speakers(catalog.speakers.get(code).copied().unwrap_or(0));

                    index.push(orthography);
                }
            }
        }

        index.fill_from_defaults();
        index
    }

    fn push(&mut self, orthography: Orthography)
    {
        self.index.insert(orthography.key().clone(), self.orthographies.len());
        self.orthographies.push(orthography);
    }

    /// заполнение пустых наборов орфографий из орфографий основных территорий
    fn fill_from_defaults(&mut self)
    {
        for i in 0 .. self.orthographies.len() {
            let key = self.orthographies[i].key().clone();

            if key.is_default_territory() {
                continue;
            }

            let parent = match self.index.get(&key.default_territory()) {
                Some(&parent) => self.orthographies[parent].clone(),
                None => {
                    log::warn!(
                        "no parent orthography found for {}/{}/{}",
                        key.code,
                        key.script,
                        key.territory
                    );
                    continue;
                }
            };

            self.orthographies[i].fill_from_default(&parent);
        }
    }

    /// добавление орфографии; обратный индекс будет построен заново при следующем запросе
    pub fn add_orthography(&mut self, mut orthography: Orthography)
    {
        if let Some(cmap) = &self.cmap {
            orthography.scan(&cmap.keys().copied().collect());
        }

        match self.index.get(orthography.key()) {
            Some(&i) => {
                log::warn!("orthography {} replaced", orthography.id());
                self.orthographies[i] = orthography;
            }
            None => self.push(orthography),
        }

        self.reverse = OnceCell::new();
    }

    /// установка набора символов шрифта; если набор кодпоинтов не изменился, повторное сравнение не выполняется
    pub fn set_cmap(&mut self, cmap: Cmap)
    {
        let unchanged = match &self.cmap {
            Some(current) => current.keys().eq(cmap.keys()),
            None => false,
        };

        self.cmap = Some(cmap);

        match unchanged {
            true => log::debug!("cmap codepoints unchanged, skipping scan"),
            false => self.scan_all(),
        }
    }

    /// сброс набора символов шрифта
    pub fn clear_cmap(&mut self)
    {
        self.cmap = None;

        for orthography in self.orthographies.iter_mut() {
            orthography.forget_cmap();
        }
    }

    /// сравнение всех орфографий с текущим набором символов
    pub fn scan_all(&mut self)
    {
        let codepoints: BTreeSet<u32> = match &self.cmap {
            Some(cmap) => cmap.keys().copied().collect(),
            None => return,
        };

        let start = Instant::now();

        for orthography in self.orthographies.iter_mut() {
            orthography.scan(&codepoints);
        }

        log::debug!(
            "scanned {} orthographies against {} codepoints in {:?}",
            self.orthographies.len(),
            codepoints.len(),
            start.elapsed()
        );
    }

    /// текущий набор символов шрифта (пустой, если не установлен)
    pub fn cmap(&self) -> &Cmap
    {
        static EMPTY: Cmap = BTreeMap::new();

        self.cmap.as_ref().unwrap_or(&EMPTY)
    }

    #[inline]
    pub fn ignored_unicodes(&self) -> &BTreeSet<u32>
    {
        &self.ignored_unicodes
    }

    /// орфография по языку, письменности и территории
    pub fn orthography(&self, code: &str, script: &str, territory: &str) -> Option<&Orthography>
    {
        self.index
            .get(&OrthographyKey::new(code, script, territory))
            .map(|&i| &self.orthographies[i])
    }

    /// орфография по идентификатору вида код[_письменность][_территория]
    pub fn orthography_by_id(&self, id: &str) -> Option<&Orthography>
    {
        self.orthographies.iter().find(|o| o.id() == id)
    }

    /// построение обратного индекса заново
    pub fn build_reverse_index(&mut self)
    {
        self.reverse = OnceCell::from(reverse_index(&self.orthographies));
    }

    fn reverse(&self) -> &HashMap<u32, Vec<usize>>
    {
        self.reverse.get_or_init(|| reverse_index(&self.orthographies))
    }

    /// орфографии, использующие кодпоинт
    pub fn orthographies_using(&self, code: u32, level: UsageLevel) -> Vec<&Orthography>
    {
        match level {
            UsageLevel::Base => match self.reverse().get(&code) {
                Some(positions) => positions.iter().map(|&i| &self.orthographies[i]).collect(),
                None => vec![],
            },
            UsageLevel::Any => self.orthographies.iter().filter(|o| o.uses_unicode_any(code)).collect(),
        }
    }

    /// поддерживаемые орфографии: полностью или основные символы с пунктуацией
    pub fn supported(&self, full_only: bool) -> Vec<&Orthography>
    {
        match full_only {
            true => self.filtered(Orthography::support_full),
            false => self.filtered(Orthography::support_basic),
        }
    }

    /// орфографии, для которых есть только основные символы
    pub fn supported_minimum(&self) -> Vec<&Orthography>
    {
        self.filtered(Orthography::support_minimal)
    }

    /// орфографии, для которых есть как минимум основные символы
    pub fn supported_minimum_inclusive(&self) -> Vec<&Orthography>
    {
        self.filtered(Orthography::support_minimal_inclusive)
    }

    /// орфографии, которым не хватает не более max_missing основных символов
    pub fn almost_supported(&self, max_missing: usize) -> Vec<&Orthography>
    {
        self.filtered(|o| o.almost_supported_basic(max_missing))
    }

    /// орфографии, которым не хватает только пунктуации (не более max_missing знаков)
    pub fn almost_supported_punctuation(&self, max_missing: usize) -> Vec<&Orthography>
    {
        self.filtered(|o| o.almost_supported_punctuation(max_missing))
    }

    fn filtered<F>(&self, predicate: F) -> Vec<&Orthography>
    where
        F: Fn(&Orthography) -> bool,
    {
        self.orthographies.iter().filter(|o| predicate(o)).collect()
    }

    /// сумма носителей по орфографиям, которые поддерживаются (основные символы и пунктуация)
    /// и используют кодпоинт среди основных символов
    pub fn speakers_supported_by(&self, code: u32) -> u64
    {
        self.orthographies_using(code, UsageLevel::Base)
            .into_iter()
            .filter(|o| o.support_basic())
            .map(|o| o.speakers())
            .sum()
    }

    /// название языка; для неизвестного кода - сам код
    pub fn language_name<'a>(&'a self, code: &'a str) -> &'a str
    {
        display_name(&self.language_names, code, "language")
    }

    /// название письменности; DFLT - "Default"
    pub fn script_name<'a>(&'a self, code: &'a str) -> &'a str
    {
        match code == DEFAULT_SCRIPT {
            true => "Default",
            false => display_name(&self.script_names, code, "script"),
        }
    }

    /// название территории; dflt - "Default"
    pub fn territory_name<'a>(&'a self, code: &'a str) -> &'a str
    {
        match code == DEFAULT_TERRITORY {
            true => "Default",
            false => display_name(&self.territory_names, code, "territory"),
        }
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.orthographies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.orthographies.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Orthography>
    {
        self.orthographies.iter()
    }

    #[inline]
    pub fn orthographies(&self) -> &[Orthography]
    {
        &self.orthographies
    }
}

/// кодпоинт -> позиции орфографий, использующих его в основных символах или пунктуации
fn reverse_index(orthographies: &[Orthography]) -> HashMap<u32, Vec<usize>>
{
    let mut reverse: HashMap<u32, Vec<usize>> = HashMap::new();

    for (i, orthography) in orthographies.iter().enumerate() {
        for &code in orthography.unicodes_base_punctuation() {
            reverse.entry(code).or_default().push(i);
        }
    }

    reverse
}

fn display_name<'a>(names: &'a HashMap<String, String>, code: &'a str, kind: &str) -> &'a str
{
    match names.get(code) {
        Some(name) => name.as_str(),
        None => {
            log::warn!("no display name for {} code {}", kind, code);
            code
        }
    }
}

impl core::fmt::Display for OrthographyIndex
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "<OrthographyIndex with {} orthographies>", self.len())
    }
}
