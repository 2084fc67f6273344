use unicode_info::{glyph_name_for_codepoint, Cmap, Config, OrthographyIndex};

pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

#[macro_export]
macro_rules! group {
    ($fn: ident, $test: ident, $group: expr, $name: expr, $run: expr) => {
        #[inline(never)]
        fn $test(index: &mut OrthographyIndex, cmap: &Cmap) -> usize
        {
            $run(index, cmap)
        }

        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);
            let mut index = group::index();

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            for (font_name, cmap) in group::fonts() {
                group.bench_with_input(criterion::BenchmarkId::new($name, font_name), &cmap, |b, cmap| {
                    b.iter(|| $test(&mut index, criterion::black_box(cmap)))
                });
            }

            group.finish();
        }
    };
}

/// каталог, поставляемый вместе с репозиторием
pub fn index() -> OrthographyIndex
{
    OrthographyIndex::load(&Config::default()).unwrap()
}

/// наборы символов типичных шрифтов
pub fn fonts() -> Vec<(&'static str, Cmap)>
{
    let ascii = 0x20 ..= 0x7E;
    let latin1 = ascii.clone().chain(0xA0 ..= 0xFF);
    let european = latin1.clone().chain(0x100 ..= 0x17F).chain(0x370 ..= 0x3FF).chain(0x400 ..= 0x45F);
    let extended = european.clone().chain(0x180 ..= 0x24F).chain(0x460 ..= 0x52F).chain(0x1E00 ..= 0x1FFF);

    vec![
        ("ascii", cmap(ascii)),
        ("latin1", cmap(latin1)),
        ("european", cmap(european)),
        ("extended", cmap(extended)),
    ]
}

/// набор символов из кодпоинтов
fn cmap<I: Iterator<Item = u32>>(codepoints: I) -> Cmap
{
    codepoints.map(|code| (code, glyph_name_for_codepoint(code))).collect()
}
