use criterion::{criterion_group, criterion_main, Criterion};
use unicode_info::reports::kill_list;
use unicode_info::{Cmap, OrthographyIndex, UsageLevel};

mod group;

group!(reverse, test_reverse, "lookup", "reverse_index", |index: &mut OrthographyIndex, cmap: &Cmap| {
    index.build_reverse_index();

    cmap.keys()
        .map(|&code| index.orthographies_using(code, UsageLevel::Base).len())
        .sum::<usize>()
});

group!(any, test_any, "lookup", "any_level", |index: &mut OrthographyIndex, cmap: &Cmap| {
    cmap.keys()
        .map(|&code| index.orthographies_using(code, UsageLevel::Any).len())
        .sum::<usize>()
});

group!(kill, test_kill, "lookup", "kill_list", |index: &mut OrthographyIndex, cmap: &Cmap| {
    index.set_cmap(cmap.clone());
    kill_list(index).len()
});

criterion_group!(benches, reverse, any, kill);
criterion_main!(benches);
