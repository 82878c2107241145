use std::collections::BTreeSet;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dorkfactory::{generate, Category, DorkOptions, Profile, Session};

fn bench_full_scope(c: &mut Criterion) {
    let targets: Vec<String> = (0..20).map(|i| format!("app{}.example.com", i)).collect();
    let exclusions = vec!["staging".to_string()];
    let categories: BTreeSet<Category> = Category::ALL.iter().copied().collect();
    let options = DorkOptions {
        exclude_subdomains: true,
        strict_queries: true,
        reduce_noise: true,
        ..DorkOptions::default()
    };

    c.bench_function("generate_full_scope_20_targets", |b| {
        b.iter(|| generate(black_box(&targets), black_box(&exclusions), &categories, &options))
    });
}

fn bench_session_urls(c: &mut Criterion) {
    let mut session = Session::new();
    session.targets = vec!["example.com".to_string()];
    session.apply_profile(Profile::FullScope);
    session.encode_urls = true;

    c.bench_function("session_generate_with_urls", |b| {
        b.iter(|| {
            let dorks = session.generate().unwrap();
            dorks.all_dorks()
                .flat_map(|d| session.engine.engines().into_iter().map(move |e| (d, e)))
                .map(|(d, e)| session.url_for(d, e).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_full_scope, bench_session_urls);
criterion_main!(benches);
