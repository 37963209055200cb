// benches/tag_balance.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use sitecheck::{
    check,
    config::options::CheckOptions,
    core::tokenize,
};

fn load_sample() -> String {
    // Best-effort: use a real page if one is lying around; otherwise synthesize one.
    std::fs::read_to_string(".ignore/page_samples/index.html").unwrap_or_else(|_| synthetic(2_000))
}

fn synthetic(sections: usize) -> String {
    let mut s = String::from("<!DOCTYPE html><html><head><meta charset=utf-8><title>t</title></head><body>");
    s.push_str("<nav><ul><li><a href=\"/\">Home</a></li></ul></nav>");
    for i in 0..sections {
        s.push_str(&format!(
            "<section id=\"s{i}\"><h2>Part {i}</h2><p>Text <em>here</em><br><img src=\"i{i}.png\" alt=\"\"></p></section>"
        ));
    }
    s.push_str("<footer>c</footer></body></html>");
    s
}

fn bench_tag_balance(c: &mut Criterion) {
    let doc = load_sample();
    let opts = CheckOptions::default();

    c.bench_function("tokenize", |b| {
        b.iter(|| black_box(tokenize(black_box(&doc)).count()))
    });

    c.bench_function("validate", |b| {
        b.iter(|| {
            let issues = check::validate(black_box(&doc), &opts);
            black_box(issues.len())
        })
    });
}

criterion_group!(benches, bench_tag_balance);
criterion_main!(benches);
