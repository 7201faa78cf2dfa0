// benches/pipeline.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use titlemap::pipeline::classify::Band;
use titlemap::specs::federations;

fn ranking_doc(rows: usize) -> String {
    let filler = "<table><tr><td>nav</td></tr></table>".repeat(4);
    let mut body = String::new();
    for i in 0..rows {
        body.push_str(&format!(
            "<tr><td>{}</td><td>Federation {}</td><td>2400</td>\
             <td>{}</td><td>{}</td><td>{}</td></tr>",
            i + 1,
            i,
            i % 50,
            i % 120,
            i * 7 % 2000
        ));
    }
    format!(
        "<html>{filler}<table>\
         <tr><td colspan=6>Federations Ranking</td></tr>\
         <tr><td>Rank</td><td>Federation</td><td>Average</td>\
             <td>GMs</td><td>IMs</td><td>Total Titled</td></tr>\
         {body}</table></html>"
    )
}

fn bench_parse(c: &mut Criterion) {
    let doc = ranking_doc(200);

    c.bench_function("federations_parse_200", |b| {
        b.iter(|| {
            let recs = federations::parse_document(black_box(&doc)).unwrap();
            black_box(recs.len())
        })
    });
}

fn bench_classify(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000).map(|i| i as f64 * 0.01).collect();

    c.bench_function("classify_10k", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for v in &values {
                if Band::classify(black_box(*v)).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

criterion_group!(benches, bench_parse, bench_classify);
criterion_main!(benches);
