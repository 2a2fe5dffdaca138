use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use csvdoc::{Document, Options, SeparatorParams};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

fn gen_csv(rows: usize, quoted: bool) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    let mut s = String::from("id,name,score,active\n");
    for i in 0..rows {
        let name = (0..8)
            .map(|_| (b'a' + rng.random_range(0..26u8)) as char)
            .collect::<String>();
        let score: f64 = rng.random_range(0.0..1000.0);
        if quoted {
            s.push_str(&format!("{i},\"{name}, jr\",{score},{}\n", rng.random_bool(0.5)));
        } else {
            s.push_str(&format!("{i},{name},{score},{}\n", rng.random_bool(0.5)));
        }
    }
    s
}

pub fn load_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    for &n in &[100, 1_000, 10_000] {
        for quoted in [false, true] {
            let csv = gen_csv(n, quoted);
            let kind = if quoted { "quoted" } else { "plain" };
            group.throughput(Throughput::Bytes(csv.len() as u64));
            group.bench_function(format!("from_reader::{kind}::{n}"), |b| {
                b.iter_batched(
                    || csv.clone(),
                    |s| {
                        let doc = Document::from_reader(s.as_bytes(), Options::default()).unwrap();
                        black_box(doc)
                    },
                    BatchSize::SmallInput,
                )
            });
        }

        let csv = gen_csv(n, false);
        let options = Options::default().with_separator(SeparatorParams {
            trim: true,
            ..SeparatorParams::default()
        });
        group.bench_function(format!("from_reader::trimmed::{n}"), |b| {
            b.iter(|| {
                let doc = Document::from_reader(csv.as_bytes(), options).unwrap();
                black_box(doc)
            })
        });

        let doc = Document::from_reader(csv.as_bytes(), Options::default()).unwrap();
        group.bench_function(format!("get_column_f64::{n}"), |b| {
            b.iter(|| black_box(doc.get_column::<f64>("score").unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, load_benchmarks);
criterion_main!(benches);
