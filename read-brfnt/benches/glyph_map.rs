use criterion::{black_box, criterion_group, criterion_main, Criterion};
use read_brfnt::RfntRef;

use brfnt_test_data::rfnt::RfntBuilder;

// a long chain of short records, as in fonts with many scattered ranges
fn many_records() -> Vec<u8> {
    let mut builder = RfntBuilder::new(32, 32);
    for i in 0..512u16 {
        builder = builder.direct(i * 16, i * 16 + 7, i * 8);
    }
    builder.build().to_vec()
}

fn one_scan_record() -> Vec<u8> {
    let pairs = (0..4096u16).rev().map(|i| (0x4E00 + i, i)).collect::<Vec<_>>();
    RfntBuilder::new(32, 32).scan(&pairs).build().to_vec()
}

pub fn decode_glyph_map(c: &mut Criterion) {
    let chained = many_records();
    let scanned = one_scan_record();

    c.bench_function("glyph_map direct chain", |b| {
        b.iter(|| {
            let font = RfntRef::new(black_box(&chained)).unwrap();
            font.glyph_map().unwrap()
        })
    });
    c.bench_function("glyph_map scan", |b| {
        b.iter(|| {
            let font = RfntRef::new(black_box(&scanned)).unwrap();
            font.glyph_map().unwrap()
        })
    });
}

criterion_group!(benches, decode_glyph_map);
criterion_main!(benches);
