use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kl_calendar::day_count::{MAX_ORDINAL, MIN_ORDINAL};
use kl_calendar::{gapja_name, lunar_to_solar, solar_to_lunar, GlyphSet, LunarDate, SolarDate};

fn sample_dates() -> Vec<SolarDate> {
    (MIN_ORDINAL..=MAX_ORDINAL)
        .step_by(997)
        .map(|o| SolarDate::from_ordinal(o).unwrap())
        .collect()
}

fn conversion_benches(c: &mut Criterion) {
    let solar: Vec<SolarDate> = sample_dates();
    let lunar: Vec<LunarDate> = solar.iter().map(|s| solar_to_lunar(s).unwrap()).collect();

    let mut group = c.benchmark_group("conversion");
    group.bench_function("solar_to_lunar", |b| {
        b.iter(|| {
            for s in &solar {
                let _ = black_box(solar_to_lunar(black_box(s)));
            }
        })
    });
    group.bench_function("lunar_to_solar", |b| {
        b.iter(|| {
            for l in &lunar {
                let _ = black_box(lunar_to_solar(black_box(l)));
            }
        })
    });
    group.bench_function("gapja_name", |b| {
        b.iter(|| {
            for l in &lunar {
                let _ = black_box(gapja_name(black_box(l), GlyphSet::Korean));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, conversion_benches);
criterion_main!(benches);
