// benches/amplitude_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use kmatrix_sim::prelude::*;

fn three_channel_tmatrix() -> TMatrix {
    let kmatrix = KMatrix::new(vec![
        Pole::new(5.3, vec![1.2, 0.5, 1.6]),
        Pole::new(4.2, vec![0.3, 1.0, -0.4]),
    ])
    .unwrap();
    let channels = vec![
        Channel::s_wave(1.1, 1.1),
        Channel::s_wave(2.2, 2.2),
        Channel::s_wave(1.3, 1.3),
    ];
    TMatrix::new(kmatrix, channels).unwrap()
}

fn benchmark_amplitude_evaluation(c: &mut Criterion) {
    let t = three_channel_tmatrix();
    let mut rng = rand::thread_rng();

    c.bench_function("phase_space_rho", |b| {
        let ch = Channel::s_wave(1.1, 1.1);
        b.iter(|| {
            let m = Complex64::new(rng.gen_range(2.3..6.0), 0.0);
            rho(black_box(&ch), m, DEFAULT_PHI).unwrap()
        });
    });

    c.bench_function("kmatrix_evaluate_3x3", |b| {
        b.iter(|| {
            let m = Complex64::new(rng.gen_range(2.3..6.0), 0.0);
            t.kmatrix().evaluate(black_box(m))
        });
    });

    c.bench_function("tmatrix_amplitude_3x3", |b| {
        b.iter(|| {
            let m = Complex64::new(rng.gen_range(4.5..5.2), 0.0);
            t.amplitude(black_box(m), DEFAULT_PHI).unwrap()
        });
    });

    c.bench_function("production_amplitude_3ch", |b| {
        let prod = ProductionAmplitude::new(
            &t,
            vec![Complex64::new(1.0, 0.2), Complex64::new(-0.4, 0.9)],
            vec![
                Complex64::new(0.1, 0.0),
                Complex64::new(0.0, 0.3),
                Complex64::new(0.2, -0.1),
            ],
        )
        .unwrap();
        b.iter(|| {
            let m = Complex64::new(rng.gen_range(4.5..5.2), 0.0);
            prod.amplitude(black_box(m), DEFAULT_PHI).unwrap()
        });
    });
}

criterion_group!(benches, benchmark_amplitude_evaluation);
criterion_main!(benches);
