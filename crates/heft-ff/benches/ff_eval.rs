use criterion::{black_box, criterion_group, criterion_main, Criterion};

use heft_core::{Options, Parameters};
use heft_ff::{FormFactorFactory, NonlocalFormFactors, PToVFormFactors};

fn bench_ff_eval(c: &mut Criterion) {
    let parameters = Parameters::defaults();
    let options = Options::new();

    let bsz = FormFactorFactory::p_to_v("B->K^*::BSZ2015", &parameters, &options).unwrap();
    c.bench_function("bsz2015_v", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for idx in 0..64 {
                acc += bsz.v(black_box(0.1 + 0.25 * idx as f64));
            }
            acc
        })
    });

    let hqet = FormFactorFactory::p_to_v("B->D^*::HQET", &parameters, &options).unwrap();
    c.bench_function("hqet_a1", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for idx in 0..64 {
                acc += hqet.a_1(black_box(0.1 + 0.15 * idx as f64));
            }
            acc
        })
    });

    let nonlocal =
        FormFactorFactory::nonlocal("B->K^*ccbar::GvDV2020", &parameters, &options).unwrap();
    c.bench_function("gvdv2020_h_perp", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for idx in 0..64 {
                acc += nonlocal.h_perp(black_box(0.1 + 0.1 * idx as f64)).norm();
            }
            acc
        })
    });
}

criterion_group!(benches, bench_ff_eval);
criterion_main!(benches);
