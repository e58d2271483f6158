use criterion::{criterion_group, criterion_main, Criterion};
use dense_poly::Polynomial;
use rand::thread_rng;

pub fn criterion_benchmark(c: &mut Criterion) {
    let n = 1 << 8;

    let mut r = thread_rng();
    let a = Polynomial::<f64>::random(n, &mut r);
    let b = Polynomial::<f64>::random(n, &mut r);

    c.bench_function(&format!("poly add {}", n), |bench| bench.iter(|| &a + &b));

    c.bench_function(&format!("poly mul {}", n), |bench| bench.iter(|| &a * &b));

    c.bench_function(&format!("poly antiderivative {}", n), |bench| {
        bench.iter(|| a.antiderivative())
    });

    c.bench_function(&format!("poly eval {}", n), |bench| {
        bench.iter(|| a.eval(0.75))
    });

    c.bench_function(&format!("poly grow {}", n), |bench| {
        bench.iter(|| {
            let mut poly = Polynomial::new();
            for exponent in 0..n {
                poly.assign(1.0, exponent);
            }
            poly
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
