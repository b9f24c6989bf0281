#![feature(test)]

extern crate lapbridge;
extern crate rand;
extern crate rand_distr;
extern crate rand_xorshift;
extern crate test;

use lapbridge::band::{BandShape, Uplo};
use lapbridge::{band_col, band_tri};
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::env;

const RNG_SEED: [u8; 16] = [
    0x54, 0x67, 0x3a, 0x19, 0x69, 0xd4, 0xa7, 0xa8, 0x05, 0x0e, 0x83, 0x97, 0xbb, 0xa7, 0x3b, 0x11,
];

fn shape(uplo: Uplo) -> BandShape {
    let n = env::var("LB_N").map(|s| s.parse().unwrap()).unwrap_or(1000);
    let kd = env::var("LB_KD").map(|s| s.parse().unwrap()).unwrap_or(16);
    BandShape::new(uplo, n, kd)
}

fn client(shape: BandShape) -> Vec<f64> {
    let mut rng = rand_xorshift::XorShiftRng::from_seed(RNG_SEED);
    (0 .. shape.client_len(shape.width()))
        .map(|_| rng.sample(StandardNormal))
        .collect()
}

fn bench_library_form(bencher: &mut test::Bencher, uplo: Uplo) {
    let shape = shape(uplo);
    let a = client(shape);
    let ld = shape.library_stride();
    let mut b = vec![0.0; shape.library_len(ld)];
    bencher.iter(|| {
        band_tri::to_library_form(uplo, shape.n, shape.kd, &a, shape.width(),
                                  &mut b, ld);
        test::black_box(&mut b);
    });
}

fn bench_col_major(bencher: &mut test::Bencher, uplo: Uplo) {
    let shape = shape(uplo);
    let a = client(shape);
    let ld = shape.width();
    let mut b = vec![0.0; shape.col_major_len(ld)];
    bencher.iter(|| {
        band_col::to_col_major(uplo, shape.n, shape.kd, &a, shape.width(),
                               &mut b, ld);
        test::black_box(&mut b);
    });
}

#[bench]
fn bench_library_form_upper(bencher: &mut test::Bencher) {
    bench_library_form(bencher, Uplo::Upper);
}

#[bench]
fn bench_library_form_lower(bencher: &mut test::Bencher) {
    bench_library_form(bencher, Uplo::Lower);
}

#[bench]
fn bench_col_major_upper(bencher: &mut test::Bencher) {
    bench_col_major(bencher, Uplo::Upper);
}

#[bench]
fn bench_col_major_lower(bencher: &mut test::Bencher) {
    bench_col_major(bencher, Uplo::Lower);
}
