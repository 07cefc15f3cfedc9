//! Benchmarks comparing Ratio<T> performance across backing integer widths
//!
//! Run with: cargo bench --bench ratio_benchmarks_full
//!
//! This benchmark suite tests Ratio<T> for several backing integers:
//! - i32: compact values, cross products fit in i64
//! - i64: the default `Rational`
//! - i128: widest backing, comparisons need 256-bit cross products
//!
//! Each width is benchmarked against num-rational over the same primitive
//! (`num_rational::Ratio<T>`) and over `BigInt`, the arbitrary-precision
//! baseline.
//!
//! Key Performance Metrics:
//! - Construction (new, from_float)
//! - Arithmetic operations (add, mul, div)
//! - Comparison operations
//! - GCD computation
//! - Real-world workloads (Taylor series, harmonic sums, approximation)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigInt;
use num_rational::Ratio as NumRatio;

type NumRational = NumRatio<BigInt>;

/// Macro to generate complete benchmark suite for a given integer type
macro_rules! generate_ratio_benchmarks {
    ($mod_name:ident, $int_type:ty, $size_name:expr) => {
        mod $mod_name {
            use super::*;

            type TestInt = $int_type;
            type TestRatio = fixed_ratio::Ratio<$int_type>;
            type NumFixed = NumRatio<$int_type>;

            // ====================================================================
            // BASIC OPERATIONS
            // ====================================================================

            /// Benchmark normalizing construction from a pair
            pub fn bench_construction(c: &mut Criterion) {
                let bench_name = format!("{}/construction", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                let test_cases: Vec<(&str, TestInt, TestInt)> = vec![
                    ("reduced", 12345, 67891),
                    ("reducible", 123456, 789012),
                    ("negative_denom", 6, -8),
                ];

                for (name, n, d) in test_cases {
                    group.bench_with_input(BenchmarkId::new("Ratio", name), &(n, d), |b, &(n, d)| {
                        b.iter(|| {
                            let r = TestRatio::new(black_box(n), black_box(d));
                            black_box(r);
                        })
                    });

                    group.bench_with_input(
                        BenchmarkId::new("num-rational", name),
                        &(n, d),
                        |b, &(n, d)| {
                            b.iter(|| {
                                let r = NumFixed::new(black_box(n), black_box(d));
                                black_box(r);
                            })
                        },
                    );

                    group.bench_with_input(
                        BenchmarkId::new("num-rational-bigint", name),
                        &(n, d),
                        |b, &(n, d)| {
                            b.iter(|| {
                                let r = NumRational::new(
                                    black_box(BigInt::from(n)),
                                    black_box(BigInt::from(d)),
                                );
                                black_box(r);
                            })
                        },
                    );
                }

                group.finish();
            }

            /// Benchmark exact conversion from floating point
            pub fn bench_from_float(c: &mut Criterion) {
                let bench_name = format!("{}/from_float", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                let test_cases = vec![("small", 0.5), ("medium", 0.375), ("negative", -2.75)];

                for (name, value) in test_cases {
                    group.bench_with_input(BenchmarkId::new("Ratio", name), &value, |b, &val| {
                        b.iter(|| {
                            let r = TestRatio::from_float(black_box(val));
                            black_box(r)
                        })
                    });

                    group.bench_with_input(
                        BenchmarkId::new("num-rational-bigint", name),
                        &value,
                        |b, &val| {
                            b.iter(|| {
                                let r = NumRational::from_float(black_box(val));
                                black_box(r)
                            })
                        },
                    );
                }

                group.finish();
            }

            /// Benchmark addition: same denominator, coprime denominators, shared factors
            pub fn bench_addition(c: &mut Criterion) {
                let bench_name = format!("{}/addition", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                let test_cases: Vec<(&str, (TestInt, TestInt), (TestInt, TestInt))> = vec![
                    ("same_denom", (1, 6), (2, 6)),
                    ("coprime_denom", (1, 2), (1, 3)),
                    ("shared_factor", (5, 12), (7, 18)),
                    ("large", (9999, 10000), (9998, 10001)),
                ];

                for (name, (n1, d1), (n2, d2)) in test_cases {
                    let r1 = TestRatio::new(n1, d1);
                    let r2 = TestRatio::new(n2, d2);

                    group.bench_with_input(
                        BenchmarkId::new("Ratio", name),
                        &(r1, r2),
                        |b, (r1, r2)| {
                            b.iter(|| {
                                let result = r1.try_add(black_box(r2));
                                black_box(result)
                            })
                        },
                    );

                    let r1_fixed = NumFixed::new(n1, d1);
                    let r2_fixed = NumFixed::new(n2, d2);

                    group.bench_with_input(
                        BenchmarkId::new("num-rational", name),
                        &(r1_fixed, r2_fixed),
                        |b, (r1, r2)| {
                            b.iter(|| {
                                let result = r1 + black_box(r2);
                                black_box(result)
                            })
                        },
                    );

                    let r1_num = NumRational::new(BigInt::from(n1), BigInt::from(d1));
                    let r2_num = NumRational::new(BigInt::from(n2), BigInt::from(d2));

                    group.bench_with_input(
                        BenchmarkId::new("num-rational-bigint", name),
                        &(r1_num, r2_num),
                        |b, (r1, r2)| {
                            b.iter(|| {
                                let result = r1 + black_box(r2);
                                black_box(result)
                            })
                        },
                    );
                }

                group.finish();
            }

            /// Benchmark multiplication and division with cross-cancellation
            pub fn bench_multiplication(c: &mut Criterion) {
                let bench_name = format!("{}/multiplication", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                let test_cases: Vec<(&str, (TestInt, TestInt), (TestInt, TestInt))> = vec![
                    ("small", (2, 3), (3, 4)),
                    ("medium", (1234, 6789), (9876, 4321)),
                    ("cancelling", (9999, 10000), (10000, 9999)),
                ];

                for (name, (n1, d1), (n2, d2)) in test_cases {
                    let r1 = TestRatio::new(n1, d1);
                    let r2 = TestRatio::new(n2, d2);

                    group.bench_with_input(
                        BenchmarkId::new("Ratio_mul", name),
                        &(r1, r2),
                        |b, (r1, r2)| {
                            b.iter(|| {
                                let result = r1.try_mul(black_box(r2));
                                black_box(result)
                            })
                        },
                    );

                    group.bench_with_input(
                        BenchmarkId::new("Ratio_div", name),
                        &(r1, r2),
                        |b, (r1, r2)| {
                            b.iter(|| {
                                let result = r1.try_div(black_box(r2));
                                black_box(result)
                            })
                        },
                    );

                    let r1_num = NumRational::new(BigInt::from(n1), BigInt::from(d1));
                    let r2_num = NumRational::new(BigInt::from(n2), BigInt::from(d2));

                    group.bench_with_input(
                        BenchmarkId::new("num-rational-bigint_mul", name),
                        &(r1_num, r2_num),
                        |b, (r1, r2)| {
                            b.iter(|| {
                                let result = r1 * black_box(r2);
                                black_box(result)
                            })
                        },
                    );
                }

                group.finish();
            }

            /// Benchmark comparison: fast paths and full-width cross products
            pub fn bench_comparison(c: &mut Criterion) {
                let bench_name = format!("{}/comparison", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                let max = TestInt::MAX;
                let test_cases: Vec<(&str, (TestInt, TestInt), (TestInt, TestInt))> = vec![
                    ("opposite_signs", (-1, 2), (1, 3)),
                    ("same_denom", (1, 7), (3, 7)),
                    ("similar", (1, 2), (1, 3)),
                    ("near_max", (max - 2, max - 1), (max - 1, max)),
                ];

                for (name, (n1, d1), (n2, d2)) in test_cases {
                    let r1 = TestRatio::new(n1, d1);
                    let r2 = TestRatio::new(n2, d2);

                    group.bench_with_input(
                        BenchmarkId::new("Ratio", name),
                        &(r1, r2),
                        |b, (r1, r2)| {
                            b.iter(|| {
                                let result = r1 > black_box(r2);
                                black_box(result)
                            })
                        },
                    );

                    let r1_num = NumRational::new(BigInt::from(n1), BigInt::from(d1));
                    let r2_num = NumRational::new(BigInt::from(n2), BigInt::from(d2));

                    group.bench_with_input(
                        BenchmarkId::new("num-rational-bigint", name),
                        &(r1_num, r2_num),
                        |b, (r1, r2)| {
                            b.iter(|| {
                                let result = r1 > black_box(r2);
                                black_box(result)
                            })
                        },
                    );
                }

                group.finish();
            }

            /// Benchmark GCD computation (critical for reduction)
            pub fn bench_gcd(c: &mut Criterion) {
                let bench_name = format!("{}/gcd", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                let test_cases: Vec<(&str, TestInt, TestInt)> = vec![
                    ("small", 48, 18),
                    ("medium", 123456, 789012),
                    ("large", TestInt::MAX / 7, TestInt::MAX / 11),
                    ("coprime", TestInt::MAX, TestInt::MAX - 1),
                ];

                for (name, a, b) in test_cases {
                    group.bench_with_input(
                        BenchmarkId::new("Ratio", name),
                        &(a, b),
                        |bench, &(a, b)| {
                            bench.iter(|| {
                                let result = fixed_ratio::gcd(black_box(a), black_box(b));
                                black_box(result)
                            })
                        },
                    );

                    group.bench_with_input(
                        BenchmarkId::new("num-integer", name),
                        &(a, b),
                        |bench, &(a, b)| {
                            bench.iter(|| {
                                use num_integer::Integer;
                                let result = black_box(a).gcd(&black_box(b));
                                black_box(result)
                            })
                        },
                    );

                    group.bench_with_input(
                        BenchmarkId::new("num-bigint", name),
                        &(a, b),
                        |bench, &(a, b)| {
                            bench.iter(|| {
                                use num_integer::Integer;
                                let result = BigInt::from(black_box(a)).gcd(&BigInt::from(black_box(b)));
                                black_box(result)
                            })
                        },
                    );
                }

                group.finish();
            }

            // ====================================================================
            // REAL-WORLD WORKLOADS
            // ====================================================================

            /// Benchmark Taylor series computation (e^x approximation)
            /// Pattern: e^x = 1 + x + x²/2! + x³/3! + ...
            pub fn bench_taylor_series(c: &mut Criterion) {
                let bench_name = format!("{}/taylor_series", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                // Terms until the denominator 10^k * k! outgrows the backing type
                let iterations = match TestInt::BITS {
                    0..=32 => 3,
                    33..=64 => 6,
                    _ => 10,
                };

                group.bench_function("Ratio", |b| {
                    let x = TestRatio::new(1, 10);
                    b.iter(|| {
                        let mut phi = TestRatio::one();
                        let mut term = x;
                        let mut k: TestInt = 1;
                        for _ in 0..iterations {
                            phi += term;
                            k += 1;
                            term = term * x / k;
                        }
                        black_box(phi)
                    })
                });

                group.bench_function("num-rational-bigint", |b| {
                    let x = NumRational::new(BigInt::from(1), BigInt::from(10));
                    b.iter(|| {
                        let mut phi = NumRational::new(BigInt::from(1), BigInt::from(1));
                        let mut term = x.clone();
                        let mut k = BigInt::from(1);
                        for _ in 0..iterations {
                            phi = phi + &term;
                            k = k + 1;
                            term = &term * &x / &k;
                        }
                        black_box(phi)
                    })
                });

                group.finish();
            }

            /// Benchmark harmonic sums, which grow denominators quickly
            pub fn bench_harmonic_sum(c: &mut Criterion) {
                let bench_name = format!("{}/harmonic_sum", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                let terms: TestInt = match TestInt::BITS {
                    0..=32 => 10,
                    33..=64 => 20,
                    _ => 40,
                };

                group.bench_function("Ratio", |b| {
                    b.iter(|| {
                        let sum: TestRatio = (1..=terms).map(|k| TestRatio::new(1, k)).sum();
                        black_box(sum)
                    })
                });

                group.bench_function("num-rational-bigint", |b| {
                    b.iter(|| {
                        let mut sum = NumRational::new(BigInt::from(0), BigInt::from(1));
                        for k in 1..=terms {
                            sum = sum + NumRational::new(BigInt::from(1), BigInt::from(k));
                        }
                        black_box(sum)
                    })
                });

                group.finish();
            }

            /// Benchmark best rational approximation and rounding
            pub fn bench_approximation(c: &mut Criterion) {
                let bench_name = format!("{}/approximation", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                let max = TestInt::MAX;
                let r = TestRatio::new(max - 2, max / 3);

                group.bench_function("limit_denominator_1000", |b| {
                    b.iter(|| black_box(r).limit_denominator(black_box(1000)))
                });

                group.bench_function("round", |b| b.iter(|| black_box(r).round()));

                group.bench_function("round_digits_2", |b| {
                    b.iter(|| black_box(r).round_digits(black_box(2)))
                });

                group.finish();
            }

            /// Benchmark repeated operations (stress test for reduction cost)
            pub fn bench_repeated_operations(c: &mut Criterion) {
                let bench_name = format!("{}/repeated_operations", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                group.bench_function("Ratio_100_adds", |b| {
                    b.iter(|| {
                        let mut acc = TestRatio::one();
                        let increment = TestRatio::new(1, 1000);
                        for _ in 0..100 {
                            acc += increment;
                        }
                        black_box(acc)
                    })
                });

                group.bench_function("num-rational_100_adds", |b| {
                    b.iter(|| {
                        let mut acc = NumFixed::new(1, 1);
                        let increment = NumFixed::new(1, 1000);
                        for _ in 0..100 {
                            acc = acc + increment;
                        }
                        black_box(acc)
                    })
                });

                group.bench_function("num-rational-bigint_100_adds", |b| {
                    b.iter(|| {
                        let mut acc = NumRational::new(BigInt::from(1), BigInt::from(1));
                        let increment = NumRational::new(BigInt::from(1), BigInt::from(1000));
                        for _ in 0..100 {
                            acc = acc + &increment;
                        }
                        black_box(acc)
                    })
                });

                group.finish();
            }

            /// Export all benchmark functions for this size
            pub fn register_all(c: &mut Criterion) {
                bench_construction(c);
                bench_from_float(c);
                bench_addition(c);
                bench_multiplication(c);
                bench_comparison(c);
                bench_gcd(c);
                bench_taylor_series(c);
                bench_harmonic_sum(c);
                bench_approximation(c);
                bench_repeated_operations(c);
            }
        }
    };
}

// ============================================================================
// INSTANTIATE BENCHMARK SUITES FOR EACH INTEGER SIZE
// ============================================================================

generate_ratio_benchmarks!(i32_benches, i32, "i32");
generate_ratio_benchmarks!(i64_benches, i64, "i64");
generate_ratio_benchmarks!(i128_benches, i128, "i128");

// ============================================================================
// BENCHMARK GROUPS
// ============================================================================

criterion_group!(i32_benchmarks, i32_benches::register_all);

criterion_group!(i64_benchmarks, i64_benches::register_all);

criterion_group!(i128_benchmarks, i128_benches::register_all);

// Run all sizes
criterion_main!(i32_benchmarks, i64_benchmarks, i128_benchmarks);
