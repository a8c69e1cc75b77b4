// Test intent: verifies transform properties (round-trip, linearity, DC,
// zero input, impulse, pinned values, length stability, boundary sizes).
use fixlen_rfft::{FftError, FixLenRfft, Float};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Round-trip tolerance: `64 · L · max|x| · eps`, the usual growth of an
/// FFT's rounding error with the number of passes, plus the coefficient
/// error the engine reports for itself.
fn roundtrip_tolerance<T: Float>(fft: &FixLenRfft<T>, peak: f64) -> f64 {
    let passes = fft.nbr_bits().max(1) as f64;
    peak * (64.0 * passes * T::epsilon() + 4.0 * passes * fft.max_phase_error())
}

fn random_signal(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect()
}

fn roundtrip<T: Float>(nbr_bits: u32, rng: &mut StdRng) {
    let mut fft = FixLenRfft::<T>::new(nbr_bits).expect("Invariant: operation should succeed");
    let n = fft.get_length();
    let x: Vec<T> = random_signal(rng, n).into_iter().map(T::from_f64).collect();
    let mut f = vec![T::zero(); n];
    let mut y = vec![T::zero(); n];
    fft.do_fft(&mut f, &x).unwrap();
    fft.do_ifft(&mut y, &f).unwrap();
    fft.rescale(&mut y).unwrap();
    let tol = roundtrip_tolerance(&fft, 10.0);
    for (i, (a, b)) in x.iter().zip(y.iter()).enumerate() {
        let err = (a.to_f64() - b.to_f64()).abs();
        assert!(err <= tol, "L={nbr_bits} i={i}: error {err} > {tol}");
    }
}

#[test]
fn roundtrip_f64_up_to_oscillator_passes() {
    let mut rng = StdRng::seed_from_u64(42);
    for nbr_bits in 0..=15 {
        roundtrip::<f64>(nbr_bits, &mut rng);
    }
}

#[test]
fn roundtrip_f32_up_to_oscillator_passes() {
    let mut rng = StdRng::seed_from_u64(7);
    for nbr_bits in 0..=15 {
        roundtrip::<f32>(nbr_bits, &mut rng);
    }
}

#[test]
fn dc_bin_is_the_sum() {
    let mut rng = StdRng::seed_from_u64(1);
    for nbr_bits in 0..=12 {
        let mut fft = FixLenRfft::<f64>::new(nbr_bits).unwrap();
        let n = fft.get_length();
        let x = random_signal(&mut rng, n);
        let mut f = vec![0.0; n];
        fft.do_fft(&mut f, &x).unwrap();
        let sum: f64 = x.iter().sum();
        assert!((f[0] - sum).abs() < 1e-9 * n as f64, "L={nbr_bits}");
    }
}

#[test]
fn zero_input_gives_zero_spectrum() {
    for nbr_bits in 0..=14 {
        let mut fft = FixLenRfft::<f32>::new(nbr_bits).unwrap();
        let n = fft.get_length();
        let mut f = vec![1.0f32; n];
        fft.do_fft(&mut f, &vec![0.0; n]).unwrap();
        assert!(f.iter().all(|&v| v == 0.0), "L={nbr_bits}");
    }
}

#[test]
fn impulse_gives_flat_spectrum() {
    for nbr_bits in 0..=14 {
        let mut fft = FixLenRfft::<f64>::new(nbr_bits).unwrap();
        let n = fft.get_length();
        let mut x = vec![0.0; n];
        x[0] = 1.0;
        let mut f = vec![0.0; n];
        fft.do_fft(&mut f, &x).unwrap();
        for (k, &v) in f.iter().enumerate() {
            let expected = if k <= n / 2 { 1.0 } else { 0.0 };
            assert!((v - expected).abs() < 1e-12, "L={nbr_bits} slot {k}: {v}");
        }
    }
}

#[test]
fn pinned_four_point_spectrum() {
    // X = [10, -2 + 2i, -2]; slot 3 holds -Im X[1].
    let mut fft = FixLenRfft::<f32>::new(2).unwrap();
    let mut f = [0.0f32; 4];
    fft.do_fft(&mut f, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    let expected = [10.0f32, -2.0, -2.0, -2.0];
    for (a, b) in f.iter().zip(expected.iter()) {
        assert!((a - b).abs() < 1e-6);
    }
}

#[test]
fn pinned_sixteen_point_spectrum() {
    let x: [f64; 16] = [
        1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, -8.0, -7.0, -6.0, -5.0, -4.0, -3.0, -2.0, -1.0,
    ];
    // Re X[0..=8] then -Im X[1..8], from an independent complex DFT.
    let expected: [f64; 16] = [
        0.0,
        9.0,
        -8.0,
        9.0,
        -8.0,
        9.0,
        -8.0,
        9.0,
        -8.0,
        45.24605542913263,
        -19.31370849898476,
        13.469451863989402,
        -8.0,
        6.013607741273688,
        -3.313708498984761,
        1.7902113064169214,
    ];
    let mut fft = FixLenRfft::<f64>::new(4).unwrap();
    let mut f = [0.0f64; 16];
    fft.do_fft(&mut f, &x).unwrap();
    for (k, (a, b)) in f.iter().zip(expected.iter()).enumerate() {
        assert!((a - b).abs() < 1e-10, "slot {k}: {a} vs {b}");
    }
}

#[test]
fn length_is_stable_across_calls() {
    let mut fft = FixLenRfft::<f32>::new(6).unwrap();
    assert_eq!(fft.get_length(), 64);
    let x = vec![0.5f32; 64];
    let mut f = vec![0.0f32; 64];
    let mut y = vec![0.0f32; 64];
    for _ in 0..5 {
        fft.do_fft(&mut f, &x).unwrap();
        fft.do_ifft(&mut y, &f).unwrap();
        fft.rescale(&mut y).unwrap();
        assert_eq!(fft.get_length(), 64);
    }
}

#[test]
fn repeated_calls_are_pure() {
    // Oscillator state is reset on every call, so identical input gives
    // bit-identical output.
    let mut rng = StdRng::seed_from_u64(3);
    let mut fft = FixLenRfft::<f32>::new(14).unwrap();
    let n = fft.get_length();
    let x: Vec<f32> = random_signal(&mut rng, n).iter().map(|&v| v as f32).collect();
    let mut first = vec![0.0f32; n];
    let mut second = vec![0.0f32; n];
    fft.do_fft(&mut first, &x).unwrap();
    let mut scratch = vec![0.0f32; n];
    fft.do_ifft(&mut scratch, &first).unwrap();
    fft.do_fft(&mut second, &x).unwrap();
    assert_eq!(first, second);
}

#[test]
fn boundary_sizes_use_no_coefficients() {
    for nbr_bits in 0..=1 {
        let mut fft = FixLenRfft::<f64>::new(nbr_bits).unwrap();
        assert_eq!(fft.table_len(), 0);
        assert_eq!(fft.oscillator_count(), 0);
        assert_eq!(fft.max_phase_error(), 0.0);
        let n = fft.get_length();
        let x: Vec<f64> = (0..n).map(|i| i as f64 + 2.0).collect();
        let mut f = vec![0.0; n];
        let mut y = vec![0.0; n];
        fft.do_fft(&mut f, &x).unwrap();
        fft.do_ifft(&mut y, &f).unwrap();
        fft.rescale(&mut y).unwrap();
        assert_eq!(x, y);
    }
    let mut one = FixLenRfft::<f32>::new(0).unwrap();
    let mut f = [0.0f32];
    one.do_fft(&mut f, &[3.5]).unwrap();
    assert_eq!(f, [3.5]);
    let mut two = FixLenRfft::<f32>::new(1).unwrap();
    let mut f = [0.0f32; 2];
    two.do_fft(&mut f, &[3.0, 1.0]).unwrap();
    assert_eq!(f, [4.0, 2.0]);
}

#[test]
fn rejected_calls_leave_output_untouched() {
    let mut fft = FixLenRfft::<f64>::new(4).unwrap();
    let mut f = vec![7.0f64; 16];
    let err = fft.do_fft(&mut f, &[1.0; 15]).unwrap_err();
    assert_eq!(
        err,
        FftError::MismatchedLengths {
            expected: 16,
            actual: 15
        }
    );
    assert!(f.iter().all(|&v| v == 7.0));
}

#[test]
fn exponent_limit() {
    assert!(matches!(
        FixLenRfft::<f64>::new(31),
        Err(FftError::InvalidNbrBits(31))
    ));
}

proptest! {
    #[test]
    fn prop_linearity(
        nbr_bits in 0u32..=10,
        a in -4.0f64..4.0,
        b in -4.0f64..4.0,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut fft = FixLenRfft::<f64>::new(nbr_bits).unwrap();
        let n = fft.get_length();
        let x = random_signal(&mut rng, n);
        let y = random_signal(&mut rng, n);
        let mix: Vec<f64> = x.iter().zip(y.iter()).map(|(p, q)| a * p + b * q).collect();
        let mut fx = vec![0.0; n];
        let mut fy = vec![0.0; n];
        let mut fmix = vec![0.0; n];
        fft.do_fft(&mut fx, &x).unwrap();
        fft.do_fft(&mut fy, &y).unwrap();
        fft.do_fft(&mut fmix, &mix).unwrap();
        for k in 0..n {
            let expected = a * fx[k] + b * fy[k];
            prop_assert!((fmix[k] - expected).abs() < 1e-9 * n as f64);
        }
    }

    #[test]
    fn prop_roundtrip_f32(ref signal in proptest::collection::vec(-1000.0f32..1000.0, 256)) {
        let mut fft = FixLenRfft::<f32>::new(8).unwrap();
        let mut f = vec![0.0f32; 256];
        let mut y = vec![0.0f32; 256];
        fft.do_fft(&mut f, signal).unwrap();
        fft.do_ifft(&mut y, &f).unwrap();
        fft.rescale(&mut y).unwrap();
        let tol = roundtrip_tolerance(&fft, 1000.0);
        for (a, b) in signal.iter().zip(y.iter()) {
            prop_assert!(((a - b).abs() as f64) <= tol);
        }
    }
}
