//! Prints the magnitude of every bin of a two-tone signal.
use fixlen_rfft::{unpack_spectrum, Complex64, FixLenRfft};

fn main() {
    let mut fft = FixLenRfft::<f64>::new(6).unwrap();
    let n = fft.get_length();
    let x: Vec<f64> = (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            (2.0 * std::f64::consts::PI * 5.0 * t).sin()
                + 0.5 * (2.0 * std::f64::consts::PI * 12.0 * t).cos()
        })
        .collect();
    let mut packed = vec![0.0; n];
    fft.do_fft(&mut packed, &x).unwrap();

    let mut bins = vec![Complex64::zero(); n / 2 + 1];
    unpack_spectrum(&packed, &mut bins).unwrap();
    for (k, b) in bins.iter().enumerate() {
        let mag = (b.re * b.re + b.im * b.im).sqrt();
        if mag > 1e-9 {
            println!("bin {k:2}: {mag:.3}");
        }
    }
}
