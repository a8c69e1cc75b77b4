//! Accuracy checks of `fixlen-rfft` against `rustfft`.
use clap::ValueEnum;
use fixlen_rfft::{unpack_spectrum, Complex, FixLenRfft, Float};
use hound::{SampleFormat, WavReader};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustfft::num_complex::Complex64;
use rustfft::FftPlanner;
use std::error::Error;
use std::path::Path;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precision {
    F32,
    F64,
}

/// Errors measured for one transform length.
#[derive(Clone, Copy, Debug)]
pub struct Report {
    pub nbr_bits: u32,
    /// Largest bin error against the reference, relative to the largest
    /// reference bin magnitude.
    pub forward: f64,
    /// Largest sample error after forward, inverse and rescale, relative to
    /// the largest input magnitude.
    pub roundtrip: f64,
    /// Coefficient error bound the engine reports.
    pub phase_bound: f64,
}

/// Mono samples of a WAV file, scaled to `[-1, 1]`.
pub fn read_wav(path: &Path) -> Result<(Vec<f64>, u32), Box<dyn Error>> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;
    let interleaved: Vec<f64> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<_, _>>()?,
        SampleFormat::Int => {
            let scale = (1i64 << spec.bits_per_sample.saturating_sub(1)) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / scale))
                .collect::<Result<_, _>>()?
        }
    };
    let samples = interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f64>() / channels as f64)
        .collect();
    Ok((samples, spec.sample_rate))
}

/// `n` uniform samples in `[-1, 1)`.
pub fn random_signal(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

/// The first `n` samples of `source`, repeated if it is too short.
pub fn take_cyclic(source: &[f64], n: usize) -> Vec<f64> {
    if source.is_empty() {
        return vec![0.0; n];
    }
    source.iter().copied().cycle().take(n).collect()
}

/// Complex reference spectrum, bins `0..=N/2`.
fn reference_spectrum(planner: &mut FftPlanner<f64>, x: &[f64]) -> Vec<Complex64> {
    let n = x.len();
    let mut buf: Vec<Complex64> = x.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    planner.plan_fft_forward(n).process(&mut buf);
    buf.truncate(n / 2 + 1);
    buf
}

fn check_typed<T: Float>(
    planner: &mut FftPlanner<f64>,
    nbr_bits: u32,
    signal: &[f64],
) -> Result<Report, Box<dyn Error>> {
    let mut fft = FixLenRfft::<T>::new(nbr_bits)?;
    let n = fft.get_length();
    if signal.len() != n {
        return Err(format!("signal holds {} samples, expected {n}", signal.len()).into());
    }
    let x: Vec<T> = signal.iter().map(|&v| T::from_f64(v)).collect();
    let mut f = vec![T::zero(); n];
    let mut y = vec![T::zero(); n];
    fft.do_fft(&mut f, &x)?;
    fft.do_ifft(&mut y, &f)?;
    fft.rescale(&mut y)?;

    let mut bins = vec![Complex::<T>::zero(); n / 2 + 1];
    unpack_spectrum(&f, &mut bins)?;
    let reference = reference_spectrum(planner, signal);
    let spectrum_peak = reference.iter().map(|c| c.norm()).fold(0.0, f64::max);
    let forward = bins
        .iter()
        .zip(reference.iter())
        .map(|(a, b)| (a.re.to_f64() - b.re).abs().max((a.im.to_f64() - b.im).abs()))
        .fold(0.0, f64::max);

    let signal_peak = signal.iter().map(|v| v.abs()).fold(0.0, f64::max);
    let roundtrip = x
        .iter()
        .zip(y.iter())
        .map(|(a, b)| (a.to_f64() - b.to_f64()).abs())
        .fold(0.0, f64::max);

    Ok(Report {
        nbr_bits,
        forward: relative(forward, spectrum_peak),
        roundtrip: relative(roundtrip, signal_peak),
        phase_bound: fft.max_phase_error(),
    })
}

fn relative(err: f64, peak: f64) -> f64 {
    if peak > 0.0 {
        err / peak
    } else {
        err
    }
}

/// Transform `signal` (length `2^nbr_bits`) forward and back and measure
/// both results against the reference.
pub fn check(
    planner: &mut FftPlanner<f64>,
    precision: Precision,
    nbr_bits: u32,
    signal: &[f64],
) -> Result<Report, Box<dyn Error>> {
    match precision {
        Precision::F32 => check_typed::<f32>(planner, nbr_bits, signal),
        Precision::F64 => check_typed::<f64>(planner, nbr_bits, signal),
    }
}
