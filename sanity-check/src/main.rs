use clap::Parser;
use rustfft::FftPlanner;
use sanity_check::{check, random_signal, read_wav, take_cyclic, Precision};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

/// Measure fixlen-rfft accuracy against rustfft over a range of lengths.
#[derive(Parser)]
struct Args {
    /// Smallest length exponent to check
    #[arg(long, default_value_t = 0)]
    min_bits: u32,

    /// Largest length exponent to check
    #[arg(long, default_value_t = 16)]
    max_bits: u32,

    /// Element type of the engine under test
    #[arg(long, value_enum, default_value_t = Precision::F64)]
    precision: Precision,

    /// Take test signals from a WAV file instead of random samples
    #[arg(long)]
    wav: Option<PathBuf>,

    /// Seed for the random test signals
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Fail when a relative error exceeds this value
    #[arg(long)]
    tolerance: Option<f64>,
}

fn run(args: &Args) -> Result<bool, Box<dyn Error>> {
    if args.min_bits > args.max_bits {
        return Err("--min-bits must not exceed --max-bits".into());
    }
    let source = match &args.wav {
        Some(path) => {
            let (samples, sr) = read_wav(path)?;
            println!("{}: {} samples at {sr} Hz", path.display(), samples.len());
            Some(samples)
        }
        None => None,
    };

    let mut planner = FftPlanner::new();
    let mut ok = true;
    println!(
        "{:>4} {:>10} {:>12} {:>12} {:>12}",
        "L", "N", "forward", "roundtrip", "phase bound"
    );
    for nbr_bits in args.min_bits..=args.max_bits {
        let n = 1usize << nbr_bits;
        let signal = match &source {
            Some(samples) => take_cyclic(samples, n),
            None => random_signal(n, args.seed.wrapping_add(nbr_bits as u64)),
        };
        let report = check(&mut planner, args.precision, nbr_bits, &signal)?;
        let failed = args
            .tolerance
            .is_some_and(|tol| report.forward > tol || report.roundtrip > tol);
        ok &= !failed;
        println!(
            "{:>4} {:>10} {:>12.3e} {:>12.3e} {:>12.3e}{}",
            report.nbr_bits,
            n,
            report.forward,
            report.roundtrip,
            report.phase_bound,
            if failed { "  FAIL" } else { "" }
        );
    }
    Ok(ok)
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
