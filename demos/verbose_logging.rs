//! Demonstrates enabling verbose logging for fixlen-rfft.
use fixlen_rfft::FixLenRfft;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut fft = FixLenRfft::<f32>::new(14).unwrap();
    let x: Vec<f32> = (0..fft.get_length()).map(|i| (i % 5) as f32).collect();
    let mut f = vec![0.0; x.len()];
    fft.do_fft(&mut f, &x).unwrap();
    println!("DC bin: {}", f[0]);
}
