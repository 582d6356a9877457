//! Benchmark runner: times `multiply` across matrix sizes and thread counts.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use matmul_threads::{Matrix, multiply, multiply_sequential};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{Level, debug, info};

#[derive(Parser, Debug)]
#[command(name = "matmul-bench")]
#[command(about = "Time row-partitioned matrix multiplication across sizes and thread counts", long_about = None)]
struct Args {
    /// Square matrix sizes to benchmark
    #[arg(short, long, value_delimiter = ',', default_value = "64,128,256,512")]
    sizes: Vec<usize>,

    /// Worker thread counts to benchmark (0 and 1 both mean sequential)
    #[arg(short = 'j', long, value_delimiter = ',', default_value = "1,2,4,8")]
    threads: Vec<usize>,

    /// Timed runs per (size, threads) pair, after one warmup run
    #[arg(short, long, default_value_t = 3)]
    iterations: usize,

    /// Seed for the random input matrices
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Also write results as CSV to this path
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

struct Sample {
    size: usize,
    threads: usize,
    avg_ms: f64,
    speedup: f64,
}

fn main() -> Result<()> {
    let mut args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    if args.sizes.is_empty() || args.threads.is_empty() {
        bail!("need at least one size and one thread count");
    }
    if args.iterations == 0 {
        bail!("iterations must be at least 1");
    }
    dedup_in_order(&mut args.sizes);
    dedup_in_order(&mut args.threads);

    println!("=== Threaded Matrix Multiplication Benchmark ===\n");
    info!(
        sizes = ?args.sizes,
        threads = ?args.threads,
        iterations = args.iterations,
        seed = args.seed,
        "starting benchmark"
    );

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut samples = Vec::new();

    for &size in &args.sizes {
        println!("Matrix: {}×{}", size, size);
        println!("{}", "-".repeat(40));

        let a = random_matrix(size, size, &mut rng)?;
        let b = random_matrix(size, size, &mut rng)?;

        let reference = multiply_sequential(&a, &b)?;

        let mut baseline_ms = None;
        for &threads in &args.threads {
            let c = multiply(&a, &b, threads)?;
            if c != reference {
                bail!("{} threads disagree with sequential result at size {}", threads, size);
            }

            let avg_ms = bench_multiply(&a, &b, threads, args.iterations)?;
            let baseline = *baseline_ms.get_or_insert(avg_ms);
            let speedup = if avg_ms > 0.0 { baseline / avg_ms } else { 1.0 };

            println!("  {:>3} threads  {:10.3} ms  ({:.2}×)", threads, avg_ms, speedup);
            samples.push(Sample {
                size,
                threads,
                avg_ms,
                speedup,
            });
        }
        println!();
    }

    print_summary_table(&args.sizes, &args.threads, &samples);

    if let Some(path) = &args.csv {
        write_csv(path, &samples)
            .with_context(|| format!("failed to write CSV to {}", path.display()))?;
        info!(path = %path.display(), rows = samples.len(), "wrote CSV");
    }

    Ok(())
}

/// Drops repeated entries, keeping the first occurrence of each.
fn dedup_in_order(values: &mut Vec<usize>) {
    let mut seen = HashSet::new();
    values.retain(|v| seen.insert(*v));
}

/// Random `rows × cols` matrix with entries in `[-9, 9]`.
fn random_matrix(rows: usize, cols: usize, rng: &mut StdRng) -> Result<Matrix> {
    let data = (0..rows * cols).map(|_| rng.random_range(-9..=9)).collect();
    Ok(Matrix::from_vec(rows, cols, data)?)
}

/// Average wall time of `multiply` in milliseconds.
fn bench_multiply(a: &Matrix, b: &Matrix, threads: usize, iterations: usize) -> Result<f64> {
    // Warmup
    multiply(a, b, threads)?;

    let mut total = 0.0;
    for run in 0..iterations {
        let start = Instant::now();
        let c = multiply(a, b, threads)?;
        let elapsed = start.elapsed().as_secs_f64();
        debug!(run, threads, rows = c.rows(), elapsed_ms = elapsed * 1000.0, "timed run");
        total += elapsed;
    }

    Ok(total / iterations as f64 * 1000.0)
}

fn print_summary_table(sizes: &[usize], threads: &[usize], samples: &[Sample]) {
    let width = 12 + 16 * threads.len();
    println!("{}", "=".repeat(width));
    println!("SUMMARY (ms)");
    println!("{}", "=".repeat(width));

    print!("{:<12}", "Size");
    for t in threads {
        print!("{:>16}", format!("{} threads", t));
    }
    println!();
    println!("{}", "-".repeat(width));

    for &size in sizes {
        print!("{:<12}", format!("{}×{}", size, size));
        for s in samples.iter().filter(|s| s.size == size) {
            print!("{:>16}", format!("{:.3} ({:.1}×)", s.avg_ms, s.speedup));
        }
        println!();
    }

    println!("{}", "=".repeat(width));
    println!("\nSpeedup relative to the first thread count listed. Higher is better.\n");
}

fn write_csv(path: &Path, samples: &[Sample]) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "size,threads,avg_ms,speedup")?;
    for s in samples {
        writeln!(w, "{},{},{:.6},{:.4}", s.size, s.threads, s.avg_ms, s.speedup)?;
    }
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_in_order() {
        let mut sizes = vec![256, 64, 256, 128, 64];
        dedup_in_order(&mut sizes);
        assert_eq!(sizes, vec![256, 64, 128]);
    }

    #[test]
    fn test_args_parse_lists() {
        let args = Args::parse_from(["matmul-bench", "-s", "8,16", "-j", "1,4", "-i", "2"]);
        assert_eq!(args.sizes, vec![8, 16]);
        assert_eq!(args.threads, vec![1, 4]);
        assert_eq!(args.iterations, 2);
        assert_eq!(args.seed, 42);
        assert!(args.csv.is_none());
    }

    #[test]
    fn test_random_matrix_is_seeded() {
        let a = random_matrix(5, 7, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = random_matrix(5, 7, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.shape(), (5, 7));
        assert!(a.as_slice().iter().all(|v| (-9..=9).contains(v)));
    }
}
