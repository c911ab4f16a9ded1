use std::env;
use std::fmt::Display;
use std::str::FromStr;
use log::LevelFilter;
use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use divconq::{find_closest_pair, is_sorted, merge_sort, quick_sort, select, Metrics, Point};

fn generate_uniform(rng: &mut StdRng, length: usize) -> Vec<i32> {
    let max = (length as i32).saturating_mul(10).max(1);
    (0..length).map(|_| rng.gen_range(0..max)).collect()
}

fn generate_points(rng: &mut StdRng, length: usize, max: f64) -> Vec<Point> {
    (0..length)
        .map(|_| Point::new(rng.gen_range(0.0..max), rng.gen_range(0.0..max)))
        .collect()
}

fn run(algorithm: &str, size: usize, rng: &mut StdRng) -> bool {
    let mut metrics = Metrics::new();
    let ok = match algorithm {
        "mergesort" => {
            let mut data = generate_uniform(rng, size);
            metrics.measure(|m| merge_sort::sort(&mut data, m));
            is_sorted(&data)
        }
        "quicksort" => {
            let mut data = generate_uniform(rng, size);
            metrics.measure(|m| quick_sort::sort_with_rng(&mut data, m, rng));
            is_sorted(&data)
        }
        "select" => {
            let data = generate_uniform(rng, size);
            let mut sorted = data.clone();
            sorted.sort_unstable();
            let k = size / 2;
            match metrics.measure(|m| select(&mut data.clone(), k, m)) {
                Ok(value) => {
                    info!("k = {k}, selected {value}, expected {}", sorted[k]);
                    value == sorted[k]
                }
                Err(e) => {
                    error!("{e}");
                    false
                }
            }
        }
        "closest" => {
            let points = generate_points(rng, size, 1000.0);
            match metrics.measure(|m| find_closest_pair(&points, m)) {
                Ok(pair) => {
                    info!("Closest pair: {pair}");
                    true
                }
                Err(e) => {
                    error!("{e}");
                    false
                }
            }
        }
        _ => {
            error!("Unknown algorithm: {algorithm}. Available: mergesort, quicksort, select, closest");
            return false;
        }
    };
    println!("--- {algorithm} (n = {size}) ---");
    println!("Correct: {ok}");
    println!("{}\n", metrics.report());
    ok
}

/// Parses an optional positional argument, falling back to `default` when it is absent.
fn parse_arg<T>(name: &str, arg: Option<String>, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    match arg {
        Some(arg) => arg.parse::<T>().map_err(|e| format!("Invalid {name} {arg:?}: {e}")),
        None => Ok(default),
    }
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = env::args();
    args.next();

    let algorithms: Vec<String> = match args.next() {
        Some(arg) => vec![arg.to_lowercase()],
        None => ["mergesort", "quicksort", "select", "closest"].iter().map(|s| s.to_string()).collect(),
    };

    let (size, seed) = match (parse_arg("size", args.next(), 1000), parse_arg("seed", args.next(), 12345)) {
        (Ok(size), Ok(seed)) => (size, seed),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    info!("n = {size}, seed = {seed}");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut all_ok = true;
    for algorithm in &algorithms {
        all_ok &= run(algorithm, size, &mut rng);
    }
    if !all_ok {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_arguments_use_defaults() {
        assert_eq!(parse_arg::<usize>("size", None, 1000), Ok(1000));
        assert_eq!(parse_arg::<u64>("seed", None, 12345), Ok(12345));
    }

    #[test]
    fn valid_arguments_are_parsed() {
        assert_eq!(parse_arg::<usize>("size", Some("250".to_string()), 1000), Ok(250));
        assert_eq!(parse_arg::<u64>("seed", Some("7".to_string()), 12345), Ok(7));
    }

    #[test]
    fn bad_seed_is_reported_like_bad_size() {
        let size = parse_arg::<usize>("size", Some("ten".to_string()), 1000);
        let seed = parse_arg::<u64>("seed", Some("-1".to_string()), 12345);
        assert!(matches!(size, Err(ref e) if e.starts_with("Invalid size \"ten\"")));
        assert!(matches!(seed, Err(ref e) if e.starts_with("Invalid seed \"-1\"")));
    }
}
