#![allow(dead_code)]

use std::env;
use lazy_static::lazy_static;
use rand::{thread_rng, Rng};

lazy_static! {
    pub static ref SEED: u64 = initialize_seed();
    pub static ref NUM_RUNS: usize = get_num_runs();
    pub static ref MAX_ELEMENTS: usize = get_max_elements();
}

fn initialize_seed() -> u64 {
    // RANDOMIZE_SEED=true draws a fresh seed, otherwise SEED or the default is used
    let randomize_seed = env::var("RANDOMIZE_SEED")
        .map(|val| val == "true")
        .unwrap_or(false);

    if randomize_seed {
        let seed: u64 = thread_rng().gen_range(0..u64::MAX);
        println!("Randomized seed: {}", seed);
        seed
    } else {
        let seed = env::var("SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(12345);
        println!("Seed: {}", seed);
        seed
    }
}

fn get_num_runs() -> usize {
    env::var("NUM_RUNS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(20)
}

fn get_max_elements() -> usize {
    env::var("MAX_ELEMENTS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(1 << 14)
}
