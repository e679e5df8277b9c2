//! Compare the sequential and multi-threaded folds over the same input.
//!
//! Run with: cargo run --bin compare_folds

use colored::Colorize;
use parallel_accumulate::{parallel_fold, sequential_fold, FoldError, Stopwatch};

const FIELD_WIDTH: usize = 12;

fn main() -> Result<(), FoldError> {
    let numbers: Vec<i32> = (1..=100).collect();

    let mut sequential_timer = Stopwatch::start();
    let sequential_sum = sequential_fold(&numbers, 0);
    sequential_timer.stop();
    let sequential_time = sequential_timer.elapsed();

    let mut parallel_timer = Stopwatch::start();
    let parallel_sum = parallel_fold(&numbers, 0)?;
    parallel_timer.stop();
    let parallel_time = parallel_timer.elapsed();

    println!("Answer is 5050");
    println!(
        "Sequential approach:\t{:>width$?}\tAnswer: {:>width$}",
        sequential_time,
        sequential_sum,
        width = FIELD_WIDTH
    );
    println!(
        "Multithreaded approach:\t{:>width$?}\tAnswer: {:>width$}",
        parallel_time,
        parallel_sum,
        width = FIELD_WIDTH
    );

    if sequential_time == parallel_time {
        println!("{}", "Equal time for each.".yellow());
    } else if sequential_time < parallel_time {
        println!("{}", "Sequential approach is faster.".green());
    } else {
        println!("{}", "Multithreaded approach is faster.".green());
    }

    Ok(())
}
