use crate::demos::collections::bracketed;
use crate::utils::section;

pub fn evens(numbers: &[i32]) -> Vec<i32> {
    numbers.iter().copied().filter(|n| n % 2 == 0).collect()
}

/// Squares are widened to `i64`, which holds the square of any `i32`.
pub fn squares(numbers: &[i32]) -> Vec<i64> {
    numbers.iter().map(|&n| i64::from(n) * i64::from(n)).collect()
}

/// Summed as `i64`, so no slice shorter than 2^32 elements can overflow.
pub fn sum(numbers: &[i32]) -> i64 {
    numbers.iter().map(|&n| i64::from(n)).sum()
}

/// Arithmetic mean, or `0.0` when there is nothing to average.
pub fn average(numbers: &[i32]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    numbers.iter().map(|&n| f64::from(n)).sum::<f64>() / numbers.len() as f64
}

pub fn run() {
    section("🌊 Iterator pipelines");

    let numbers: Vec<i32> = (1..=10).collect();
    println!("Numbers: {}", bracketed(&numbers));
    println!("Evens: {}", bracketed(evens(&numbers)));
    println!("Squares: {}", bracketed(squares(&numbers)));
    println!("Sum: {}", sum(&numbers));
    println!("Average: {}", average(&numbers));
}
