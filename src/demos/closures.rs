use crate::demos::collections::bracketed;
use crate::utils::section;

/// Any two-integer operation, typically written inline as a closure.
pub type Calculator = fn(i32, i32) -> i32;

pub const WORDS: [&str; 5] = ["Java", "Lambda", "Stream", "Optional", "Functional"];

/// Words longer than four characters, upper-cased and sorted.
pub fn long_words_upper_sorted(words: &[&str]) -> Vec<String> {
    let mut kept: Vec<String> = words
        .iter()
        .filter(|word| word.chars().count() > 4)
        .map(|word| word.to_uppercase())
        .collect();
    kept.sort();
    kept
}

pub fn word_lengths(words: &[&str]) -> Vec<usize> {
    words.iter().map(|word| word.chars().count()).collect()
}

pub fn apply(calculator: Calculator, a: i32, b: i32) -> i32 {
    calculator(a, b)
}

pub fn run() {
    section("🎯 Closures");

    for word in long_words_upper_sorted(&WORDS) {
        println!("  processed: {word}");
    }

    println!("Word lengths: {}", bracketed(word_lengths(&WORDS)));

    let add: Calculator = |x, y| x + y;
    println!("Closure call: 5 + 3 = {}", apply(add, 5, 3));
}
