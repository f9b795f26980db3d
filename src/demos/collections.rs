use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use crate::utils::section;

pub const LANGUAGES: [&str; 4] = ["Java", "Kotlin", "Scala", "Groovy"];

pub const SKILLS: [&str; 6] = ["Java", "Spring", "MySQL", "Java", "Redis", "Spring"];

/// Renders items as `[a, b, c]`.
pub fn bracketed<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let joined = items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

pub fn scores() -> HashMap<&'static str, u32> {
    HashMap::from([("Alice", 95), ("Bob", 87), ("Carol", 92)])
}

/// Collapses repeated entries. Iteration order of the result is unspecified.
pub fn unique<'a>(items: &[&'a str]) -> HashSet<&'a str> {
    items.iter().copied().collect()
}

pub fn run() {
    section("📊 Collections");

    let mut languages = Vec::new();
    languages.extend(LANGUAGES.iter().map(|l| l.to_string()));
    println!("Languages: {}", bracketed(&languages));

    println!("\n📊 Scores:");
    for (name, score) in &scores() {
        println!("  {name}: {score} points");
    }

    println!("Skills (deduplicated): {}", bracketed(unique(&SKILLS)));
}
