use crate::utils::section;

/// Typed locals, format templates and the two arithmetic operators shown.
pub fn run() {
    section("📝 Basic syntax");

    let name: &str = "Rust learner";
    let age: i32 = 25;
    let height: f64 = 1.75;
    let is_student: bool = true;

    println!("Name: {name}");
    println!("Age: {age} years");
    println!("Height: {height:.2} m");
    println!("Student: {is_student}");

    let (a, b) = (10, 3);
    println!("Arithmetic: {a} + {b} = {}", a + b);
    println!("Arithmetic: {a} % {b} = {}", a % b);
}
