use crate::core::learners::{GraduateStudent, Learner, Student};
use crate::utils::section;

pub fn run() {
    section("🏗️ Objects and traits");

    let mut student = Student::new("Bob", 22);
    student.add_course("Rust Programming");
    student.add_course("Web Frameworks");
    student.add_course("Database Design");

    println!("{}", student.describe());
    student.study();

    let mut graduate = GraduateStudent::new("Carol", 24, "Computer Science");
    graduate.add_course("Advanced Algorithms");
    graduate.add_course("Distributed Systems");
    graduate.conduct_research();

    println!("{}", graduate.describe());
}
