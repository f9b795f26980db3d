use std::fmt;

/// The shared record behind every kind of learner: who they are and which
/// courses they have signed up for.
///
/// Courses keep their insertion order and may repeat.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    age: u32,
    courses: Vec<String>,
}

impl Student {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            courses: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn courses(&self) -> &[String] {
        &self.courses
    }
}

/// Behavior common to every learner.
///
/// Implementors only expose their embedded [`Student`] record; enrolling and
/// studying are provided here once and shared by all of them. The description
/// comes from each implementor's own `Display`.
pub trait Learner: fmt::Display {
    fn record(&self) -> &Student;

    fn record_mut(&mut self) -> &mut Student;

    /// Appends `course` and announces the enrollment on stdout.
    fn add_course(&mut self, course: &str) {
        let record = self.record_mut();
        record.courses.push(course.to_string());
        println!("{} added course: {}", record.name, course);
    }

    /// The line [`Learner::study`] prints.
    fn study_line(&self) -> String {
        let record = self.record();
        if record.courses.is_empty() {
            format!("{} has not chosen any courses yet", record.name)
        } else {
            format!("{} is studying: {}", record.name, record.courses.join(", "))
        }
    }

    fn study(&self) {
        println!("{}", self.study_line());
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Learner for Student {
    fn record(&self) -> &Student {
        self
    }

    fn record_mut(&mut self) -> &mut Student {
        self
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student[name={}, age={}, courses={}]",
            self.name,
            self.age,
            self.courses.len()
        )
    }
}

/// A learner with a field of study and research to announce.
#[derive(Debug, Clone, PartialEq)]
pub struct GraduateStudent {
    student: Student,
    major: String,
}

impl GraduateStudent {
    pub fn new(name: impl Into<String>, age: u32, major: impl Into<String>) -> Self {
        Self {
            student: Student::new(name, age),
            major: major.into(),
        }
    }

    pub fn research_line(&self) -> String {
        format!(
            "{} is conducting research in {}",
            self.student.name, self.major
        )
    }

    pub fn conduct_research(&self) {
        println!("{}", self.research_line());
    }
}

impl Learner for GraduateStudent {
    fn record(&self) -> &Student {
        &self.student
    }

    fn record_mut(&mut self) -> &mut Student {
        &mut self.student
    }
}

impl fmt::Display for GraduateStudent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GraduateStudent[name={}, age={}, major={}, courses={}]",
            self.student.name(),
            self.student.age(),
            self.major,
            self.student.courses().len()
        )
    }
}
