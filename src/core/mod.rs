// This file is the module declaration file for the `core` module.
// It declares the supporting types the walkthroughs in `demos` operate on.
// None of them carries any state beyond a single demonstration.

// `errors` module:
// Defines `TourError`, the typed failure kinds of the tour (division by zero,
// arithmetic overflow, file I/O), and a `Result` alias over it.
pub mod errors;

// `learners` module:
// The `Student` record, the `GraduateStudent` that embeds one, and the
// `Learner` trait that supplies enrolling and studying to both.
pub mod learners;

// `container` module:
// `Container<T>`, a generic holder for a single value.
pub mod container;

// `scratch` module:
// `ScratchFile`, a guard around the transient `temp_example.txt` that removes
// the file when it goes out of scope.
pub mod scratch;

// `config` module:
// `TourOptions`, the settings parsed from the command line (scratch
// directory and verbosity).
pub mod config;
