// This file is the module declaration file for the `demos` module.
// Each submodule is one self-contained walkthrough with a `run` entry point;
// the `Demo` enum below is the catalogue the orchestrator and the CLI use.

use clap::ValueEnum;
use std::fmt;
use tracing::debug;

use crate::core::config::TourOptions;

// `basics` module:
// Typed locals and format templates.
pub mod basics;

// `collections` module:
// A `Vec`, a `HashMap` and a deduplicating `HashSet`, plus the `bracketed`
// list renderer the other walkthroughs reuse.
pub mod collections;

// `objects` module:
// `Student` and `GraduateStudent` driven through the `Learner` trait.
pub mod objects;

// `pipelines` module:
// filter / map / sum / average over `1..=10`.
pub mod pipelines;

// `failures` module:
// `divide` and a walkthrough that catches its `DivisionByZero`.
pub mod failures;

// `files` module:
// The scratch-file walkthrough: write, read back, measure, delete.
pub mod files;

// `generics` module:
// `Container<T>` in use and a bounds-checked generic `swap`.
pub mod generics;

// `closures` module:
// Closure-driven word processing and the `Calculator` function type.
pub mod closures;

// `datetime` module:
// Timestamp formatting, month and weekday names, and day arithmetic.
pub mod datetime;

/// One walkthrough of the tour. Declaration order is the order of the tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    Basics,
    Collections,
    Objects,
    Pipelines,
    Failures,
    Files,
    Generics,
    Closures,
    Datetime,
}

impl Demo {
    pub const ALL: [Demo; 9] = [
        Demo::Basics,
        Demo::Collections,
        Demo::Objects,
        Demo::Pipelines,
        Demo::Failures,
        Demo::Files,
        Demo::Generics,
        Demo::Closures,
        Demo::Datetime,
    ];

    /// The name accepted by `run <DEMO>`.
    pub fn key(self) -> &'static str {
        match self {
            Demo::Basics => "basics",
            Demo::Collections => "collections",
            Demo::Objects => "objects",
            Demo::Pipelines => "pipelines",
            Demo::Failures => "failures",
            Demo::Files => "files",
            Demo::Generics => "generics",
            Demo::Closures => "closures",
            Demo::Datetime => "datetime",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Demo::Basics => "Basic syntax",
            Demo::Collections => "Collections",
            Demo::Objects => "Objects and traits",
            Demo::Pipelines => "Iterator pipelines",
            Demo::Failures => "Error handling",
            Demo::Files => "File operations",
            Demo::Generics => "Generics",
            Demo::Closures => "Closures",
            Demo::Datetime => "Date and time",
        }
    }

    pub fn run(self, options: &TourOptions) {
        debug!(demo = self.key(), "starting walkthrough");
        match self {
            Demo::Basics => basics::run(),
            Demo::Collections => collections::run(),
            Demo::Objects => objects::run(),
            Demo::Pipelines => pipelines::run(),
            Demo::Failures => failures::run(),
            Demo::Files => {
                files::run(&options.scratch_dir);
            }
            Demo::Generics => generics::run(),
            Demo::Closures => closures::run(),
            Demo::Datetime => datetime::run(),
        }
        debug!(demo = self.key(), "finished walkthrough");
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
