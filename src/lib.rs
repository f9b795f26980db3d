//! A guided tour of everyday Rust: locals and formatting, collections,
//! traits, iterator pipelines, error handling, files, generics, closures and
//! dates. Every walkthrough lives in [`demos`]; the types they work on live
//! in [`core`].
pub mod core;
pub mod demos;
pub mod utils;
