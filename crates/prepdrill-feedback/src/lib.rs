//! prepdrill-feedback — Narrative feedback composition.
//!
//! Turns a normalized score into a structured, styled feedback document.
//! The numeric pipeline lives in `prepdrill-core` and stays fully
//! deterministic; every random draw in this crate goes through a caller
//! supplied `Rng` so tests can pin template selection with a seeded
//! generator.

mod templates;

pub mod composer;
pub mod style;

pub use composer::{compose, evaluate_answer, follow_up_question, FeedbackDocument};
pub use style::{Bucket, Style};
