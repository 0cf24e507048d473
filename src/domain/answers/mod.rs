//! Answers module - questionnaire vocabulary, raw record, and the
//! normalized AnswerSet.
//!
//! # Components
//!
//! - `values` - closed enums for every categorical question
//! - `keys` - question-key string constants and per-theme required sets
//! - `RawAnswers` - the record as submitted, every field optional
//! - `AnswerSet` - validated and defaulted input for the evaluators
//! - `defaults` - the central defaults table for optional keys

pub mod defaults;
pub mod keys;
mod answer_set;
mod raw;
mod values;

pub use answer_set::AnswerSet;
pub use raw::RawAnswers;
pub use values::{
    AcquisitionChannel, ConversionLevel, DigitalPresence, Level, MaturityLevel,
    PostSaleRelationship, ServiceCapacity, SystemAdoption, ToolAdoption, WebsitePresence,
};
