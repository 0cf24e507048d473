//! Diagnosis module - the assembled result and its composer.

mod composer;
mod result;

pub use composer::ResultComposer;
pub use result::{DiagnosisResult, NEXT_STEPS};
