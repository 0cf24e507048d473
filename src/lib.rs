//! Bizpulse - rule-based business diagnosis engine.
//!
//! Maps a structured digital-maturity questionnaire to an explainable
//! diagnosis: per-theme health classification, extracted risk points
//! and opportunities, a ranked list of justified recommendations, and
//! a fixed next-steps script. Stateless, deterministic, and free of
//! I/O; transport and persistence belong to the caller.

pub mod application;
pub mod domain;

pub use application::evaluate;
pub use domain::analysis::{
    PriorityClassifier, PrioritySolution, Recommendation, RecommendationSelector,
    SignalAggregator, SignalSummary, ThemeAnalysis,
};
pub use domain::answers::{AnswerSet, RawAnswers};
pub use domain::diagnosis::{DiagnosisResult, NEXT_STEPS};
pub use domain::foundation::{HealthStatus, OrganizationLevel, Theme, ValidationError};
