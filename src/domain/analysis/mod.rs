//! Analysis Module - Pure domain services for the business diagnosis.
//!
//! This module contains stateless functions that map a validated
//! `AnswerSet` to the building blocks of a diagnosis.
//!
//! # Components
//!
//! - Theme evaluators (`InfrastructureEvaluator`, `OperationsEvaluator`,
//!   `AcquisitionEvaluator`, `MaturityEvaluator`) - one health
//!   classification plus explanatory points per theme
//! - `SignalAggregator` - cross-theme trigger rules producing the flat
//!   critical-point and opportunity lists
//! - `RecommendationSelector` - ordered guarded rules, every match
//!   emits in priority order
//! - `PriorityClassifier` - the single headline label, read off the
//!   same rule table as the selector
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless: they read the same immutable
//! `AnswerSet`, never each other's output, and may run in any order.
//! Decision logic lives in fixed, ordered rule tables rather than
//! scattered branches, so each rule can be inspected and tested on its
//! own.

mod acquisition;
mod infrastructure;
mod maturity;
mod operations;
mod priority;
mod recommendations;
mod signals;
mod theme_analysis;

pub use acquisition::AcquisitionEvaluator;
pub use infrastructure::InfrastructureEvaluator;
pub use maturity::MaturityEvaluator;
pub use operations::OperationsEvaluator;
pub use priority::{PriorityClassifier, PrioritySolution};
pub use recommendations::{Recommendation, RecommendationSelector};
pub use signals::{SignalAggregator, SignalKind, SignalSummary, TriggerRule, TRIGGER_RULES};
pub use theme_analysis::ThemeAnalysis;
