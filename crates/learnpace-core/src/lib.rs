//! learnpace-core — Pace scoring, classification, and recommendations.
//!
//! This crate turns a student's raw performance record into a learning pace
//! category and the content-delivery recommendations attached to it. Scoring
//! and classification are pure; only [`analysis::analyze`] reads the clock.

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod recommender;
pub mod report;
pub mod scorer;
pub mod statistics;

pub use analysis::{analyze, AnalysisResult, Analyzer};
pub use classifier::classify;
pub use error::ValidationError;
pub use model::{PaceCategory, RecommendationBundle, StudentPerformanceRecord};
pub use recommender::{recommend, recommend_label};
pub use scorer::{score, PaceScore, PaceScorer, PaceWeights};
