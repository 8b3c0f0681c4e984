pub mod config;
pub mod dataset;
pub mod domain;
pub mod errors;
pub mod normalize;
pub mod ranking;
pub mod recommendations;
pub mod scoring;
pub mod shortlist;

pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};
pub use dataset::{load_candidates, DatasetError};
pub use domain::candidate::{CandidateRecord, Degree, Education, WorkExperience};
pub use domain::scored::ScoredCandidate;
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use normalize::{EducationLevel, NormalizedCandidate};
pub use ranking::{
    CandidateFilter, DashboardSummary, LocationCount, SalaryBucket, SALARY_BUCKETS,
};
pub use recommendations::{HiringRecommendations, TeamMember};
pub use scoring::{ComponentScores, ScoreCalculator, WeightConfig, DEFAULT_WEIGHTS};
pub use shortlist::{Shortlist, ShortlistOutcome, MAX_SHORTLIST};
