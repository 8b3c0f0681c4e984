pub mod candidate;
pub mod scored;
