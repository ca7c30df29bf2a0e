//! 히트펌프 대 가스로 운전비 비교 계산 모듈 모음.

pub mod cost_model;
pub mod dataset;
pub mod pricing;

pub use cost_model::*;
pub use dataset::{parse_performance_csv, read_performance_csv, LoadError, PerformanceRecord};
pub use pricing::*;
