pub mod case_flow;
pub mod grading_case;
pub mod points;
pub mod scoring;

pub use case_flow::CaseFlow;
pub use grading_case::{Category, Expectation, GradingCase, ResponseClass, SUCCESS_MARKER};
pub use points::Points;
pub use scoring::{FinalScore, ScoreState, Verdict, MAX_POINTS};
