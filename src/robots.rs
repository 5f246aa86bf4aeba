mod directive;
mod evaluate_error;
mod evaluator;
mod group;
mod parse_result;
mod parse_warning;
mod parser;
mod pattern;
mod verdict;

pub use directive::{Directive, DirectiveKind};
pub use evaluate_error::EvaluateError;
pub use evaluator::{crawl_delay_for, evaluate, selected_group};
pub use group::{Group, PathRule};
pub use parse_result::ParseResult;
pub use parse_warning::ParseWarning;
pub use parser::parse;
pub use verdict::Verdict;
