//! 模型散文到结构化数据的解析层
//!
//! 解析器自身从不报错中断：按约定格式提取，提取不到就返回空结果或
//! 显式的失败原因，空结果是否致命由调用方裁决。

pub mod idea_names;
pub mod investor_records;
pub mod problem_statements;
pub mod report_lines;

pub use idea_names::{extract_idea_names, parse_refined_ideas};
pub use investor_records::{InvestorParse, parse_investor_records};
pub use problem_statements::extract_problem_statements;
pub use report_lines::{competitor_lines, market_gap_lines};
