//! 各生成阶段的Agent实现

pub mod cold_email_writer;
pub mod domain_extractor;
pub mod idea_refiner;
pub mod investor_finder;
pub mod market_researcher;
pub mod mvp_planner;
pub mod problem_generator;
pub mod solution_generator;

pub use cold_email_writer::{ColdEmailInputs, ColdEmailWriter};
pub use domain_extractor::DomainExtractor;
pub use idea_refiner::IdeaRefiner;
pub use investor_finder::InvestorFinder;
pub use market_researcher::MarketResearcher;
pub use mvp_planner::{MvpInputs, MvpPlanner};
pub use problem_generator::ProblemGenerator;
pub use solution_generator::SolutionGenerator;
