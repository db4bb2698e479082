//! 流水线产出的领域数据类型

mod artifacts;
mod deck;

pub use artifacts::{ColdEmail, InvestorRecord, RefinedIdea};
pub use deck::{PitchDeck, Slide};
