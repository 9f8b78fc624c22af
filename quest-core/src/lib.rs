//! Detective Quest core: the mansion map (binary tree), the clue
//! index (binary search tree), the clue → suspect lookup table
//! (chained-bucket hash table), and the exploration and judgment
//! phases tying them together.

pub mod clues;
pub mod explore;
pub mod lookup;
pub mod map;
pub mod scenario;
pub mod verdict;

mod random_test;

pub use clues::ClueIndex;
pub use explore::{GameMode, InputSource, LineSource, ScriptedInput, Session};
pub use lookup::SuspectLookup;
pub use map::{Direction, Room};
pub use scenario::Scenario;
pub use verdict::Verdict;

#[derive(Debug, thiserror::Error)]
pub enum QuestError {
    #[error("console i/o failed: {0}")]
    Console(#[from] std::io::Error),
    #[error(transparent)]
    Scenario(#[from] scenario::ScenarioError),
}
