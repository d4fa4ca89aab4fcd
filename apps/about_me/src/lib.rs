//! About Me: shows a name, lets the user enter a nickname and reveals it on
//! "Done", above a short biography.

pub mod nickname;
pub mod screen;
pub mod strings;

pub use nickname::{NicknameRevealController, NicknameSnapshot, RevealPhase};
