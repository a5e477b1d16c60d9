//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DbPool` as the first argument.

pub mod fighter_repo;
pub mod stance_repo;

pub use fighter_repo::FighterRepo;
pub use stance_repo::StanceRepo;
