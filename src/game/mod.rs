//! Game sessions and statistics
//!
//! A [`Game`] runs consecutive rounds against injected collaborators and
//! keeps a running [`Stats`] record.

mod session;
mod stats;

pub use session::Game;
pub use stats::Stats;
