//! Application layer: the exploration session

pub mod error;
pub mod session;

pub use error::{ApplicationError, ApplicationResult};
pub use session::{Command, Discovery, Move, Outcome, Session};
