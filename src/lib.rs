//! Enigma mansion: walk a fixed binary tree of rooms and collect the clues
//! found along the way into an alphabetically ordered binary search tree.
//!
//! Layers, inner to outer:
//! - [`domain`]: rooms, the mansion tree, the clue index
//! - [`application`]: the exploration session state machine
//! - [`cli`]: argument parsing, terminal output, the interactive loop

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
