//! Domain layer: rooms, the mansion tree and the clue index
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod clue;
pub mod display;
pub mod error;
pub mod layout;
pub mod mansion;
pub mod room;

pub use builder::MansionBuilder;
pub use clue::{traverse_in_order, ClueIndex, ClueNode, ClueTree, InOrder};
pub use display::TreeConvert;
pub use error::{DomainError, DomainResult};
pub use layout::enigma_mansion;
pub use mansion::{Mansion, RoomIterator};
pub use room::{Room, RoomId, Side};
