//! Builder wiring rooms into a finished, read-only [`Mansion`].

use tracing::instrument;

use crate::domain::error::DomainResult;
use crate::domain::mansion::Mansion;
use crate::domain::room::{Room, RoomId, Side};

/// Constructs a mansion top-down: the entrance first, then each room behind
/// a free door of a room already placed.
#[derive(Debug, Default)]
pub struct MansionBuilder {
    mansion: Mansion,
}

impl MansionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the first room. Fails if an entrance already exists.
    pub fn entrance(&mut self, room: Room) -> DomainResult<RoomId> {
        self.mansion.insert_room(room, None)
    }

    /// Places `room` behind the `side` door of `parent`.
    pub fn room(&mut self, parent: RoomId, side: Side, room: Room) -> DomainResult<RoomId> {
        self.mansion.insert_room(room, Some((parent, side)))
    }

    #[instrument(level = "debug", skip(self), fields(rooms = self.mansion.len()))]
    pub fn build(self) -> Mansion {
        self.mansion
    }
}
