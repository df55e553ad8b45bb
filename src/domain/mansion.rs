use generational_arena::Arena;
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::room::{Room, RoomId, Side};

/// Arena-based binary tree of rooms.
///
/// Every room enters the arena exactly once, either as the entrance or
/// behind a free door of an existing room, so the structure is a tree by
/// construction: no cycles, no shared children. Rooms are placed through
/// [`MansionBuilder`](crate::domain::MansionBuilder); a built mansion is read-only.
#[derive(Debug)]
pub struct Mansion {
    /// Arena storage for all rooms
    arena: Arena<Room>,
    /// Index of the entrance, None for an empty mansion
    root: Option<RoomId>,
}

impl Default for Mansion {
    fn default() -> Self {
        Self::new()
    }
}

impl Mansion {
    pub(crate) fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Adds `room` to the mansion.
    ///
    /// With `parent == None` the room becomes the entrance; otherwise it is
    /// placed behind the given door of the parent. Fails without modifying
    /// the mansion if the entrance is already set, the parent is unknown,
    /// or the door is already taken.
    #[instrument(level = "trace", skip(self, room), fields(room = %room.name()))]
    pub(crate) fn insert_room(&mut self, room: Room, parent: Option<(RoomId, Side)>) -> DomainResult<RoomId> {
        match parent {
            None => {
                if let Some(root) = self.root.and_then(|idx| self.arena.get(idx)) {
                    return Err(DomainError::RootAlreadySet(root.name().to_string()));
                }
                let idx = self.arena.insert(room);
                self.root = Some(idx);
                Ok(idx)
            }
            Some((parent_idx, side)) => {
                let parent_room = self
                    .arena
                    .get(parent_idx)
                    .ok_or_else(|| DomainError::UnknownRoom(format!("{:?}", parent_idx)))?;
                if parent_room.child(side).is_some() {
                    return Err(DomainError::SlotOccupied {
                        parent: parent_room.name().to_string(),
                        side,
                    });
                }
                let idx = self.arena.insert(room);
                if let Some(parent_room) = self.arena.get_mut(parent_idx) {
                    *parent_room.slot_mut(side) = Some(idx);
                }
                debug!("linked {:?} behind {} door of {:?}", idx, side, parent_idx);
                Ok(idx)
            }
        }
    }

    pub fn room(&self, idx: RoomId) -> Option<&Room> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<RoomId> {
        self.root
    }

    /// The room where every exploration starts.
    pub fn entrance(&self) -> DomainResult<RoomId> {
        self.root.ok_or(DomainError::EmptyMansion)
    }

    pub fn child(&self, idx: RoomId, side: Side) -> Option<RoomId> {
        self.room(idx).and_then(|room| room.child(side))
    }

    /// Follows `path` from the entrance; None as soon as a door is missing.
    #[instrument(level = "trace", skip(self))]
    pub fn walk(&self, path: &[Side]) -> Option<RoomId> {
        path.iter()
            .try_fold(self.root?, |current, &side| self.child(current, side))
    }

    /// First room with the given name in pre-order.
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.iter()
            .find(|(_, room)| room.name() == name)
            .map(|(idx, _)| idx)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order iteration, left door before right door.
    pub fn iter(&self) -> RoomIterator<'_> {
        RoomIterator::new(self)
    }
}

pub struct RoomIterator<'a> {
    mansion: &'a Mansion,
    stack: Vec<RoomId>,
}

impl<'a> RoomIterator<'a> {
    fn new(mansion: &'a Mansion) -> Self {
        Self {
            mansion,
            stack: mansion.root().into_iter().collect(),
        }
    }
}

impl<'a> Iterator for RoomIterator<'a> {
    type Item = (RoomId, &'a Room);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        let room = self.mansion.room(current)?;
        // Right first so that left pops first
        self.stack.extend(room.right);
        self.stack.extend(room.left);
        Some((current, room))
    }
}
