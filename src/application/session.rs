//! Exploration state machine.
//!
//! A [`Session`] knows the room the player stands in and the clues found so
//! far. It performs no I/O: the interactive loop feeds it [`Command`]s and
//! renders what comes back.

use tracing::{debug, info, instrument};

use crate::application::ApplicationResult;
use crate::domain::{ClueIndex, DomainError, Mansion, Room, RoomId, Side};

/// What the player asked for, after key bindings are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Go(Side),
    Exit,
    Unknown(char),
}

/// Result of applying a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Moved(RoomId),
    Exited,
    /// Unknown key, or a door that does not exist. State is unchanged.
    Rejected,
}

/// What the player finds when entering a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discovery<'m> {
    pub room: &'m Room,
    pub clue: Option<&'m str>,
    /// False for rooms without clue and for clue texts already collected.
    pub newly_indexed: bool,
}

/// A door the player may take from the current room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move<'m> {
    pub side: Side,
    pub target: &'m Room,
}

#[derive(Debug)]
pub struct Session<'m> {
    mansion: &'m Mansion,
    current: RoomId,
    room: &'m Room,
    clues: ClueIndex,
    exited: bool,
}

impl<'m> Session<'m> {
    /// Starts at the entrance with an empty clue index.
    pub fn new(mansion: &'m Mansion) -> ApplicationResult<Self> {
        let current = mansion.entrance()?;
        let room = mansion
            .room(current)
            .ok_or_else(|| DomainError::UnknownRoom(format!("{:?}", current)))?;
        Ok(Self {
            mansion,
            current,
            room,
            clues: ClueIndex::new(),
            exited: false,
        })
    }

    pub fn current(&self) -> RoomId {
        self.current
    }

    pub fn current_room(&self) -> &'m Room {
        self.room
    }

    /// Looks around the current room and records its clue, if any.
    #[instrument(level = "debug", skip(self), fields(room = %self.room.name()))]
    pub fn enter(&mut self) -> Discovery<'m> {
        let clue = self.room.clue();
        let newly_indexed = clue.is_some_and(|text| self.clues.insert(text));
        if newly_indexed {
            info!("clue collected ({} so far)", self.clues.len());
        }
        Discovery {
            room: self.room,
            clue,
            newly_indexed,
        }
    }

    /// Doors leaving the current room, left before right. Exit is always possible.
    pub fn moves(&self) -> Vec<Move<'m>> {
        [Side::Left, Side::Right]
            .into_iter()
            .filter_map(|side| {
                let target = self.room.child(side).and_then(|idx| self.mansion.room(idx))?;
                Some(Move { side, target })
            })
            .collect()
    }

    #[instrument(level = "debug", skip(self), fields(room = %self.room.name()))]
    pub fn apply(&mut self, command: Command) -> Outcome {
        if self.exited {
            return Outcome::Exited;
        }
        match command {
            Command::Exit => {
                self.exited = true;
                Outcome::Exited
            }
            Command::Go(side) => {
                let next = self
                    .room
                    .child(side)
                    .and_then(|idx| self.mansion.room(idx).map(|room| (idx, room)));
                match next {
                    Some((idx, room)) => {
                        debug!("moving {} to {}", side, room.name());
                        self.current = idx;
                        self.room = room;
                        Outcome::Moved(idx)
                    }
                    None => {
                        debug!("no {} door", side);
                        Outcome::Rejected
                    }
                }
            }
            Command::Unknown(key) => {
                debug!("unknown key {:?}", key);
                Outcome::Rejected
            }
        }
    }

    pub fn is_over(&self) -> bool {
        self.exited
    }

    pub fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    pub fn into_clues(self) -> ClueIndex {
        self.clues
    }
}
