//! Rooms of the mansion and the two directions leading out of them.

use std::fmt;

use generational_arena::Index;

/// Handle of a room inside a [`Mansion`](crate::domain::Mansion).
pub type RoomId = Index;

/// Direction of a door leaving a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A node of the mansion navigation tree.
///
/// Child links are arena indices owned by the [`Mansion`](crate::domain::Mansion)
/// and can only be set while the mansion is being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    clue: Option<String>,
    pub(crate) left: Option<RoomId>,
    pub(crate) right: Option<RoomId>,
}

impl Room {
    /// Creates a room without doors. An empty clue counts as no clue.
    pub fn new(name: impl Into<String>, clue: Option<&str>) -> Self {
        Self {
            name: name.into(),
            clue: clue.filter(|c| !c.is_empty()).map(str::to_string),
            left: None,
            right: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    pub fn child(&self, side: Side) -> Option<RoomId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn slot_mut(&mut self, side: Side) -> &mut Option<RoomId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.clue {
            Some(clue) => write!(f, "{} [{}]", self.name, clue),
            None => write!(f, "{}", self.name),
        }
    }
}
