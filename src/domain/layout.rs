//! The hand-authored map of the Enigma mansion.
//!
//! ```text
//! Hall de Entrada
//! ├── Sala de Estar
//! │   ├── Biblioteca
//! │   └── Escritório
//! └── Cozinha
//! ```

use tracing::instrument;

use crate::domain::builder::MansionBuilder;
use crate::domain::error::DomainResult;
use crate::domain::mansion::Mansion;
use crate::domain::room::{Room, Side};

pub const ENTRANCE: &str = "Hall de Entrada";
pub const LIVING_ROOM: &str = "Sala de Estar";
pub const KITCHEN: &str = "Cozinha";
pub const LIBRARY: &str = "Biblioteca";
pub const OFFICE: &str = "Escritório";

/// Builds the fixed five-room mansion.
#[instrument(level = "debug")]
pub fn enigma_mansion() -> DomainResult<Mansion> {
    let hall = Room::new(ENTRANCE, Some("Pegadas misteriosas no tapete"));
    let living_room = Room::new(LIVING_ROOM, Some("Um retrato com olhos recortados"));
    let kitchen = Room::new(KITCHEN, Some("Um copo quebrado no chão"));
    let library = Room::new(LIBRARY, Some("Um livro aberto em uma página marcada"));
    let office = Room::new(OFFICE, Some("Uma carta parcialmente queimada"));

    let mut builder = MansionBuilder::new();
    let hall = builder.entrance(hall)?;
    let living_room = builder.room(hall, Side::Left, living_room)?;
    builder.room(hall, Side::Right, kitchen)?;
    builder.room(living_room, Side::Left, library)?;
    builder.room(living_room, Side::Right, office)?;

    Ok(builder.build())
}
