//! The interactive exploration loop.

use std::io::{BufRead, Write};

use tracing::{instrument, warn};

use crate::application::{Command, Outcome, Session};
use crate::cli::error::{CliResult, IoResultExt};
use crate::cli::input::CommandReader;
use crate::cli::output;
use crate::config::KeyBindings;
use crate::domain::{ClueIndex, Mansion};

/// Runs one exploration from the entrance until the player leaves.
///
/// Prints the alphabetical clue summary before returning the collected
/// clues. Closed input counts as leaving the mansion.
#[instrument(level = "debug", skip_all)]
pub fn play<R: BufRead, W: Write>(
    mansion: &Mansion,
    keys: &KeyBindings,
    input: R,
    mut out: W,
) -> CliResult<ClueIndex> {
    let mut session = Session::new(mansion)?;
    let mut reader = CommandReader::new(input);

    output::banner(&mut out).with_io_context("write banner")?;

    let mut entered = true;
    loop {
        if entered {
            let discovery = session.enter();
            output::room(&mut out, &discovery).with_io_context("write room")?;
        }
        output::menu(&mut out, &session.moves(), keys).with_io_context("write menu")?;

        let command = match reader.next_key().with_io_context("read command")? {
            Some(key) => keys.resolve(key),
            None => {
                warn!("input closed, leaving the mansion");
                Command::Exit
            }
        };

        match session.apply(command) {
            Outcome::Exited => {
                output::farewell(&mut out).with_io_context("write farewell")?;
                break;
            }
            Outcome::Moved(_) => entered = true,
            Outcome::Rejected => {
                output::invalid_choice(&mut out).with_io_context("write message")?;
                entered = false;
            }
        }
    }

    let clues = session.into_clues();
    output::summary(&mut out, &clues).with_io_context("write summary")?;
    Ok(clues)
}
