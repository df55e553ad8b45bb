//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.
//! Game output goes to any writer so that transcripts can be captured.

use std::io::{self, Write};

use colored::Colorize;

use crate::application::{Discovery, Move};
use crate::config::KeyBindings;
use crate::domain::ClueIndex;

const RULE: &str = "=============================";

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Welcome lines shown once before the first room
pub fn banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "🕵️ Bem-vindo(a) à Mansão Enigma!".cyan().bold())?;
    writeln!(out, "Explore os cômodos e colete todas as pistas.")
}

/// Room header plus the clue found there
pub fn room(out: &mut impl Write, discovery: &Discovery<'_>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "📍 Você está no cômodo: {}", discovery.room.name().bold())?;
    match discovery.clue {
        Some(clue) => writeln!(out, "🔍 Pista encontrada: \"{}\"", clue.yellow()),
        None => writeln!(out, "Nenhuma pista neste cômodo."),
    }
}

/// Available doors and the exit, followed by the prompt (no newline)
pub fn menu(out: &mut impl Write, moves: &[Move<'_>], keys: &KeyBindings) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Escolha seu caminho:")?;
    for m in moves {
        writeln!(
            out,
            " ({}) Ir para {}",
            keys.key_for(m.side).to_string().green(),
            m.target.name()
        )?;
    }
    writeln!(out, " ({}) Sair da mansão", keys.exit.to_string().green())?;
    write!(out, "> ")?;
    out.flush()
}

pub fn invalid_choice(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "❌ Caminho inválido!".red())
}

pub fn farewell(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "👋 Você decidiu sair da mansão.")
}

/// Collected clues in alphabetical order
pub fn summary(out: &mut impl Write, clues: &ClueIndex) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{}", "📜 PISTAS COLETADAS (em ordem alfabética):".cyan().bold())?;
    writeln!(out, "{}", RULE)?;
    if clues.is_empty() {
        writeln!(out, "Nenhuma pista foi coletada.")?;
    } else {
        for clue in clues {
            writeln!(out, "- {}", clue)?;
        }
    }
    writeln!(out)?;
    writeln!(out, "Fim da exploração.")?;
    out.flush()
}
