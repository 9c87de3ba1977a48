//! Command-line host for the animal quiz.
//!
//! Parses a command, turns it into a core `Action`, runs it over HTTP with
//! ureq and prints the notices and the redrawn markup.

pub mod opt;
pub mod transport;

use std::io::Write;

use quiz_core::{AnimalClient, App, NoticeLevel, Outcome, Transport};
use rand::Rng;

pub use opt::{Cli, Command};
pub use transport::UreqTransport;

/// Run one command against the registry at `cli.base_url`.
pub fn run(cli: Cli, out: &mut impl Write, err: &mut impl Write) -> std::io::Result<Outcome> {
    let mut app = App::new(AnimalClient::new(&cli.base_url), UreqTransport::new());
    execute(&mut app, cli.command, out, err)
}

/// Dispatch `command` on `app`, then write notices and the rendered state.
///
/// Info notices go to `out`, error notices to `err`, each prefixed like an
/// alert box.
pub fn execute<T: Transport, R: Rng>(
    app: &mut App<T, R>,
    command: Command,
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<Outcome> {
    let outcome = app.dispatch(command.into_action());
    for notice in app.state_mut().take_notices() {
        match notice.level {
            NoticeLevel::Info => writeln!(out, "alert: {}", notice.message)?,
            NoticeLevel::Error => writeln!(err, "alert: {}", notice.message)?,
        }
    }
    writeln!(out, "{}", app.render())?;
    Ok(outcome)
}
