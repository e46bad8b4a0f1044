//! Handles all user-facing output for the CLI.
//!
//! Centralizes colorization and diff rendering so every command presents
//! artifacts the same way. Colors are suppressed automatically when stdout
//! is not a terminal.

use difference::{Changeset, Difference};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Color choice gated on whether stdout is a terminal.
pub fn color_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Print a colored line diff of the approved baseline against the received
/// artifact: removals in red, additions in green.
pub fn print_diff(approved: &str, received: &str) {
    let mut stdout = StandardStream::stdout(color_choice());
    let changeset = Changeset::new(approved, received, "\n");
    for diff in &changeset.diffs {
        match diff {
            Difference::Same(x) => {
                let _ = stdout.reset();
                for line in x.lines() {
                    println!(" {}", line);
                }
            }
            Difference::Rem(x) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
                for line in x.lines() {
                    println!("-{}", line);
                }
            }
            Difference::Add(x) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
                for line in x.lines() {
                    println!("+{}", line);
                }
            }
        }
    }
    let _ = stdout.reset();
}

/// Print one pending entry with its review state.
pub fn print_pending_entry(stem: &str, has_baseline: bool) {
    let mut stdout = StandardStream::stdout(color_choice());
    let (label, color) = if has_baseline {
        ("changed", Color::Yellow)
    } else {
        ("new", Color::Cyan)
    };
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    print!("{:>7}", label);
    let _ = stdout.reset();
    println!("  {}", stem);
}
