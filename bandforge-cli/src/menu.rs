//! The interactive menu shell — a print-read-dispatch loop over a
//! [`Registry`].
//!
//! The loop is generic over its input and output streams so tests can drive
//! a whole session from a scripted buffer and inspect every byte written;
//! `main` passes locked stdin/stdout.

use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use bandforge_core::{Band, Member, Registry, RegistryError};

use crate::prompt::{self, IndexAnswer};

const MAIN_MENU: &str = "\
Pick an option:
  0) Exit
  1) Add a new band
  2) View a band
  3) Delete a band
  4) List all bands";

const BAND_MENU: &str = "\
Pick an option:
  0) Go Back
  1) Add a new band member
  2) Delete a member from the band";

/// What the dispatched action decided about the session.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

// ---------------------------------------------------------------------------
// Session loop
// ---------------------------------------------------------------------------

/// Run a whole menu session against `registry` until the user exits or the
/// input ends. Both paths leave through the same farewell.
pub fn run<R: BufRead, W: Write>(
    registry: &mut Registry,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", "Welcome to BandForge!".bold())?;
    loop {
        writeln!(out)?;
        let Some(choice) = prompt::ask(input, out, MAIN_MENU)? else {
            break;
        };
        let flow = match choice.as_str() {
            "1" => create_band(registry, input, out)?,
            "2" => view_band(registry, input, out)?,
            "3" => delete_band(registry, input, out)?,
            "4" => {
                list_bands(registry, out)?;
                Flow::Continue
            }
            "0" => Flow::Exit,
            other => {
                writeln!(out, "{}", format!("Unknown option '{other}'. Pick 0-4.").red())?;
                Flow::Continue
            }
        };
        if flow == Flow::Exit {
            break;
        }
    }
    writeln!(out, "{}", "Adios! Thank you for using BandForge!".bold())?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Main-menu actions
// ---------------------------------------------------------------------------

fn create_band<R: BufRead, W: Write>(
    registry: &mut Registry,
    input: &mut R,
    out: &mut W,
) -> Result<Flow> {
    // Empty answers are accepted on purpose; the fields are opaque text.
    let Some(name) = prompt::ask(input, out, "Enter the band's name:")? else {
        return Ok(Flow::Exit);
    };
    let Some(genre) = prompt::ask(input, out, "Enter the band's genre:")? else {
        return Ok(Flow::Exit);
    };
    let Some(location) = prompt::ask(input, out, "Enter the band's location:")? else {
        return Ok(Flow::Exit);
    };
    let Some(status) = prompt::ask(input, out, "Enter the band's current status:")? else {
        return Ok(Flow::Exit);
    };

    registry.create_band(name.as_str(), genre, location, status);
    writeln!(out, "{}", format!("✓ Created '{name}'").green())?;
    Ok(Flow::Continue)
}

fn view_band<R: BufRead, W: Write>(
    registry: &mut Registry,
    input: &mut R,
    out: &mut W,
) -> Result<Flow> {
    let index = match prompt::ask_index(input, out, "Enter the band's index:")? {
        IndexAnswer::At(index) => index,
        IndexAnswer::Cancelled => return Ok(Flow::Continue),
        IndexAnswer::Eof => return Ok(Flow::Exit),
    };
    if let Err(err) = registry.select_band(index) {
        report(out, &err)?;
        return Ok(Flow::Continue);
    }
    band_menu(registry, input, out)
}

fn delete_band<R: BufRead, W: Write>(
    registry: &mut Registry,
    input: &mut R,
    out: &mut W,
) -> Result<Flow> {
    let index =
        match prompt::ask_index(input, out, "Enter the index of the band you want to delete:")? {
            IndexAnswer::At(index) => index,
            IndexAnswer::Cancelled => return Ok(Flow::Continue),
            IndexAnswer::Eof => return Ok(Flow::Exit),
        };
    match registry.delete_band(index) {
        Ok(band) => writeln!(out, "{}", format!("✓ Deleted '{}'", band.name).green())?,
        Err(err) => report(out, &err)?,
    }
    Ok(Flow::Continue)
}

#[derive(Tabled)]
struct BandRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "band")]
    band: String,
}

fn list_bands<W: Write>(registry: &Registry, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "BandForge v{} | {} bands",
        env!("CARGO_PKG_VERSION"),
        registry.bands().len(),
    )?;
    if registry.bands().is_empty() {
        writeln!(out, "No bands registered.")?;
        return Ok(());
    }

    let rows: Vec<BandRow> = registry
        .list_bands()
        .map(|(position, name)| BandRow { position, band: name.to_string() })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    writeln!(out, "{table}")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Band sub-menu
// ---------------------------------------------------------------------------

/// Loop on the selected band until `Go Back` or end of input. The band
/// details are re-rendered before every round so mutations show immediately.
fn band_menu<R: BufRead, W: Write>(
    registry: &mut Registry,
    input: &mut R,
    out: &mut W,
) -> Result<Flow> {
    loop {
        let Some(band) = registry.selected_band() else {
            return Ok(Flow::Continue);
        };
        writeln!(out)?;
        render_band(out, band)?;
        writeln!(out)?;
        let Some(choice) = prompt::ask(input, out, BAND_MENU)? else {
            return Ok(Flow::Exit);
        };
        let flow = match choice.as_str() {
            "1" => add_member(registry, input, out)?,
            "2" => remove_member(registry, input, out)?,
            "0" => return Ok(Flow::Continue),
            other => {
                writeln!(out, "{}", format!("Unknown option '{other}'. Pick 0-2.").red())?;
                Flow::Continue
            }
        };
        if flow == Flow::Exit {
            return Ok(Flow::Exit);
        }
    }
}

fn render_band<W: Write>(out: &mut W, band: &Band) -> Result<()> {
    writeln!(out, "{}", format!("Band: {}", band.name).bold())?;
    writeln!(out, "{}", band.describe())?;
    for (position, member) in band.members().iter().enumerate() {
        writeln!(out, "  {position}) {}", member.describe())?;
    }
    Ok(())
}

fn add_member<R: BufRead, W: Write>(
    registry: &mut Registry,
    input: &mut R,
    out: &mut W,
) -> Result<Flow> {
    let Some(name) = prompt::ask(input, out, "Enter the band member's name:")? else {
        return Ok(Flow::Exit);
    };
    let Some(role) = prompt::ask(input, out, "Enter the band member's role:")? else {
        return Ok(Flow::Exit);
    };
    let Some(origin) = prompt::ask(input, out, "Enter band member's origin:")? else {
        return Ok(Flow::Exit);
    };

    let Some(band) = registry.selected_band_mut() else {
        return Ok(Flow::Continue);
    };
    band.add_member(Member::new(name.as_str(), role, origin));
    writeln!(out, "{}", format!("✓ Added '{}' to '{}'", name, band.name).green())?;
    Ok(Flow::Continue)
}

fn remove_member<R: BufRead, W: Write>(
    registry: &mut Registry,
    input: &mut R,
    out: &mut W,
) -> Result<Flow> {
    let index =
        match prompt::ask_index(input, out, "Enter the index of the member you want to delete:")? {
            IndexAnswer::At(index) => index,
            IndexAnswer::Cancelled => return Ok(Flow::Continue),
            IndexAnswer::Eof => return Ok(Flow::Exit),
        };
    let Some(band) = registry.selected_band_mut() else {
        return Ok(Flow::Continue);
    };
    match band.remove_member(index) {
        Ok(member) => {
            writeln!(out, "{}", format!("✓ Removed '{}' from '{}'", member.name, band.name).green())?
        }
        Err(err) => report(out, &err)?,
    }
    Ok(Flow::Continue)
}

/// Print a recoverable registry error and the retry hint; control returns
/// to the governing menu.
fn report<W: Write>(out: &mut W, err: &RegistryError) -> Result<()> {
    writeln!(out, "{} Please try again.", format!("{err}.").red())?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
