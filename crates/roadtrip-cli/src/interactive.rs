//! Interactive two-prompt query loop.
//!
//! Each iteration asks for two country names and prints the shortest route
//! between them. Typing `EXIT` (any case) at either prompt, or closing
//! stdin, ends the session.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use roadtrip_lib::{format_hop, RoadTrip};
use tracing::debug;

const FIRST_PROMPT: &str = "Enter the name of the first country (type EXIT to quit): ";
const SECOND_PROMPT: &str = "Enter the name of the second country (type EXIT to quit): ";
const EXIT_COMMAND: &str = "EXIT";
const INVALID_INPUT: &str = "Invalid input. Please enter valid country names.";
const NO_PATH: &str = "No path found.";

enum Prompted {
    Country(String),
    Exit,
}

/// Run the prompt loop until `EXIT` or end of input.
pub fn run<R: BufRead, W: Write>(trip: &RoadTrip, mut input: R, out: &mut W) -> Result<()> {
    let mut queries = 0usize;
    loop {
        let first = match prompt(&mut input, out, FIRST_PROMPT)? {
            Prompted::Country(name) => name,
            Prompted::Exit => break,
        };
        if !trip.is_valid(&first) {
            writeln!(out, "{INVALID_INPUT}")?;
            continue;
        }

        let second = match prompt(&mut input, out, SECOND_PROMPT)? {
            Prompted::Country(name) => name,
            Prompted::Exit => break,
        };
        if !trip.is_valid(&second) {
            writeln!(out, "{INVALID_INPUT}")?;
            continue;
        }

        queries += 1;
        answer(trip, &first, &second, out)?;
    }

    debug!(queries, "interactive session finished");
    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Prompted> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read from stdin")?;
    if read == 0 {
        // End of input behaves like EXIT; terminate the dangling prompt line.
        writeln!(out)?;
        return Ok(Prompted::Exit);
    }

    let name = line.trim();
    if name.eq_ignore_ascii_case(EXIT_COMMAND) {
        return Ok(Prompted::Exit);
    }
    Ok(Prompted::Country(name.to_string()))
}

fn answer<W: Write>(trip: &RoadTrip, first: &str, second: &str, out: &mut W) -> Result<()> {
    if trip.resolve(first) == trip.resolve(second) {
        writeln!(out, "The distance from {first} to {second} is 0 km.")?;
        return Ok(());
    }

    let path = trip.shortest_path(first, second)?;
    if path.is_empty() {
        writeln!(out, "{NO_PATH}")?;
        return Ok(());
    }

    // Header keeps the names as typed; hops use canonical keys.
    writeln!(out, "Route from {first} to {second}:")?;
    for step in &path.steps {
        writeln!(out, "{}", format_hop(&step.from, &step.to, step.distance_km))?;
    }
    Ok(())
}
