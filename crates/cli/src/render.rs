// Terminal rendering for queue state and status lines

use crate::constants::RULE;
use bankqueue_core::domain::{QueueSnapshot, Token, TokenNumber};
use bankqueue_core::Result;
use colored::Colorize;
use std::io::Write;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct PendingRow {
    #[tabled(rename = "Position")]
    position: usize,
    #[tabled(rename = "Token")]
    token: TokenNumber,
    #[tabled(rename = "Name")]
    name: String,
}

pub fn heading<W: Write>(w: &mut W, text: &str) -> Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", text.cyan().bold())?;
    Ok(())
}

pub fn menu<W: Write>(w: &mut W, title: &str, items: &str) -> Result<()> {
    heading(w, title)?;
    writeln!(w, "{}", items)?;
    Ok(())
}

pub fn success<W: Write>(w: &mut W, text: &str) -> Result<()> {
    writeln!(w, "{}", text.green())?;
    Ok(())
}

pub fn notice<W: Write>(w: &mut W, text: &str) -> Result<()> {
    writeln!(w, "{}", text.yellow())?;
    Ok(())
}

pub fn failure<W: Write>(w: &mut W, text: &str) -> Result<()> {
    writeln!(w, "{}", text.red())?;
    Ok(())
}

/// Human-readable queue summary shared by both menus
pub fn summary<W: Write>(w: &mut W, snapshot: &QueueSnapshot) -> Result<()> {
    writeln!(w, "{}", RULE)?;
    if snapshot.is_empty {
        writeln!(w, "Queue is empty.")?;
        writeln!(w, "Next token to serve: {}", snapshot.now_serving())?;
    } else {
        writeln!(w, "Now serving token: {}", snapshot.now_serving())?;
        writeln!(w, "Waiting customers: {}", snapshot.size)?;
        let numbers: Vec<String> = snapshot
            .ordered_numbers
            .iter()
            .map(|n| n.to_string())
            .collect();
        writeln!(w, "Tokens in queue (front -> back): {}", numbers.join(" , "))?;
        writeln!(w, "Last issued token: {}", snapshot.last_issued)?;
    }
    writeln!(w, "{}", RULE)?;
    Ok(())
}

/// Staff-only table with holder names
pub fn pending_table<'a, W, I>(w: &mut W, tokens: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Token>,
{
    let rows: Vec<PendingRow> = tokens
        .into_iter()
        .enumerate()
        .map(|(idx, t)| PendingRow {
            position: idx + 1,
            token: t.number(),
            name: t.holder_name().to_string(),
        })
        .collect();

    if rows.is_empty() {
        return Ok(());
    }
    writeln!(w, "{}", Table::new(rows))?;
    Ok(())
}

pub fn json_summary<W: Write>(w: &mut W, snapshot: &QueueSnapshot) -> Result<()> {
    writeln!(w, "{}", serde_json::to_string_pretty(snapshot)?)?;
    Ok(())
}
