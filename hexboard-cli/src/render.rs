//! Text rendering of boards and their statistics

use std::fmt::Write;

use hexboard_core::{Board, BoardStats, Hex};

const RULE_WIDTH: usize = 70;

/// Indent per missing hex relative to the widest row
const ROW_INDENT: usize = 3;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn number_label(hex: &Hex) -> String {
    hex.number().map_or_else(|| "--".to_string(), |n| n.to_string())
}

/// Hex grid drawing, rows offset to form the board shape
pub fn visual(board: &Board) -> String {
    let mut out = String::new();
    let rows = board.rows();
    let widest = rows.iter().map(|r| r.len()).max().unwrap_or(0);

    let _ = writeln!(out, "\n{}\nBOARD - VISUAL LAYOUT\n{}\n", rule(), rule());

    for row in rows {
        let indent = " ".repeat((widest - row.len()) * ROW_INDENT);

        out.push_str(&indent);
        for _ in row {
            out.push_str("  ____    ");
        }
        out.push('\n');

        out.push_str(&indent);
        for hex in row {
            let _ = write!(out, " /{:4}\\   ", hex.terrain().short_code());
        }
        out.push('\n');

        out.push_str(&indent);
        for hex in row {
            let _ = write!(out, " | {:>2}:{} |   ", number_label(hex), hex.pips());
        }
        out.push('\n');

        out.push_str(&indent);
        for _ in row {
            out.push_str(" \\____/   ");
        }
        out.push_str("\n\n");
    }

    out
}

/// Row-by-row listing followed by statistics
pub fn list(board: &Board) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}\nBOARD LAYOUT - LIST VIEW\n{}", rule(), rule());

    for (i, row) in board.rows().iter().enumerate() {
        let _ = writeln!(out, "\nRow {}:", i + 1);
        for hex in row.iter() {
            let _ = writeln!(
                out,
                "  Pos {:2}: [{:10}] Number: {:>2} (Pips: {})",
                hex.position(),
                hex.terrain().name(),
                number_label(hex),
                hex.pips()
            );
        }
    }

    let _ = writeln!(out, "\n{}", rule());
    out.push_str(&statistics(&BoardStats::from_board(board)));
    out
}

/// Terrain counts, production per resource and constraint checks
pub fn statistics(stats: &BoardStats) -> String {
    let mut out = String::from("\nBoard Statistics:\n\nTerrain Distribution:\n");
    for (terrain, count) in &stats.terrain_counts {
        let _ = writeln!(out, "  {}: {}", terrain, count);
    }

    out.push_str("\nResource Pip Values (production probability):\n");
    for (terrain, pips) in &stats.resource_pips {
        let resource = terrain.resource().unwrap_or("-");
        let _ = writeln!(out, "  {} ({}): {} pips", terrain, resource, pips);
    }

    let _ = writeln!(out, "\nHigh-value hexes (6 & 8): {}", stats.high_value.len());
    for hex in &stats.high_value {
        let _ = writeln!(out, "  Position {:2}: {} - {}", hex.position(), hex.terrain(), number_label(hex));
    }

    if stats.adjacent_high.is_empty() {
        out.push_str("\nOK: No adjacent 6s or 8s\n");
    } else {
        let _ = writeln!(out, "\nWARNING: Adjacent 6/8s found: {:?}", stats.adjacent_high);
    }
    if stats.deserts_on_edge.is_empty() {
        out.push_str("OK: Desert is in interior positions\n");
    } else {
        let _ = writeln!(out, "WARNING: Desert is on the edge at {:?}", stats.deserts_on_edge);
    }

    out
}
