//! Terminal output utilities: ANSI formatting and render-plan printing.

use styleforge_advice::RenderPlan;

// ---------------------------------------------------------------------------
// ANSI Color/Style helpers
// ---------------------------------------------------------------------------

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Check if the terminal supports color output.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && (std::env::var("COLORTERM").is_ok()
            || std::env::var("TERM")
                .map(|t| t != "dumb")
                .unwrap_or(false))
}

/// Strip ANSI escape codes from a string.
pub fn strip_ansi(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm'
            for next in chars.by_ref() {
                if next == 'm' { break; }
            }
        } else {
            result.push(c);
        }
    }
    result
}

// ---------------------------------------------------------------------------
// Formatted notes
// ---------------------------------------------------------------------------

/// Print a formatted INFO note to stdout.
pub fn note_info(msg: &str) {
    if supports_color() {
        println!("{CYAN}{BOLD}ℹ{RESET} {msg}");
    } else {
        println!("INFO: {msg}");
    }
}

/// Print a formatted ERROR note.
pub fn note_error(msg: &str) {
    if supports_color() {
        eprintln!("{RED}{BOLD}✗{RESET} {msg}");
    } else {
        eprintln!("ERROR: {msg}");
    }
}

/// Print a formatted SUCCESS note.
pub fn note_success(msg: &str) {
    if supports_color() {
        println!("{GREEN}{BOLD}✓{RESET} {msg}");
    } else {
        println!("OK: {msg}");
    }
}

// ---------------------------------------------------------------------------
// Render-plan printing
// ---------------------------------------------------------------------------

/// Render a plan as terminal text: the recommendation blocks first, then the
/// shop list. Sections and items keep their plan order.
pub fn format_plan(plan: &RenderPlan) -> String {
    let color = supports_color();
    let heading = |text: &str| {
        if color {
            format!("{BOLD}{CYAN}{text}{RESET}\n")
        } else {
            format!("{text}\n")
        }
    };

    let mut out = String::new();

    if !plan.recommendation_blocks.is_empty() {
        out.push_str(&heading("Get Recommendations"));
        for block in &plan.recommendation_blocks {
            out.push_str(&format!("\n{}\n", block.label));
            for item in &block.items {
                out.push_str(&format!("  - {item}\n"));
            }
        }
    }

    if !plan.shop_cards.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&heading("Shop Your Style"));
        for card in &plan.shop_cards {
            out.push_str(&format!("  {} [{}]\n", card.item, card.cta));
        }
    }

    out
}
