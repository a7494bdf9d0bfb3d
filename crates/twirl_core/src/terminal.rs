//! Terminal primitives consumed by the spinner: cursor control sequences and
//! color capability probing.

/// Cursor control sequences.
pub mod cursor {
    const ESC: &str = "\x1b";

    pub fn hide() -> &'static str {
        "\x1b[?25l"
    }

    pub fn show() -> &'static str {
        "\x1b[?25h"
    }

    /// `ESC[<n>D`. Empty for `n == 0`, since terminals treat a zero count as one.
    pub fn move_back(columns: usize) -> String {
        if columns == 0 {
            return String::new();
        }
        format!("{ESC}[{columns}D")
    }
}

/// Color capability queries, owned by whatever sits in front of the terminal.
pub trait TerminalProbe {
    fn supports_color(&self) -> bool;
    fn supports_256_color(&self) -> bool;
}

/// Probe for the process's stdout, backed by `console`'s color detection
/// (honors `NO_COLOR`, `CLICOLOR_FORCE` and tty detection) plus `TERM`/`COLORTERM`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProbe;

impl TerminalProbe for ConsoleProbe {
    fn supports_color(&self) -> bool {
        console::colors_enabled()
    }

    fn supports_256_color(&self) -> bool {
        if !self.supports_color() {
            return false;
        }
        let colorterm = std::env::var("COLORTERM").unwrap_or_default();
        let term = std::env::var("TERM").unwrap_or_default();
        term_supports_256(&term, &colorterm)
    }
}

fn term_supports_256(term: &str, colorterm: &str) -> bool {
    let colorterm = colorterm.to_lowercase();
    colorterm == "truecolor" || colorterm == "24bit" || term.contains("256color")
}

/// Fixed answers, for callers that already know the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedProbe {
    pub color: bool,
    pub color256: bool,
}

impl TerminalProbe for FixedProbe {
    fn supports_color(&self) -> bool {
        self.color
    }

    fn supports_256_color(&self) -> bool {
        self.color && self.color256
    }
}
