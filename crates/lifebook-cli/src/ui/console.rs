use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};

/// Console output with color when stdout is a terminal.
pub struct Console {
    colored: bool,
    interactive: bool,
}

impl Console {
    pub fn new() -> Self {
        Self {
            colored: std::io::stdout().is_terminal(),
            interactive: std::io::stdin().is_terminal(),
        }
    }

    pub fn success(&self, message: &str) {
        if self.colored {
            println!("{}", message.green());
        } else {
            println!("{}", message);
        }
    }

    pub fn warn(&self, message: &str) {
        if self.colored {
            eprintln!("{}", message.yellow());
        } else {
            eprintln!("{}", message);
        }
    }

    pub fn line(&self, message: &str) {
        println!("{}", message);
    }

    pub fn dim(&self, message: &str) {
        if self.colored {
            println!("{}", message.dimmed());
        } else {
            println!("{}", message);
        }
    }

    /// Present a yes/no decision. Returns `None` when no interactive
    /// confirmation surface is available (stdin is not a terminal), so
    /// callers can fall back to proceeding directly.
    pub fn confirm(&self, prompt: &str) -> Option<bool> {
        if !self.interactive {
            return None;
        }
        print!("{} [y/N] ", prompt);
        std::io::stdout().flush().ok()?;

        let mut answer = String::new();
        std::io::stdin().lock().read_line(&mut answer).ok()?;
        Some(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
