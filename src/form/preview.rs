// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Form values preview.

use console::{measure_text_width, style, Term};

use super::state::{Field, FormState};

const BOX_WIDTH: usize = 62;

/// Preview box of the values about to be submitted.
pub struct SignupPreview<'a> {
    state: &'a FormState,
}

impl<'a> SignupPreview<'a> {
    /// Create a new preview for a form state.
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }

    /// Print the preview to stderr.
    pub fn print(&self) {
        let term = Term::stderr();
        let _ = self.render(&term);
    }

    /// Render the preview to a terminal.
    fn render(&self, term: &Term) -> std::io::Result<()> {
        term.write_line(&format!(
            "{}",
            style("┌─ Signup Preview ─────────────────────────────────────────────┐").dim()
        ))?;

        for field in Field::all() {
            let line = self.format_line(*field);
            term.write_line(&format!(
                "{} {}{}",
                style("│").dim(),
                line,
                self.padding(measure_text_width(&line))
            ))?;
        }

        term.write_line(&format!(
            "{}",
            style("└──────────────────────────────────────────────────────────────┘").dim()
        ))?;

        Ok(())
    }

    /// Format one labelled value; secrets are masked.
    fn format_line(&self, field: Field) -> String {
        let value = if field.is_flag() {
            if self.state.flag(field) {
                style("accepted").green().to_string()
            } else {
                style("not accepted").red().to_string()
            }
        } else if field.is_secret() {
            if self.state.text(field).is_empty() {
                String::new()
            } else {
                "******".to_string()
            }
        } else {
            self.state.text(field).to_string()
        };

        format!("{:18} {}", style(field.label()).cyan(), value)
    }

    /// Create padding to align the right border.
    fn padding(&self, content_len: usize) -> String {
        let padding_needed = BOX_WIDTH.saturating_sub(content_len + 2);
        format!("{}{}", " ".repeat(padding_needed), style("│").dim())
    }
}
