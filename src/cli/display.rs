use crate::interpreter::RejectedEdit;
use crate::models::FileToEdit;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use similar::{ChangeTag, TextDiff};
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Manages CLI display and output formatting for the interactive session.
pub struct CliDisplayManager {
    spinner: Option<ProgressBar>,
}

impl CliDisplayManager {
    pub fn new() -> Self {
        CliDisplayManager { spinner: None }
    }

    pub fn print_header(&self) {
        println!("\n{}", "╭──────────────────────────╮".bright_magenta());
        println!("{}", "│  🔧 Tinker v0.1.0        │".bright_magenta().bold());
        println!("{}\n", "╰──────────────────────────╯".bright_magenta());
        println!(
            "To include a file in the conversation, use '{}'.",
            "/add path/to/file".bright_magenta().bold()
        );
        println!(
            "Type '{}' or '{}' to end.\n",
            "exit".bright_red().bold(),
            "quit".bright_red().bold()
        );
    }

    /// Prompts and reads one line of user input. Returns None on end-of-input.
    pub fn read_user_input(&self) -> io::Result<Option<String>> {
        print!("{} ", "You>".bright_green().bold());
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn print_assistant_label(&self) {
        print!("\n{} ", "Assistant>".bright_blue().bold());
        let _ = io::stdout().flush();
    }

    /// Echoes one streamed fragment as it arrives.
    pub fn print_stream_chunk(&self, chunk: &str) {
        print!("{}", chunk.dimmed());
        let _ = io::stdout().flush();
    }

    pub fn end_stream_line(&self) {
        println!();
    }

    pub fn start_spinner(&mut self) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template(&format!(
                "   {} {{spinner}} {}",
                "→".bright_white(),
                "Waiting for DeepSeek response".italic().bright_white()
            ))
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    pub fn print_file_added(&self, path: &str) {
        println!(
            "{} Added file '{}' to conversation.\n",
            "✓".green(),
            path.cyan()
        );
    }

    pub fn print_add_failed(&self, path: &str, error: &str) {
        println!(
            "{} Could not add file '{}': {}\n",
            "✗".red(),
            path.cyan(),
            error
        );
    }

    pub fn print_file_created(&self, path: &str) {
        println!("{} Created file '{}'", "✓".green(), path.cyan());
    }

    pub fn print_edit_applied(&self, path: &str) {
        println!("{} Applied edit to '{}'", "✓".green(), path.cyan());
    }

    pub fn print_snippet_missing(&self, edit: &FileToEdit, file_content: &str) {
        println!(
            "{} Original snippet not found in '{}'. No changes made.",
            "⚠".yellow(),
            edit.path.cyan()
        );
        println!("{}", "  Expected snippet:".yellow());
        for line in edit.original_snippet.lines() {
            println!("    {}", line.red());
        }
        println!("{}", "  Actual file content:".yellow());
        for line in file_content.lines() {
            println!("    {}", line.dimmed());
        }
    }

    pub fn print_file_missing(&self, path: &str) {
        println!(
            "{} File not found for editing: '{}'",
            "✗".red(),
            path.cyan()
        );
    }

    pub fn print_rejected_edit(&self, rejected: &RejectedEdit) {
        println!(
            "{} Skipped edit for '{}': {}",
            "⚠".yellow(),
            rejected.path.cyan(),
            rejected.reason
        );
    }

    /// Shows every proposed edit as a unified diff of the two snippets.
    pub fn print_edit_preview(&self, edits: &[FileToEdit]) {
        println!("\n{}", "Proposed Edits".bright_magenta().bold());
        for edit in edits {
            println!("{}", "──────────────".bright_magenta());
            println!("{}", edit.path.cyan().bold());
            let diff = TextDiff::from_lines(&edit.original_snippet, &edit.new_snippet);
            for change in diff.iter_all_changes() {
                let line = change.value().trim_end_matches('\n');
                match change.tag() {
                    ChangeTag::Delete => println!("{}", format!("- {}", line).red()),
                    ChangeTag::Insert => println!("{}", format!("+ {}", line).green()),
                    ChangeTag::Equal => println!("{}", format!("  {}", line).dimmed()),
                }
            }
        }
        println!("{}", "──────────────".bright_magenta());
    }

    /// One y/n gate covering the whole batch of edits.
    pub fn prompt_confirm_edits(&self) -> io::Result<bool> {
        print!(
            "\nDo you want to apply these changes? ({}/{}): ",
            "y".green(),
            "n".red()
        );
        io::stdout().flush()?;
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer)? == 0 {
            return Ok(false);
        }
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    pub fn print_edits_skipped(&self) {
        println!("{} Skipped applying edits.", "ℹ".yellow());
    }

    pub fn print_turn_error(&self, error: &str) {
        println!("{} {}", "✗".red(), error.red());
    }

    pub fn print_goodbye(&self) {
        println!("{}", "Session finished.".blue());
    }
}

impl Default for CliDisplayManager {
    fn default() -> Self {
        Self::new()
    }
}
