//! Interactive key loop.
//!
//! # Responsibility
//! - Read lines with a line editor and feed their keys to one calculator.
//! - Render the display, and the history panel whenever it changes.
//!
//! Input lines are key sequences: every character is one key press and
//! `<Name>` is a named key (`<Enter>`, `<Backspace>`, `<Escape>`). Lines
//! starting with `:` are commands.

use anyhow::{anyhow, Result};
use calcpad_core::db::open_db;
use calcpad_core::{Calculator, InputEvent, SqlitePreferenceRepository, Theme, ThemeService};
use log::info;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::{Path, PathBuf};

const PROMPT: &str = "calc> ";
const HELP: &str = "keys: 0-9 . + - * / % = <Enter> <Backspace> <Escape>\n\
commands: :history :recall N :clear-history :theme [toggle] :help :quit";

/// What the loop should do after one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

pub fn start_repl(db_path: PathBuf) -> Result<()> {
    let mut editor =
        DefaultEditor::new().map_err(|err| anyhow!("failed to create line editor: {err}"))?;
    let mut calculator = Calculator::new();
    info!("event=repl_start module=cli status=ok");
    println!("{HELP}");
    println!("{}", render_display(&calculator));

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                match handle_line(&mut calculator, &line, &db_path) {
                    Outcome::Continue(output) => {
                        if !output.is_empty() {
                            println!("{output}");
                        }
                    }
                    Outcome::Quit => break,
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(anyhow!("failed to read input line: {err}")),
        }
    }

    info!("event=repl_stop module=cli status=ok");
    Ok(())
}

/// Applies one input line and returns the text to print.
pub fn handle_line(calculator: &mut Calculator, line: &str, db_path: &Path) -> Outcome {
    let trimmed = line.trim();
    if let Some(command) = trimmed.strip_prefix(':') {
        return handle_command(calculator, command, db_path);
    }
    if trimmed.is_empty() {
        return Outcome::Continue(String::new());
    }

    let history_len = calculator.history().len();
    for key in split_keys(trimmed) {
        if let Some(event) = InputEvent::from_key(&key) {
            calculator.apply(event);
        }
    }

    let mut output = render_display(calculator);
    if calculator.history().len() != history_len {
        output.push('\n');
        output.push_str(&render_history(calculator));
    }
    Outcome::Continue(output)
}

fn handle_command(calculator: &mut Calculator, command: &str, db_path: &Path) -> Outcome {
    let mut parts = command.split_whitespace();
    let output = match (parts.next(), parts.next()) {
        (Some("quit" | "q"), _) => return Outcome::Quit,
        (Some("help"), _) => HELP.to_string(),
        (Some("history"), _) => render_history(calculator),
        (Some("clear-history"), _) => {
            calculator.clear_history();
            render_history(calculator)
        }
        (Some("recall"), Some(index)) => match index.parse::<usize>() {
            Ok(index) => match calculator.recall(index) {
                Some(_) => render_display(calculator),
                None => format!("no history entry at {index}"),
            },
            Err(_) => format!("invalid history index `{index}`"),
        },
        (Some("theme"), None) => theme_line(db_path, |service| service.current_theme()),
        (Some("theme"), Some("toggle")) => theme_line(db_path, |service| service.toggle_theme()),
        _ => format!("unknown command `:{command}`\n{HELP}"),
    };
    Outcome::Continue(output)
}

/// Splits a line into key names; whitespace separates nothing and is skipped.
pub fn split_keys(line: &str) -> Vec<String> {
    let mut keys = Vec::new();
    let mut rest = line;
    while let Some(ch) = rest.chars().next() {
        if ch == '<' {
            if let Some(end) = rest.find('>') {
                keys.push(rest[1..end].to_string());
                rest = &rest[end + 1..];
                continue;
            }
        }
        if !ch.is_whitespace() {
            keys.push(ch.to_string());
        }
        rest = &rest[ch.len_utf8()..];
    }
    keys
}

pub fn render_display(calculator: &Calculator) -> String {
    let display = calculator.display();
    format!("{:>24}\n{:>24}", display.expression, display.current)
}

pub fn render_history(calculator: &Calculator) -> String {
    let history = calculator.history();
    if history.is_empty() {
        return "No history yet".to_string();
    }
    history
        .entries()
        .enumerate()
        .map(|(index, entry)| format!("[{index}] {}\n    = {}", entry.expression(), entry.result()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn theme_line(
    db_path: &Path,
    f: impl FnOnce(&ThemeService<SqlitePreferenceRepository<'_>>) -> calcpad_core::StoreResult<Theme>,
) -> String {
    let conn = match open_db(db_path) {
        Ok(conn) => conn,
        Err(err) => return format!("preference DB open failed: {err}"),
    };
    let service = ThemeService::new(SqlitePreferenceRepository::new(&conn));
    match f(&service) {
        Ok(theme) => format!("theme: {}", theme.as_str()),
        Err(err) => format!("theme preference failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{handle_line, render_history, split_keys, Outcome};
    use calcpad_core::Calculator;
    use std::path::Path;

    fn run(calculator: &mut Calculator, line: &str) -> String {
        match handle_line(calculator, line, Path::new("/nonexistent/dir/prefs.sqlite3")) {
            Outcome::Continue(output) => output,
            Outcome::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn split_keys_reads_chars_and_named_keys() {
        assert_eq!(
            split_keys("12 + 3<Enter>"),
            vec!["1", "2", "+", "3", "Enter"]
        );
        assert_eq!(split_keys("<Backspace><Escape>"), vec!["Backspace", "Escape"]);
        assert_eq!(split_keys("5<"), vec!["5", "<"]);
    }

    #[test]
    fn key_line_prints_history_after_calculation() {
        let mut calculator = Calculator::new();
        let output = run(&mut calculator, "2+3*4=");

        assert!(output.contains("20"));
        assert!(output.contains("[0] 5 × 4"));
        assert!(output.contains("[1] 2 + 3"));
    }

    #[test]
    fn recall_command_loads_result() {
        let mut calculator = Calculator::new();
        run(&mut calculator, "8/2=");
        run(&mut calculator, "<Escape>");

        run(&mut calculator, ":recall 0");
        assert_eq!(calculator.current(), "4");
        assert!(run(&mut calculator, ":recall 9").contains("no history entry"));
        assert!(run(&mut calculator, ":recall x").contains("invalid history index"));
    }

    #[test]
    fn clear_history_command_shows_placeholder() {
        let mut calculator = Calculator::new();
        run(&mut calculator, "1+1=");
        assert_eq!(run(&mut calculator, ":clear-history"), "No history yet");
        assert_eq!(render_history(&calculator), "No history yet");
    }

    #[test]
    fn quit_command_stops_loop() {
        let mut calculator = Calculator::new();
        let outcome = handle_line(&mut calculator, ":quit", Path::new("unused"));
        assert_eq!(outcome, Outcome::Quit);
    }

    #[test]
    fn theme_command_reports_unusable_database() {
        let mut calculator = Calculator::new();
        assert!(run(&mut calculator, ":theme").contains("preference DB open failed"));
    }

    #[test]
    fn theme_toggle_persists_across_calls() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("prefs.sqlite3");
        let mut calculator = Calculator::new();

        let line = |calculator: &mut Calculator, text: &str| match handle_line(calculator, text, &path) {
            Outcome::Continue(output) => output,
            Outcome::Quit => panic!("unexpected quit"),
        };
        assert_eq!(line(&mut calculator, ":theme"), "theme: light");
        assert_eq!(line(&mut calculator, ":theme toggle"), "theme: dark");
        assert_eq!(line(&mut calculator, ":theme"), "theme: dark");
    }
}
