//! UI utilities for the client.

use std::io::Write;

use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;

/// Build the input prompt for the given name
pub fn prompt_for(name: Option<&str>) -> String {
    format!("{}> ", name.unwrap_or("you"))
}

/// Redisplay the prompt after receiving a message
pub fn redisplay_prompt(prompt: &str) {
    print!("{}", prompt);
    std::io::stdout().flush().ok();
}

/// Spawn a blocking thread that reads lines with rustyline
///
/// The thread outlives individual sessions so reconnects keep the same
/// history. The returned receiver yields `None` once the user pressed
/// Ctrl+C or Ctrl+D.
pub fn spawn_line_reader(prompt: String) -> mpsc::UnboundedReceiver<String> {
    let (input_tx, input_rx) = mpsc::unbounded_channel::<String>();

    std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                tracing::error!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str()).ok();
                    }
                    if input_tx.send(line).is_err() {
                        // Channel closed, exit thread
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    input_rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_for_named_user() {
        // テスト項目: 名前がある場合、プロンプトに名前が表示される
        // given (前提条件):
        let name = Some("alice");

        // when (操作):
        let prompt = prompt_for(name);

        // then (期待する結果):
        assert_eq!(prompt, "alice> ");
    }

    #[test]
    fn test_prompt_for_anonymous_user() {
        // テスト項目: 名前が無い場合、既定のプロンプトになる
        // given (前提条件):
        let name = None;

        // when (操作):
        let prompt = prompt_for(name);

        // then (期待する結果):
        assert_eq!(prompt, "you> ");
    }
}
