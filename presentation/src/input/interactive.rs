//! Interactive answer collection for the terminal.
//!
//! Implements the multi-line, blank-line-terminated input convention:
//!
//! ```text
//! <question>
//! Your answer (finish with an empty line):
//! first line of the answer
//! second line
//! <blank line>
//! ```
//!
//! A blank (or whitespace-only) line ends the block; a blank first line
//! means the question was intentionally skipped and yields an empty answer.
//! Reads block the calling thread until the operator responds — there is no
//! timeout and no automatic abandonment.

use colored::Colorize;
use scope_application::ports::answer_input::{AnswerInputError, AnswerInputPort};
use scope_domain::{Answer, FollowUpQuestion, Query};
use std::io::{self, BufRead, Write};

/// Read lines until a blank line (or EOF) terminates the block.
///
/// Non-terminating lines are joined with newlines and the whole block is
/// trimmed of leading and trailing whitespace. Generic over the reader so
/// tests can script the operator.
pub fn read_multiline_block(reader: &mut impl BufRead) -> io::Result<String> {
    let mut lines: Vec<String> = Vec::new();
    loop {
        let mut line = String::new();
        let bytes = reader.read_line(&mut line)?;
        if bytes == 0 {
            // EOF ends the block like a blank line would
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            break;
        }
        lines.push(line.to_string());
    }
    Ok(lines.join("\n").trim().to_string())
}

/// Interactive answer input handler for the CLI.
///
/// Implements [`AnswerInputPort`] plus the single-line and query prompts
/// used by the session setup flow.
pub struct InteractiveAnswerInput;

impl InteractiveAnswerInput {
    pub fn new() -> Self {
        Self
    }

    /// Prompt for the research query, re-prompting until it is non-empty.
    pub fn prompt_query(&self) -> Result<Query, AnswerInputError> {
        loop {
            println!(
                "{}",
                "What would you like to research? (finish with an empty line)"
                    .cyan()
                    .bold()
            );
            let block = read_multiline_block(&mut io::stdin().lock())
                .map_err(|e| AnswerInputError::IoError(e.to_string()))?;

            match Query::try_new(block) {
                Some(query) => return Ok(query),
                None => {
                    println!("{}", "The query cannot be empty.".yellow());
                }
            }
        }
    }

    /// Prompt for a single line (breadth/depth input).
    pub fn prompt_line(&self, label: &str) -> Result<String, AnswerInputError> {
        print!("{} ", label.cyan());
        io::stdout()
            .flush()
            .map_err(|e| AnswerInputError::IoError(format!("Failed to flush stdout: {}", e)))?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(|e| AnswerInputError::IoError(format!("Failed to read input: {}", e)))?;

        Ok(input.trim().to_string())
    }
}

impl Default for InteractiveAnswerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerInputPort for InteractiveAnswerInput {
    fn collect_answer(&self, question: &FollowUpQuestion) -> Result<Answer, AnswerInputError> {
        println!();
        println!("{}", question.content().cyan().bold());
        println!("{}", "Your answer (finish with an empty line):".dimmed());

        let block = read_multiline_block(&mut io::stdin().lock())
            .map_err(|e| AnswerInputError::IoError(e.to_string()))?;

        Ok(Answer::new(block))
    }
}
