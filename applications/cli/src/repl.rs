//! Read-eval-print loop over a line-oriented input stream

use crate::output::Console;
use reel_core::RandomSource;
use reel_player::{Command, ParseError, SelectionPrompt, VideoPlayer, COMMANDS};
use std::io::{self, BufRead, Write};

pub const GREETING: &str = "Welcome to Reel. Type HELP for a list of available commands.";
pub const GOODBYE: &str = "Goodbye!";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Help,
    Exit,
    Run(Command),
}

/// Parse a non-blank input line
pub fn parse_line(line: &str) -> Result<Input, ParseError> {
    let word = line.split_whitespace().next().unwrap_or_default();
    if word.eq_ignore_ascii_case("HELP") {
        Ok(Input::Help)
    } else if word.eq_ignore_ascii_case("EXIT") {
        Ok(Input::Exit)
    } else {
        Command::parse(line).map(Input::Run)
    }
}

/// Lines printed for HELP
pub fn help_lines() -> Vec<String> {
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(
        COMMANDS
            .iter()
            .map(|info| format!("    {} - {}", info.usage, info.summary)),
    );
    lines.push("    HELP - Displays help.".to_string());
    lines.push("    EXIT - Terminates the program execution.".to_string());
    lines
}

/// Input stream shared by the command loop and the search follow-up
pub struct LineReader<I> {
    input: I,
}

impl<I: BufRead> LineReader<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    /// Next line without its terminator, `None` at end of input
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

impl<I: BufRead> SelectionPrompt for LineReader<I> {
    fn read_selection(&mut self) -> Option<String> {
        match self.next_line() {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read selection, treating as no");
                None
            }
        }
    }
}

/// Run the session until EXIT or end of input
pub fn run<R, I, W>(
    player: &mut VideoPlayer<R>,
    input: I,
    console: &mut Console<W>,
    prompt: &str,
) -> io::Result<()>
where
    R: RandomSource,
    I: BufRead,
    W: Write,
{
    let mut lines = LineReader::new(input);
    console.say(GREETING);

    loop {
        console.prompt(prompt);
        let Some(line) = lines.next_line()? else {
            tracing::debug!("end of input");
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(Input::Exit) => break,
            Ok(Input::Help) => console.report(true, &help_lines()),
            Ok(Input::Run(command)) => player.execute(&command, console, &mut lines),
            Err(err) => {
                tracing::debug!(input = line, error = %err, "unparsed input");
                console.report(false, &[err.to_string()]);
            }
        }
        console.finish()?;
    }

    console.say(GOODBYE);
    console.finish()
}
