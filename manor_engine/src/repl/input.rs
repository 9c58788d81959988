//! Terminal input handling for the game loop.
//!
//! Lines come from a rustyline editor with history and verb completion when
//! stdin is a terminal, and from plain buffered stdin otherwise. Tests feed the
//! game through [`ScriptedInput`].

use std::collections::VecDeque;
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::command::VOCABULARY;

/// Outcome of reading a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Anything that can hand the game lines of player input.
pub trait InputSource {
    /// Show `prompt` (if the source is interactive) and read one line.
    ///
    /// # Errors
    /// - on an unrecoverable read failure
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent>;
}

const ROOM_TARGETS: &[&str] = &["living", "hallway", "bedroom", "kitchen"];

#[derive(Default)]
struct ManorHelper;

impl Helper for ManorHelper {}

impl Completer for ManorHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        Ok((start, completions(&prefix.to_lowercase())))
    }
}

impl Hinter for ManorHelper {
    type Hint = String;
}

impl Highlighter for ManorHelper {}

impl Validator for ManorHelper {}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_string())
}

/// Full-line completions for a lower-cased `prefix`.
fn completions(prefix: &str) -> Vec<Pair> {
    if prefix.is_empty() {
        return Vec::new();
    }
    if let Some(partial) = prefix.strip_prefix("go ") {
        let partial = partial.trim_start();
        return ROOM_TARGETS
            .iter()
            .filter(|room| room.starts_with(partial))
            .map(|room| Pair {
                display: (*room).to_string(),
                replacement: format!("go {room}"),
            })
            .collect();
    }
    VOCABULARY
        .iter()
        .filter(|term| term.starts_with(prefix))
        .map(|term| Pair {
            display: (*term).to_string(),
            replacement: (*term).to_string(),
        })
        .collect()
}

/// Player input from the real terminal.
///
/// Uses the line editor while it works; the first editor failure drops it for
/// good and the session carries on with plain stdin.
pub struct InputManager {
    editor: Option<Box<LineEditor>>,
    plain: PlainInput,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        let editor = if io::stdin().is_terminal() {
            LineEditor::open().map(Box::new)
        } else {
            info!("stdin is not a TTY; using plain input");
            None
        };
        Self {
            editor,
            plain: PlainInput::default(),
        }
    }
}

impl InputSource for InputManager {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        if let Some(editor) = self.editor.as_mut() {
            match editor.read_line(prompt) {
                Ok(event) => return Ok(event),
                Err(err) => {
                    warn!("line editor failed ({err}); switching to plain stdin");
                    self.editor = None;
                },
            }
        }
        self.plain.read_line(prompt)
    }
}

/// rustyline editor with completion and a history file.
struct LineEditor {
    editor: Editor<ManorHelper, DefaultHistory>,
    history: Option<PathBuf>,
}

impl LineEditor {
    fn open() -> Option<Self> {
        let mut editor = match Editor::<ManorHelper, DefaultHistory>::new() {
            Ok(editor) => editor,
            Err(err) => {
                warn!("line editor unavailable ({err}); using plain stdin");
                return None;
            },
        };
        editor.set_helper(Some(ManorHelper));

        let history = dirs::data_dir().map(|base| history_path(&base));
        if let Some(path) = history.as_deref() {
            if let Some(dir) = path.parent()
                && let Err(err) = fs::create_dir_all(dir)
            {
                warn!("no history directory at {}: {err}", dir.display());
            }
            // a first run has no history file yet
            if let Err(err) = editor.load_history(path) {
                debug!("history not loaded from {}: {err}", path.display());
            }
        }
        info!("using rustyline input");
        Some(Self { editor, history })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let line = match self.editor.readline(prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => return Ok(InputEvent::Interrupted),
            Err(ReadlineError::Eof) => return Ok(InputEvent::Eof),
            Err(ReadlineError::Io(err)) => return Err(err),
            Err(other) => return Err(io::Error::other(other)),
        };
        if !line.trim().is_empty() {
            let _ = self.editor.add_history_entry(line.as_str());
            if let Some(path) = self.history.as_deref()
                && let Err(err) = self.editor.save_history(path)
            {
                warn!("history not saved to {}: {err}", path.display());
            }
        }
        Ok(InputEvent::Line(line))
    }
}

fn history_path(base: &Path) -> PathBuf {
    base.join("manor_engine").join("history.txt")
}

/// Buffered stdin. Bytes that aren't UTF-8 are replaced, never rejected.
#[derive(Default)]
struct PlainInput {
    buffer: Vec<u8>,
}

impl PlainInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;
        read_lossy_line(&mut io::stdin().lock(), &mut self.buffer)
    }
}

/// Read up to the next newline, dropping the line ending.
fn read_lossy_line(reader: &mut impl BufRead, buffer: &mut Vec<u8>) -> io::Result<InputEvent> {
    buffer.clear();
    if reader.read_until(b'\n', buffer)? == 0 {
        return Ok(InputEvent::Eof);
    }
    let line = String::from_utf8_lossy(buffer);
    Ok(InputEvent::Line(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Replays a fixed list of lines, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<InputEvent> {
        Ok(self.lines.pop_front().map_or(InputEvent::Eof, InputEvent::Line))
    }
}
