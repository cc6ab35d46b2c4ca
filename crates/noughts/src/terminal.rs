//! Line-based terminal renderer.
//!
//! Reads one command per line and redraws the board from the session
//! snapshot after every move. The renderer never mutates engine state
//! except through `Session::apply_move` and `Session::play_computer_turn`.

use anyhow::Result;
use noughts_engine::{Cell, Position, Session, SessionView};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// What the player asked for at the end of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Continue {
    Again,
    Reset,
    Quit,
}

/// Renders a session to a text stream and reads moves from another.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    json: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a renderer over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            json: false,
        }
    }

    /// Also print the JSON snapshot after every redraw.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Consumes the renderer, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays matches until the player quits or input ends.
    #[instrument(skip_all)]
    pub fn run<G: Rng + ?Sized>(&mut self, session: &mut Session, rng: &mut G) -> Result<()> {
        loop {
            self.draw(&session.snapshot())?;
            if !self.play_match(session, rng)? {
                info!("Input closed mid-match");
                return Ok(());
            }

            if let Some(message) = session.result_message() {
                writeln!(self.output, "{message}")?;
            }
            self.score(&session.snapshot())?;

            match self.ask_continue()? {
                Continue::Again => session.new_match(),
                Continue::Reset => session.reset(),
                Continue::Quit => return Ok(()),
            }
        }
    }

    /// Runs one match to completion. Returns `false` if the player quit.
    fn play_match<G: Rng + ?Sized>(&mut self, session: &mut Session, rng: &mut G) -> Result<bool> {
        while !session.game().is_over() {
            if session.is_computer_turn() {
                let side = session.game().side_to_move();
                let index = session.play_computer_turn(rng)?;
                let name = &session.player(side).name;
                writeln!(self.output, "{name} plays {}", describe(index))?;
            } else {
                let side = session.game().side_to_move();
                let player = session.player(side);
                write!(
                    self.output,
                    "{} ({side}), choose a cell [{}] or q to quit: ",
                    player.name,
                    open_keys(session)
                )?;
                self.output.flush()?;

                let Some(line) = self.read_line()? else {
                    return Ok(false);
                };
                if matches!(line.as_str(), "q" | "quit" | "exit") {
                    return Ok(false);
                }
                let Some(position) = Position::parse_input(&line) else {
                    writeln!(self.output, "Unrecognised cell {line:?}")?;
                    continue;
                };
                if let Err(e) = session.apply_move(position.to_index()) {
                    debug!(error = %e, "Move rejected");
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            }
            self.draw(&session.snapshot())?;
        }
        Ok(true)
    }

    fn ask_continue(&mut self) -> Result<Continue> {
        loop {
            write!(self.output, "Play again? [y/n/reset]: ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(Continue::Quit);
            };
            match line.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(Continue::Again),
                "r" | "reset" => return Ok(Continue::Reset),
                "" | "n" | "no" | "q" | "quit" => return Ok(Continue::Quit),
                other => writeln!(self.output, "Unrecognised answer {other:?}")?,
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn draw(&mut self, view: &SessionView) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", board_text(view))?;
        if self.json {
            writeln!(self.output, "{}", serde_json::to_string(view)?)?;
        }
        Ok(())
    }

    fn score(&mut self, view: &SessionView) -> Result<()> {
        let [a, b] = &view.players;
        writeln!(
            self.output,
            "Score: {} {} - {} {} (draws: {})",
            a.name, a.wins, b.wins, b.name, view.draws
        )?;
        Ok(())
    }
}

/// Keypad numbers of the empty cells, e.g. "2 3 5".
fn open_keys(session: &Session) -> String {
    Position::valid_moves(session.game().board())
        .iter()
        .map(|pos| (pos.to_index() + 1).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe(index: usize) -> String {
    match Position::from_index(index) {
        Some(position) => format!("{} ({})", index + 1, position),
        None => index.to_string(),
    }
}

/// Draws the board; cells on the winning line are bracketed.
pub fn board_text(view: &SessionView) -> String {
    let rows: Vec<String> = view
        .cells
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let index = row * 3 + col;
                    let symbol = match cell {
                        Cell::Empty => (index + 1).to_string(),
                        Cell::Occupied(marker) => marker.to_string(),
                    };
                    if view.is_highlighted(index) {
                        format!("[{symbol}]")
                    } else {
                        format!(" {symbol} ")
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}
