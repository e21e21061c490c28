/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, warn};
use std::io::BufRead;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Call, Direction, Floor};

pub const HELP: &str = "\
commands:
  <floor> | car <floor>   press the in-car button for <floor>
  up <floor>              press the UP hall button on <floor>
  down <floor>            press the DOWN hall button on <floor>
  help                    show this text
  quit                    stop the elevator";

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Press(Call),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("unknown command '{0}', type 'help' for a list")]
    UnknownCommand(String),

    #[error("'{0}' needs a floor number")]
    MissingFloor(String),

    #[error("'{0}' is not a floor number")]
    InvalidFloor(String),
}

/***************************************/
/*             Public API              */
/***************************************/

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ShellError> {
    let mut words = line.split_whitespace();
    let first = match words.next() {
        Some(word) => word.to_lowercase(),
        None => return Ok(None),
    };

    let command = match first.as_str() {
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "car" => Command::Press(Call::Cab {
            floor: parse_floor(&first, words.next())?,
        }),
        "up" => Command::Press(Call::Hall {
            floor: parse_floor(&first, words.next())?,
            direction: Direction::Up,
        }),
        "down" => Command::Press(Call::Hall {
            floor: parse_floor(&first, words.next())?,
            direction: Direction::Down,
        }),
        other => match other.parse::<Floor>() {
            Ok(floor) => Command::Press(Call::Cab { floor }),
            Err(_) => return Err(ShellError::UnknownCommand(other.to_string())),
        },
    };

    Ok(Some(command))
}

/**
 * Reads commands from `reader` until `quit` or end of input.
 *
 * Button presses are forwarded on `call_tx`. `quit` sends on `terminate_tx`.
 * End of input just returns, which drops `call_tx` and lets the elevator finish
 * what is already queued. `terminate_tx` is only borrowed so the caller decides
 * when it goes away.
 */
pub fn run_input<R: BufRead>(reader: R, call_tx: cbc::Sender<Call>, terminate_tx: &cbc::Sender<()>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Error reading input: {}", e);
                break;
            }
        };

        match parse_command(&line) {
            Ok(Some(Command::Press(call))) => {
                if call_tx.send(call).is_err() {
                    debug!("Elevator stopped, dropping {:?}", call);
                    return;
                }
            }
            Ok(Some(Command::Help)) => println!("{}", HELP),
            Ok(Some(Command::Quit)) => {
                let _ = terminate_tx.send(());
                return;
            }
            Ok(None) => {}
            Err(e) => eprintln!("{}", e),
        }
    }
}

fn parse_floor(command: &str, word: Option<&str>) -> Result<Floor, ShellError> {
    let word = word.ok_or_else(|| ShellError::MissingFloor(command.to_string()))?;
    word.parse::<Floor>()
        .map_err(|_| ShellError::InvalidFloor(word.to_string()))
}
