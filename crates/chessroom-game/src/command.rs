//! Move instruction parsing.
//!
//! Purely syntactic: an instruction becomes a source/destination pair with
//! no look at the board or the turn.

use std::fmt;
use std::str::FromStr;

use chessroom_core::Square;

use crate::error::GameError;

/// Optional keyword in front of a spaced instruction (`move a2 a4`).
const MOVE_KEYWORD: &str = "move";

/// A parsed move instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveCommand {
    pub source: Square,
    pub dest: Square,
}

impl MoveCommand {
    pub const fn new(source: Square, dest: Square) -> MoveCommand {
        MoveCommand { source, dest }
    }
}

/// Parse a raw instruction into a [`MoveCommand`].
///
/// Accepts `a2a4`, `a2 a4` and `move a2 a4`; surrounding whitespace is
/// ignored. Anything else is [`GameError::MalformedCommand`].
pub fn parse_command(raw: &str) -> Result<MoveCommand, GameError> {
    let malformed = || GameError::MalformedCommand {
        input: raw.to_string(),
    };

    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let (source, dest) = match tokens.as_slice() {
        [MOVE_KEYWORD, source, dest] | [source, dest] => (*source, *dest),
        [compact] if compact.is_ascii() && compact.len() == 4 => compact.split_at(2),
        _ => return Err(malformed()),
    };

    let source = source.parse().map_err(|_| malformed())?;
    let dest = dest.parse().map_err(|_| malformed())?;
    Ok(MoveCommand { source, dest })
}

impl FromStr for MoveCommand {
    type Err = GameError;

    fn from_str(s: &str) -> Result<MoveCommand, GameError> {
        parse_command(s)
    }
}

/// Compact form, `a2a4`, as stored in move history.
impl fmt::Display for MoveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

#[cfg(test)]
mod tests {
    use chessroom_core::Square;

    use super::*;

    #[test]
    fn parse_compact() {
        assert_eq!(
            parse_command("a2a4").unwrap(),
            MoveCommand::new(Square::A2, Square::A4)
        );
    }

    #[test]
    fn parse_spaced_and_keyword() {
        let expected = MoveCommand::new(Square::B1, Square::C3);
        assert_eq!(parse_command("b1 c3").unwrap(), expected);
        assert_eq!(parse_command("move b1 c3").unwrap(), expected);
        assert_eq!(parse_command("  move   b1  c3 \n").unwrap(), expected);
    }

    #[test]
    fn same_square_is_syntactically_fine() {
        assert_eq!(
            parse_command("e2e2").unwrap(),
            MoveCommand::new(Square::E2, Square::E2)
        );
    }

    #[test]
    fn malformed_inputs() {
        for bad in [
            "", "a2", "a2a", "a2a4a", "a2 a4 a6", "i2a4", "a9a4", "A2A4", "go a2 a4", "move a2",
            "move a2a4", "a2-a4", "é2a4",
        ] {
            assert!(
                matches!(parse_command(bad), Err(GameError::MalformedCommand { .. })),
                "{bad:?} should be malformed"
            );
        }
    }

    #[test]
    fn malformed_keeps_input() {
        assert_eq!(
            parse_command("xyz"),
            Err(GameError::MalformedCommand {
                input: "xyz".to_string()
            })
        );
    }

    #[test]
    fn display_is_compact() {
        let cmd: MoveCommand = "move g8 f6".parse().unwrap();
        assert_eq!(cmd.to_string(), "g8f6");
    }
}
