//! Companion controller commands.
//!
//! Text commands from an external controller, parsed case-insensitively.
//! The transport is not part of this crate.

use std::fmt;
use std::str::FromStr;

use crate::models::constants::GALAXY_SECTORS;
use crate::models::errors::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CompanionCommand {
    Speed(u8),
    Fire,
    Shields,
    Fore,
    Aft,
    /// Warp to a 0-based sector index.
    Grid(usize),
    Abort,
    Attack,
    Tac,
}

impl FromStr for CompanionCommand {
    type Err = GameError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let upper = raw.trim().to_uppercase();
        let mut parts = upper.split_whitespace();
        let verb = parts.next().unwrap_or("");
        let arg = parts.next();

        if parts.next().is_some() {
            return Err(GameError::ParseError(format!("unrecognized command: {}", raw.trim())));
        }

        match (verb, arg) {
            ("SPEED", Some(value)) => {
                let speed = single_digit(value)
                    .ok_or_else(|| GameError::ParseError(format!("bad speed: {}", value)))?;
                Ok(CompanionCommand::Speed(speed))
            }
            ("GRID", Some(value)) => {
                if !value.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(GameError::ParseError(format!("bad sector: {}", value)));
                }
                let sector: usize = value.parse()?;
                if sector >= GALAXY_SECTORS {
                    return Err(GameError::InvalidInput(format!("sector out of range: {}", sector)));
                }
                Ok(CompanionCommand::Grid(sector))
            }
            ("FIRE", None) => Ok(CompanionCommand::Fire),
            ("SHIELDS", None) => Ok(CompanionCommand::Shields),
            ("FORE", None) => Ok(CompanionCommand::Fore),
            ("AFT", None) => Ok(CompanionCommand::Aft),
            ("ABORT", None) => Ok(CompanionCommand::Abort),
            ("ATTACK", None) => Ok(CompanionCommand::Attack),
            ("TAC", None) => Ok(CompanionCommand::Tac),
            _ => Err(GameError::ParseError(format!("unrecognized command: {}", raw.trim()))),
        }
    }
}

fn single_digit(value: &str) -> Option<u8> {
    match value.as_bytes() {
        [d] if d.is_ascii_digit() => Some(d - b'0'),
        _ => None,
    }
}

impl fmt::Display for CompanionCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CompanionCommand::Speed(v) => write!(f, "Speed {}", v),
            CompanionCommand::Grid(s) => write!(f, "GRID {}", s),
            CompanionCommand::Fire => write!(f, "FIRE"),
            CompanionCommand::Shields => write!(f, "SHIELDS"),
            CompanionCommand::Fore => write!(f, "FORE"),
            CompanionCommand::Aft => write!(f, "AFT"),
            CompanionCommand::Abort => write!(f, "ABORT"),
            CompanionCommand::Attack => write!(f, "ATTACK"),
            CompanionCommand::Tac => write!(f, "TAC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_speed() {
        assert_eq!("Speed 7".parse::<CompanionCommand>().unwrap(), CompanionCommand::Speed(7));
        assert_eq!("  speed   0 ".parse::<CompanionCommand>().unwrap(), CompanionCommand::Speed(0));
    }

    #[test]
    fn rejects_multi_digit_speed() {
        assert!("SPEED 10".parse::<CompanionCommand>().is_err());
        assert!("SPEED".parse::<CompanionCommand>().is_err());
    }

    #[test]
    fn parses_grid_in_range() {
        assert_eq!("grid 42".parse::<CompanionCommand>().unwrap(), CompanionCommand::Grid(42));
        assert_eq!("GRID 127".parse::<CompanionCommand>().unwrap(), CompanionCommand::Grid(127));
        assert!("GRID 128".parse::<CompanionCommand>().is_err());
        assert!("GRID -1".parse::<CompanionCommand>().is_err());
    }

    #[test]
    fn parses_keywords() {
        let cases = [
            ("fire", CompanionCommand::Fire),
            ("Shields", CompanionCommand::Shields),
            ("FORE", CompanionCommand::Fore),
            ("aft", CompanionCommand::Aft),
            ("ABORT", CompanionCommand::Abort),
            ("attack", CompanionCommand::Attack),
            ("tac", CompanionCommand::Tac),
        ];
        for (text, expected) in cases {
            assert_eq!(text.parse::<CompanionCommand>().unwrap(), expected, "{}", text);
        }
    }

    #[test]
    fn unknown_text_is_error() {
        assert!(matches!("HYPERDRIVE".parse::<CompanionCommand>(), Err(GameError::ParseError(_))));
        assert!("FIRE NOW".parse::<CompanionCommand>().is_err());
        assert!("".parse::<CompanionCommand>().is_err());
    }

    #[test]
    fn display_matches_wire_text() {
        assert_eq!(CompanionCommand::Speed(3).to_string(), "Speed 3");
        assert_eq!(CompanionCommand::Grid(9).to_string(), "GRID 9");
        let cmd: CompanionCommand = CompanionCommand::Tac.to_string().parse().unwrap();
        assert_eq!(cmd, CompanionCommand::Tac);
    }
}
