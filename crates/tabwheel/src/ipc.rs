use crate::tab::Route;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SOCKET_PATH: &str = "/tmp/tarikh.sock";

/// One line of the shell's control protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlCommand {
    Show,
    Hide,
    /// External navigation, e.g. a deep link. Never echoed back as a navigation request.
    Goto(Route),
    /// Same as pressing the tab.
    Select(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("'{0}' requires an argument")]
    MissingArgument(&'static str),
    #[error("Invalid tab index '{0}'")]
    InvalidIndex(String),
}

impl FromStr for ControlCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (line, None),
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(ParseCommandError::Empty),
            "show" => Ok(Self::Show),
            "hide" => Ok(Self::Hide),
            "goto" => arg
                .map(|route| Self::Goto(Route::new(route)))
                .ok_or(ParseCommandError::MissingArgument("goto")),
            "select" => {
                let arg = arg.ok_or(ParseCommandError::MissingArgument("select"))?;
                arg.parse()
                    .map(Self::Select)
                    .map_err(|_| ParseCommandError::InvalidIndex(arg.to_string()))
            }
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Show => write!(f, "show"),
            Self::Hide => write!(f, "hide"),
            Self::Goto(route) => write!(f, "goto {}", route),
            Self::Select(index) => write!(f, "select {}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        let cases = vec![
            ("show", ControlCommand::Show),
            ("  HIDE ", ControlCommand::Hide),
            ("goto /map", ControlCommand::Goto(Route::new("/map"))),
            ("goto   /(tabs)/topics ", ControlCommand::Goto(Route::new("/(tabs)/topics"))),
            ("select 4", ControlCommand::Select(4)),
        ];

        for (line, expected) in cases {
            assert_eq!(line.parse::<ControlCommand>(), Ok(expected), "{line}");
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<ControlCommand>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "goto".parse::<ControlCommand>(),
            Err(ParseCommandError::MissingArgument("goto"))
        );
        assert_eq!(
            "select -1".parse::<ControlCommand>(),
            Err(ParseCommandError::InvalidIndex("-1".to_string()))
        );
        assert_eq!(
            "spin".parse::<ControlCommand>(),
            Err(ParseCommandError::Unknown("spin".to_string()))
        );
    }

    #[test]
    fn test_display_matches_wire_format() {
        let cmd = ControlCommand::Goto(Route::new("/ai-chat"));
        assert_eq!(cmd.to_string(), "goto /ai-chat");
        assert_eq!(cmd.to_string().parse::<ControlCommand>(), Ok(cmd));
    }
}
