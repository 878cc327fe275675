//! Editor commands.
//!
//! Every action a palette, toolbar, or property panel can trigger, plus a
//! one-line text form so sessions can be scripted:
//!
//! ```text
//! add chair            # at the middle of the view
//! add table 96 64      # at a world position
//! select table_3f2a... # or `select none`
//! move chair_... 128 0
//! rotate               # one rotation step
//! rotate -45           # degrees
//! enlarge | shrink | scale 1.5
//! delete | undo | redo | clear
//! save [path] | load path | show
//! zoom-in | zoom-out | reset-view
//! ```

use crate::model::{ComponentType, UnknownComponentType};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// A user-level editor action.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignerCommand {
    /// Place a new entity, at a world position or at the view centre.
    Add {
        kind: ComponentType,
        at: Option<(f64, f64)>,
    },
    /// Select an entity by id, or clear the selection.
    Select(Option<String>),
    /// Move an entity to a world position and commit, like a finished drag.
    Move { id: String, x: f64, y: f64 },
    /// Rotate the selection by degrees, or by the configured step.
    Rotate(Option<f64>),
    /// Scale the selection up by the configured step.
    Enlarge,
    /// Scale the selection down by the configured step.
    Shrink,
    /// Multiply the selection's scale by a factor.
    Scale(f64),
    Delete,
    Undo,
    Redo,
    /// Write the layout to a file, or to the current file when omitted.
    Save(Option<PathBuf>),
    Load(PathBuf),
    Clear,
    /// Produce the committed layout as text.
    Show,
    ZoomIn,
    ZoomOut,
    ResetView,
}

/// Failure to parse a command line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error(transparent)]
    UnknownType(#[from] UnknownComponentType),
}

fn number(token: &str) -> Result<f64, CommandParseError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CommandParseError::InvalidNumber(token.to_string()))
}

fn required<'a>(
    token: Option<&'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandParseError> {
    token.ok_or(CommandParseError::MissingArgument { command, argument })
}

impl FromStr for DesignerCommand {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().ok_or(CommandParseError::Empty)?;

        let command = match name.to_ascii_lowercase().as_str() {
            "add" => {
                let kind = required(tokens.next(), "add", "a component type")?
                    .parse::<ComponentType>()?;
                let at = match tokens.next() {
                    Some(x) => {
                        let y = required(tokens.next(), "add", "both x and y")?;
                        Some((number(x)?, number(y)?))
                    }
                    None => None,
                };
                DesignerCommand::Add { kind, at }
            }
            "select" => match required(tokens.next(), "select", "an id or 'none'")? {
                "none" => DesignerCommand::Select(None),
                id => DesignerCommand::Select(Some(id.to_string())),
            },
            "move" => {
                let id = required(tokens.next(), "move", "an id")?.to_string();
                let x = number(required(tokens.next(), "move", "x and y")?)?;
                let y = number(required(tokens.next(), "move", "x and y")?)?;
                DesignerCommand::Move { id, x, y }
            }
            "rotate" => DesignerCommand::Rotate(tokens.next().map(number).transpose()?),
            "enlarge" => DesignerCommand::Enlarge,
            "shrink" => DesignerCommand::Shrink,
            "scale" => DesignerCommand::Scale(number(required(
                tokens.next(),
                "scale",
                "a factor",
            )?)?),
            "delete" => DesignerCommand::Delete,
            "undo" => DesignerCommand::Undo,
            "redo" => DesignerCommand::Redo,
            "save" => DesignerCommand::Save(tokens.next().map(PathBuf::from)),
            "load" => DesignerCommand::Load(PathBuf::from(required(
                tokens.next(),
                "load",
                "a path",
            )?)),
            "clear" => DesignerCommand::Clear,
            "show" => DesignerCommand::Show,
            "zoom-in" => DesignerCommand::ZoomIn,
            "zoom-out" => DesignerCommand::ZoomOut,
            "reset-view" => DesignerCommand::ResetView,
            _ => return Err(CommandParseError::UnknownCommand(name.to_string())),
        };

        match tokens.next() {
            Some(extra) => Err(CommandParseError::UnexpectedArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}
