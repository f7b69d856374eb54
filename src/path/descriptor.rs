//! Declarative path model supplied by the integration layer
//!
//! A [`PathDescriptor`] is authored once, treated as read-only, and
//! re-evaluated against the container's current size on every render.
//! Coordinate operands stay symbolic (`"50%"`, `"width/2 - 10"`) until
//! the compiler resolves them.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading descriptor files
#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("Failed to read descriptor file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse descriptor TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A symbolic operand for one axis of one path command.
///
/// May be a plain number (`"42"`), a percentage (`"50%"`), or an
/// arithmetic expression over `width`/`height` (`"width/2 - 10"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct CoordinateExpression(pub String);

impl CoordinateExpression {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CoordinateExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CoordinateExpression {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One drawing command with symbolic operands. Ordering within a
/// descriptor is significant: commands are drawn in sequence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo {
        x: CoordinateExpression,
        y: CoordinateExpression,
    },
    LineTo {
        x: CoordinateExpression,
        y: CoordinateExpression,
    },
}

impl PathCommand {
    pub fn move_to(x: impl Into<String>, y: impl Into<String>) -> Self {
        PathCommand::MoveTo {
            x: CoordinateExpression::new(x),
            y: CoordinateExpression::new(y),
        }
    }

    pub fn line_to(x: impl Into<String>, y: impl Into<String>) -> Self {
        PathCommand::LineTo {
            x: CoordinateExpression::new(x),
            y: CoordinateExpression::new(y),
        }
    }

    /// The x operand of this command
    pub fn x(&self) -> &CoordinateExpression {
        match self {
            PathCommand::MoveTo { x, .. } | PathCommand::LineTo { x, .. } => x,
        }
    }

    /// The y operand of this command
    pub fn y(&self) -> &CoordinateExpression {
        match self {
            PathCommand::MoveTo { y, .. } | PathCommand::LineTo { y, .. } => y,
        }
    }
}

/// Style attributes carried through to the sink untouched. The core
/// never interprets them.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PathStyle {
    pub stroke_width: Option<f64>,
    pub stroke: Option<String>,
    pub fill: Option<String>,
}

/// A named, styleable sub-path: an ordered sequence of commands with
/// symbolic operands plus presentation metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PathDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub style: PathStyle,
    pub commands: Vec<PathCommand>,
}

fn default_visible() -> bool {
    true
}

impl PathDescriptor {
    /// Create a visible, unnamed, unstyled descriptor
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self {
            name: None,
            visible: true,
            style: PathStyle::default(),
            commands,
        }
    }

    /// Set the descriptor name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the style block
    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the visibility flag
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// A descriptor collection loaded from TOML
#[derive(Debug, Clone)]
pub struct Descriptors {
    /// Optional name for the collection
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// The descriptors, in document order
    pub paths: Vec<PathDescriptor>,
}

/// TOML structure for deserializing descriptor files
#[derive(Deserialize)]
struct TomlDescriptors {
    metadata: Option<TomlMetadata>,
    #[serde(default, rename = "path")]
    paths: Vec<PathDescriptor>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl Descriptors {
    /// Load a descriptor collection from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, DescriptorError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a descriptor collection from a TOML string
    pub fn from_str(content: &str) -> Result<Self, DescriptorError> {
        let parsed: TomlDescriptors = toml::from_str(content)?;

        Ok(Descriptors {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            paths: parsed.paths,
        })
    }
}
