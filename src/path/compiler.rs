//! Compiles symbolic path descriptors into concrete integer geometry
//!
//! A pure function of (descriptors, width, height). Compilation never
//! fails: malformed operands degrade to coordinate `0` through the
//! expression resolver's fail-safe, leaving sibling commands and
//! sibling paths untouched.

use crate::expr::{resolve_with, PercentBasis};
use crate::path::descriptor::{CoordinateExpression, PathCommand, PathDescriptor, PathStyle};

/// Tag of a compiled drawing command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOp {
    MoveTo,
    LineTo,
}

impl CommandOp {
    /// Single-letter tag used in serialized path data
    pub fn tag(&self) -> char {
        match self {
            CommandOp::MoveTo => 'M',
            CommandOp::LineTo => 'L',
        }
    }
}

/// One concrete drawing command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompiledCommand {
    pub op: CommandOp,
    pub x: i32,
    pub y: i32,
}

/// A fully resolved sub-path, produced fresh on every render and handed
/// to the sink for materialization
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPath {
    pub name: Option<String>,
    pub visible: bool,
    pub style: PathStyle,
    pub commands: Vec<CompiledCommand>,
}

impl CompiledPath {
    /// Serialize commands as `"<tag> <x>,<y>"` joined with single spaces,
    /// e.g. `M 20,10 L 180,50`
    pub fn path_data(&self) -> String {
        self.commands
            .iter()
            .map(|c| format!("{} {},{}", c.op.tag(), c.x, c.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Compile a descriptor collection against concrete dimensions
pub fn compile(descriptors: &[PathDescriptor], width: f64, height: f64) -> Vec<CompiledPath> {
    descriptors
        .iter()
        .map(|d| compile_path(d, width, height))
        .collect()
}

fn compile_path(descriptor: &PathDescriptor, width: f64, height: f64) -> CompiledPath {
    let commands = descriptor
        .commands
        .iter()
        .map(|command| {
            let op = match command {
                PathCommand::MoveTo { .. } => CommandOp::MoveTo,
                PathCommand::LineTo { .. } => CommandOp::LineTo,
            };
            CompiledCommand {
                op,
                x: compile_operand(command.x(), width, height, width),
                y: compile_operand(command.y(), width, height, height),
            }
        })
        .collect();

    CompiledPath {
        name: descriptor.name.clone(),
        visible: descriptor.visible,
        style: descriptor.style.clone(),
        commands,
    }
}

/// True when the operand needs the expression resolver rather than a
/// plain numeric parse
fn is_expression(operand: &str) -> bool {
    operand.contains(['%', '+', '-', '*', '/', '(', ')'])
}

/// Resolve one operand to an integer coordinate.
///
/// Percentages are grounded in the operand's own axis: `N%` on an x
/// operand means `N * width / 100`, on a y operand `N * height / 100`.
/// Fractional precision beyond the integer part is discarded (truncation
/// toward zero) to match the sink's integer coordinate contract.
fn compile_operand(
    operand: &CoordinateExpression,
    width: f64,
    height: f64,
    axis_dimension: f64,
) -> i32 {
    let raw = operand.as_str().trim();
    let value = if is_expression(raw) {
        resolve_with(raw, width, height, PercentBasis::Scaled(axis_dimension))
    } else {
        raw.parse::<f64>().unwrap_or(0.0)
    };
    value.trunc() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::descriptor::PathDescriptor;

    fn single(commands: Vec<PathCommand>) -> Vec<PathDescriptor> {
        vec![PathDescriptor::new(commands)]
    }

    #[test]
    fn test_percentages_resolve_per_axis() {
        let compiled = compile(
            &single(vec![
                PathCommand::move_to("10%", "10%"),
                PathCommand::line_to("90%", "50%"),
            ]),
            200.0,
            100.0,
        );

        assert_eq!(
            compiled[0].commands,
            vec![
                CompiledCommand {
                    op: CommandOp::MoveTo,
                    x: 20,
                    y: 10
                },
                CompiledCommand {
                    op: CommandOp::LineTo,
                    x: 180,
                    y: 50
                },
            ]
        );
    }

    #[test]
    fn test_path_data_serialization() {
        let compiled = compile(
            &single(vec![
                PathCommand::move_to("10%", "10%"),
                PathCommand::line_to("90%", "50%"),
            ]),
            200.0,
            100.0,
        );
        assert_eq!(compiled[0].path_data(), "M 20,10 L 180,50");
    }

    #[test]
    fn test_arithmetic_operand() {
        let compiled = compile(
            &single(vec![PathCommand::move_to("width/2-5", "height/2")]),
            200.0,
            100.0,
        );
        assert_eq!(compiled[0].commands[0].x, 95);
        assert_eq!(compiled[0].commands[0].y, 50);
    }

    #[test]
    fn test_literal_operand_ignores_dimensions() {
        let compiled = compile(&single(vec![PathCommand::move_to("42", "12.7")]), 1.0, 1.0);
        assert_eq!(compiled[0].commands[0].x, 42);
        // truncation toward zero, not rounding
        assert_eq!(compiled[0].commands[0].y, 12);
    }

    #[test]
    fn test_negative_literal_truncates_toward_zero() {
        let compiled = compile(
            &single(vec![PathCommand::move_to("-12.7", "0 - 2.9")]),
            200.0,
            100.0,
        );
        assert_eq!(compiled[0].commands[0].x, -12);
        assert_eq!(compiled[0].commands[0].y, -2);
    }

    #[test]
    fn test_malformed_operand_degrades_to_zero() {
        let compiled = compile(
            &single(vec![
                PathCommand::move_to("width +", "10"),
                PathCommand::line_to("90%", "50%"),
            ]),
            200.0,
            100.0,
        );

        // The bad operand becomes 0; its sibling operand and the
        // following command still compile.
        assert_eq!(compiled[0].commands[0].x, 0);
        assert_eq!(compiled[0].commands[0].y, 10);
        assert_eq!(compiled[0].commands[1].x, 180);
    }

    #[test]
    fn test_unparseable_literal_degrades_to_zero() {
        let compiled = compile(&single(vec![PathCommand::move_to("abc", "5")]), 200.0, 100.0);
        assert_eq!(compiled[0].commands[0].x, 0);
        assert_eq!(compiled[0].commands[0].y, 5);
    }

    #[test]
    fn test_zero_dimensions_compile_degenerate_path() {
        let compiled = compile(
            &single(vec![PathCommand::move_to("50%", "50%")]),
            0.0,
            0.0,
        );
        assert_eq!(compiled[0].commands[0].x, 0);
        assert_eq!(compiled[0].commands[0].y, 0);
    }

    #[test]
    fn test_style_and_visibility_pass_through() {
        let descriptor = PathDescriptor::new(vec![PathCommand::move_to("0", "0")])
            .with_name("outline")
            .with_visible(false)
            .with_style(PathStyle {
                stroke: Some("#ff0000".to_string()),
                stroke_width: Some(1.5),
                fill: Some("none".to_string()),
            });

        let compiled = compile(&[descriptor], 200.0, 100.0);
        assert_eq!(compiled[0].name.as_deref(), Some("outline"));
        assert!(!compiled[0].visible);
        assert_eq!(compiled[0].style.stroke.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_multiple_descriptors_compile_in_order() {
        let descriptors = vec![
            PathDescriptor::new(vec![PathCommand::move_to("0", "0")]).with_name("first"),
            PathDescriptor::new(vec![PathCommand::move_to("width", "height")]).with_name("second"),
        ];
        let compiled = compile(&descriptors, 200.0, 100.0);
        assert_eq!(compiled.len(), 2);
        assert_eq!(compiled[0].name.as_deref(), Some("first"));
        assert_eq!(compiled[1].name.as_deref(), Some("second"));
        assert_eq!(compiled[1].commands[0].x, 200);
        assert_eq!(compiled[1].commands[0].y, 100);
    }

    #[test]
    fn test_empty_command_list() {
        let compiled = compile(&single(vec![]), 200.0, 100.0);
        assert!(compiled[0].commands.is_empty());
        assert_eq!(compiled[0].path_data(), "");
    }
}
