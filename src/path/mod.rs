//! Path descriptors and the descriptor-to-geometry compiler

pub mod compiler;
pub mod descriptor;

pub use compiler::{compile, CommandOp, CompiledCommand, CompiledPath};
pub use descriptor::{
    CoordinateExpression, DescriptorError, Descriptors, PathCommand, PathDescriptor, PathStyle,
};
