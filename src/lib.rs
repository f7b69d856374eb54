//! livepath - symbolic vector paths synchronized with live container geometry
//!
//! This library resolves path coordinates written as percentages or
//! arithmetic over a container's `width`/`height` (`"50%"`,
//! `"width/2 - 10"`) into concrete integer geometry, and keeps that
//! geometry synchronized as the container resizes - whether through
//! discrete resize events or through transition/animation driven
//! continuous change.
//!
//! # Compiling a descriptor
//!
//! ```rust
//! use livepath::{compile, PathCommand, PathDescriptor};
//!
//! let descriptor = PathDescriptor::new(vec![
//!     PathCommand::move_to("10%", "10%"),
//!     PathCommand::line_to("90%", "50%"),
//! ]);
//!
//! let compiled = compile(&[descriptor], 200.0, 100.0);
//! assert_eq!(compiled[0].path_data(), "M 20,10 L 180,50");
//! ```
//!
//! # Resolving a single expression
//!
//! ```rust
//! use livepath::resolve;
//!
//! assert_eq!(resolve("width/2 - 5", 200.0, 100.0), 95.0);
//! // Malformed expressions degrade to zero instead of failing the render.
//! assert_eq!(resolve("width +", 200.0, 100.0), 0.0);
//! ```
//!
//! # Live sessions
//!
//! [`setup`] wires the pieces together for a host: it locates the
//! nearest animated ancestor via an injected [`StyleInspector`], builds
//! a [`RenderScheduler`], and returns a [`Session`] handle. The host
//! forwards resize/transition/animation notifications to the handle and
//! drives [`Session::on_frame`] once per animation frame while
//! [`Session::wants_frames`] is true; compiled geometry arrives at the
//! host's [`PathSink`].

pub mod error;
pub mod expr;
pub mod host;
pub mod path;
pub mod scheduler;
pub mod session;

pub use error::ExprError;
pub use expr::{resolve, try_resolve};
pub use host::{
    BackdropEffect, ElementChain, ElementHandle, PathSink, RenderFrame, Viewport,
};
pub use path::{
    compile, CommandOp, CompiledCommand, CompiledPath, CoordinateExpression, DescriptorError,
    Descriptors, PathCommand, PathDescriptor, PathStyle,
};
pub use scheduler::{
    find_animated_ancestor, Dimensions, FrameRequest, MotionProfile, RenderScheduler,
    StyleInspector,
};
pub use session::{setup, Session, SessionOptions};
