//! Host abstraction boundary
//!
//! The core never touches a real document tree or paint surface. The
//! integration layer implements these traits over whatever the host
//! provides (a DOM node, a retained-mode canvas item, a test double) and
//! receives [`RenderFrame`]s back.

use crate::path::CompiledPath;
use crate::scheduler::Dimensions;

/// Handle to an element whose box can be measured.
pub trait ElementHandle {
    /// Current size of the element's box.
    ///
    /// An element that is not attached or not yet measurable reports
    /// `(0, 0)`; the core treats that as valid geometry and renders a
    /// degenerate path rather than failing.
    fn bounds(&self) -> Dimensions;
}

/// An element that knows its place in the tree, for the one-time
/// watched-ancestor lookup at setup.
pub trait ElementChain: ElementHandle + Clone {
    fn parent(&self) -> Option<Self>;
}

/// Normalized coordinate-space declaration sized to the target's pixel
/// box, emitted when the session opts in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn of(dimensions: Dimensions) -> Self {
        Self {
            width: dimensions.width,
            height: dimensions.height,
        }
    }

    /// `"0 0 <width> <height>"`, the usual view-box attribute form
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// One render's worth of output.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Option<Viewport>,
    pub paths: Vec<CompiledPath>,
}

/// Materializes compiled paths as visible drawable primitives.
///
/// Implementations must diff or replace their previously materialized
/// primitives on each call, not accumulate them: every frame carries the
/// complete current geometry.
pub trait PathSink {
    fn apply(&mut self, frame: &RenderFrame);
}

/// Cosmetic backdrop-masking effect fed the same compiled data as the
/// sink. Out of core scope; sessions invoke it only when the backdrop
/// option is enabled.
pub trait BackdropEffect {
    fn apply(&mut self, frame: &RenderFrame);
}

/// No-op effect for sessions without a backdrop.
impl BackdropEffect for () {
    fn apply(&mut self, _frame: &RenderFrame) {}
}
