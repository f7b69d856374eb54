//! Session lifecycle: setup, forced render, teardown
//!
//! [`setup`] is the integration layer's entry point. It performs the
//! one-time watched-ancestor lookup, builds the scheduler, and returns a
//! [`Session`] handle exposing the notification passthroughs plus
//! `render()` and `destroy()`.

use crate::host::{BackdropEffect, ElementChain, ElementHandle, PathSink, RenderFrame};
use crate::path::PathDescriptor;
use crate::scheduler::{find_animated_ancestor, Dimensions, FrameRequest, RenderScheduler, StyleInspector};

/// Configuration flags supplied at setup
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Feed each frame to the auxiliary backdrop effect as well as the sink
    pub backdrop: bool,
    /// Emit a normalized coordinate-space declaration sized to the
    /// target's pixel box with every frame
    pub emit_viewport: bool,
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the backdrop effect
    pub fn with_backdrop(mut self, backdrop: bool) -> Self {
        self.backdrop = backdrop;
        self
    }

    /// Enable or disable viewport emission
    pub fn with_viewport(mut self, emit_viewport: bool) -> Self {
        self.emit_viewport = emit_viewport;
        self
    }
}

/// Fans each committed frame out to the sink and, when enabled, the
/// backdrop effect. Keeps the scheduler single-sink.
struct Fanout<S, B> {
    sink: S,
    backdrop: B,
    backdrop_enabled: bool,
}

impl<S: PathSink, B: BackdropEffect> PathSink for Fanout<S, B> {
    fn apply(&mut self, frame: &RenderFrame) {
        self.sink.apply(frame);
        if self.backdrop_enabled {
            self.backdrop.apply(frame);
        }
    }
}

/// Handle for one rendering session over one target element.
///
/// Created by [`setup`]; dropped or [`destroy`](Self::destroy)ed when
/// the session ends. All methods are forwarded to the scheduler, so the
/// host wires its observation machinery to this handle alone.
pub struct Session<E, S, B = ()>
where
    E: ElementHandle,
    S: PathSink,
    B: BackdropEffect,
{
    scheduler: RenderScheduler<E, Fanout<S, B>>,
}

/// Set up a session: find the watched ancestor, build the scheduler.
///
/// The host must attach its resize observation to the target and its
/// transition/animation listeners to the element this session watches,
/// which may be the target itself when no animated ancestor exists. No
/// render happens until the first notification (resize observers report
/// the initial box) or an explicit [`Session::render`].
pub fn setup<E, I, S>(
    target: E,
    descriptors: Vec<PathDescriptor>,
    options: SessionOptions,
    inspector: &I,
    sink: S,
) -> Session<E, S>
where
    E: ElementChain,
    I: StyleInspector<E>,
    S: PathSink,
{
    let watched = find_animated_ancestor(&target, inspector);
    Session::new(target, watched, descriptors, options, sink)
}

impl<E, S> Session<E, S>
where
    E: ElementHandle,
    S: PathSink,
{
    /// Build a session with an explicit watched element, bypassing the
    /// ancestor lookup
    pub fn new(
        target: E,
        watched: E,
        descriptors: Vec<PathDescriptor>,
        options: SessionOptions,
        sink: S,
    ) -> Self {
        Self {
            scheduler: RenderScheduler::new(
                target,
                watched,
                descriptors,
                options.emit_viewport,
                Fanout {
                    sink,
                    backdrop: (),
                    backdrop_enabled: options.backdrop,
                },
            ),
        }
    }
}

impl<E, S, B> Session<E, S, B>
where
    E: ElementHandle,
    S: PathSink,
    B: BackdropEffect,
{
    /// Attach a backdrop effect collaborator. It is only invoked when
    /// the session's backdrop option is enabled.
    pub fn with_backdrop<B2: BackdropEffect>(self, effect: B2) -> Session<E, S, B2> {
        Session {
            scheduler: self.scheduler.map_sink(|fanout| Fanout {
                sink: fanout.sink,
                backdrop: effect,
                backdrop_enabled: fanout.backdrop_enabled,
            }),
        }
    }

    /// Discrete resize notification for the target element
    pub fn notify_resize(&mut self) {
        self.scheduler.notify_resize();
    }

    /// Transition lifecycle notifications from the watched element
    pub fn notify_transition_start(&mut self) {
        self.scheduler.notify_transition_start();
    }

    pub fn notify_transition_end(&mut self) {
        self.scheduler.notify_transition_end();
    }

    /// Animation lifecycle notifications from the watched element
    pub fn notify_animation_start(&mut self) {
        self.scheduler.notify_animation_start();
    }

    pub fn notify_animation_end(&mut self) {
        self.scheduler.notify_animation_end();
    }

    /// True while the session needs per-frame callbacks
    pub fn wants_frames(&self) -> bool {
        self.scheduler.wants_frames()
    }

    /// One animation-frame callback; see [`RenderScheduler::on_frame`]
    pub fn on_frame(&mut self) -> FrameRequest {
        self.scheduler.on_frame()
    }

    /// Force an immediate unconditional re-evaluation, bypassing the
    /// dimension-equality cache
    pub fn render(&mut self) {
        self.scheduler.render();
    }

    /// Stop all observation and polling. The host should disconnect its
    /// resize observation and listeners; every subsequent notification
    /// is a no-op and the sink is never invoked again.
    pub fn destroy(&mut self) {
        self.scheduler.destroy();
    }

    pub fn is_destroyed(&self) -> bool {
        self.scheduler.is_destroyed()
    }

    /// The dimensions of the last committed render, if any
    pub fn last_dimensions(&self) -> Option<Dimensions> {
        self.scheduler.last_dimensions()
    }
}
