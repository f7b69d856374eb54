//! Change detection and render scheduling
//!
//! [`RenderScheduler`] owns the render lifecycle for one target element.
//! It reacts to three independent, overlapping change sources (discrete
//! resize notifications, transition lifecycle events, and animation
//! lifecycle events) and decides when the path compiler runs and the
//! sink is invoked.
//!
//! Everything runs on the host's single event loop; the scheduler is
//! never entered from two threads, so the dedup cache needs no locking.
//! Interleaving between the sources is whatever the host's queue
//! delivers, handled entirely by the idempotent dimension-equality check
//! rather than by coordination between them.

use crate::host::{ElementHandle, PathSink, RenderFrame, Viewport};
use crate::path::{compile, PathDescriptor};
use crate::scheduler::dimensions::{DimensionCache, Dimensions};

/// State of one continuous change source's polling loop.
///
/// Transitions and animations have no per-frame "changed" event, only
/// start/end notifications, so while one is live the scheduler samples
/// geometry every animation frame. Cancellation is by state, not by
/// aborting an in-flight frame: `stop_requested` records that the end
/// notification arrived while geometry was still moving, and the loop
/// exits on the first frame that observes the watched box at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PollState {
    Idle,
    Polling { stop_requested: bool },
}

impl PollState {
    fn is_polling(self) -> bool {
        matches!(self, PollState::Polling { .. })
    }
}

/// The two continuous change sources, tracked independently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Transition,
    Animation,
}

/// What the host's frame loop should do after a polling step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// At least one source is still polling; schedule another frame
    Continue,
    /// No source is polling; stop driving frames
    Idle,
}

/// Decides when symbolic paths are recompiled and committed to the sink.
///
/// The host wires its change sources to the `notify_*` entry points and
/// drives [`on_frame`](Self::on_frame) once per animation frame while
/// [`wants_frames`](Self::wants_frames) is true. A source whose end
/// notification never arrives (an infinite animation) keeps the
/// scheduler polling indefinitely: it tracks the animation for as long
/// as the animation runs. That is intended behavior, but it is a
/// standing per-frame cost the integration layer should be aware of.
pub struct RenderScheduler<E, S> {
    target: E,
    watched: E,
    descriptors: Vec<PathDescriptor>,
    emit_viewport: bool,
    cache: DimensionCache,
    /// The watched ancestor's box as of the most recent polling sample.
    /// Settlement of an ended transition/animation is judged against
    /// this, not against the target's cache: the two elements' boxes are
    /// unrelated in general.
    watched_cache: Option<Dimensions>,
    transition: PollState,
    animation: PollState,
    destroyed: bool,
    sink: S,
}

impl<E, S> RenderScheduler<E, S>
where
    E: ElementHandle,
    S: PathSink,
{
    /// Create a scheduler for `target`, with transition/animation
    /// lifecycle events expected from `watched` (usually the nearest
    /// animated ancestor; see
    /// [`find_animated_ancestor`](crate::scheduler::find_animated_ancestor)).
    ///
    /// No render happens until the first notification or an explicit
    /// [`render`](Self::render); hosts whose resize observation reports
    /// the initial box (as resize observers do) get the first render
    /// through that path.
    pub fn new(
        target: E,
        watched: E,
        descriptors: Vec<PathDescriptor>,
        emit_viewport: bool,
        sink: S,
    ) -> Self {
        Self {
            target,
            watched,
            descriptors,
            emit_viewport,
            cache: DimensionCache::new(),
            watched_cache: None,
            transition: PollState::Idle,
            animation: PollState::Idle,
            destroyed: false,
            sink,
        }
    }

    /// Discrete resize notification: the observed element's box changed
    pub fn notify_resize(&mut self) {
        if self.destroyed {
            return;
        }
        self.attempt_render();
    }

    pub fn notify_transition_start(&mut self) {
        self.begin_polling(Source::Transition);
    }

    pub fn notify_transition_end(&mut self) {
        self.end_polling(Source::Transition);
    }

    pub fn notify_animation_start(&mut self) {
        self.begin_polling(Source::Animation);
    }

    pub fn notify_animation_end(&mut self) {
        self.end_polling(Source::Animation);
    }

    /// True while any continuous source needs per-frame sampling
    pub fn wants_frames(&self) -> bool {
        !self.destroyed && (self.transition.is_polling() || self.animation.is_polling())
    }

    /// One polling iteration. The host calls this once per animation
    /// frame while [`wants_frames`](Self::wants_frames) is true; the
    /// return value is the loop's checked exit condition.
    ///
    /// Each active source runs its own attempt-to-render, exactly as the
    /// independent loops would; the dimension cache makes the second
    /// attempt in the same frame a no-op.
    pub fn on_frame(&mut self) -> FrameRequest {
        if !self.wants_frames() {
            return FrameRequest::Idle;
        }

        if self.transition.is_polling() {
            self.attempt_render();
        }
        if self.animation.is_polling() {
            self.attempt_render();
        }

        let watched_now = self.watched.bounds();
        let settled = self.watched_cache == Some(watched_now);
        if settled {
            if self.transition == (PollState::Polling { stop_requested: true }) {
                self.transition = PollState::Idle;
            }
            if self.animation == (PollState::Polling { stop_requested: true }) {
                self.animation = PollState::Idle;
            }
        }
        self.watched_cache = Some(watched_now);

        if self.wants_frames() {
            FrameRequest::Continue
        } else {
            FrameRequest::Idle
        }
    }

    /// Force an immediate re-evaluation, bypassing the dimension cache
    pub fn render(&mut self) {
        if self.destroyed {
            return;
        }
        let current = self.target.bounds();
        self.commit(current);
    }

    /// Stop all observation-driven work. Every entry point becomes a
    /// no-op; the sink is never invoked again. The host should also
    /// disconnect its resize observation when it sees this.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.transition = PollState::Idle;
        self.animation = PollState::Idle;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// The dimensions of the last committed render, if any
    pub fn last_dimensions(&self) -> Option<Dimensions> {
        self.cache.last()
    }

    fn begin_polling(&mut self, source: Source) {
        if self.destroyed {
            return;
        }
        // Idempotent; a new start also clears a pending stop, since the
        // newly started transition/animation owns the loop now.
        *self.state_mut(source) = PollState::Polling {
            stop_requested: false,
        };
        self.watched_cache = Some(self.watched.bounds());
    }

    fn end_polling(&mut self, source: Source) {
        if self.destroyed || !self.state(source).is_polling() {
            return;
        }
        let current = self.watched.bounds();
        if self.watched_cache == Some(current) {
            // Geometry settled at the point the end event fired.
            *self.state_mut(source) = PollState::Idle;
        } else {
            // Another transition/animation is still moving the watched
            // box; leave the loop running. It exits on the first frame
            // that sees the box at rest.
            *self.state_mut(source) = PollState::Polling {
                stop_requested: true,
            };
        }
    }

    fn state(&self, source: Source) -> PollState {
        match source {
            Source::Transition => self.transition,
            Source::Animation => self.animation,
        }
    }

    fn state_mut(&mut self, source: Source) -> &mut PollState {
        match source {
            Source::Transition => &mut self.transition,
            Source::Animation => &mut self.animation,
        }
    }

    /// Sample the target's box and render unless it matches the cache.
    /// Keyed on the target's own box: an ancestor resize that leaves the
    /// target's box unchanged is a no-op.
    fn attempt_render(&mut self) {
        let current = self.target.bounds();
        if self.cache.matches(current) {
            return;
        }
        self.commit(current);
    }

    fn commit(&mut self, current: Dimensions) {
        self.cache.commit(current);
        let paths = compile(&self.descriptors, current.width, current.height);
        let frame = RenderFrame {
            viewport: self.emit_viewport.then(|| Viewport::of(current)),
            paths,
        };
        self.sink.apply(&frame);
    }

    pub(crate) fn map_sink<S2>(self, f: impl FnOnce(S) -> S2) -> RenderScheduler<E, S2> {
        RenderScheduler {
            target: self.target,
            watched: self.watched,
            descriptors: self.descriptors,
            emit_viewport: self.emit_viewport,
            cache: self.cache,
            watched_cache: self.watched_cache,
            transition: self.transition,
            animation: self.animation,
            destroyed: self.destroyed,
            sink: f(self.sink),
        }
    }
}
