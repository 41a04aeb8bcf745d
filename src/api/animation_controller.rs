use tracing::{debug, trace};

use crate::clock::Clock;
use crate::render::Renderer;

use super::{ElapsedWedge, ProgressFrame, SunMoonEngine};

impl<R: Renderer, C: Clock> SunMoonEngine<R, C> {
    /// Starts a marker run from the rise anchor.
    ///
    /// The target angle is re-read from the clock so a restart reflects the
    /// current time. Returns `false` (and changes nothing) while a run is
    /// already in flight.
    pub fn start(&mut self) -> bool {
        if self.session.state().is_running() {
            return false;
        }
        if let Some(geometry) = self.geometry {
            self.refresh_target(geometry);
        }
        let duration_ms = self.session.duration_ms();
        self.session.start(duration_ms);
        self.progress.animation_fraction = self.session.fraction();
        self.redraw_requested = true;

        debug!(
            duration_ms,
            target_angle_deg = self.progress.target_angle_deg,
            "marker animation started"
        );
        true
    }

    /// Cancels an in-flight run; the marker snaps to its target.
    ///
    /// Returns `false` when nothing was running.
    pub fn stop(&mut self) -> bool {
        if !self.session.cancel() {
            return false;
        }
        self.progress.animation_fraction = self.session.fraction();
        self.redraw_requested = true;
        debug!("marker animation cancelled");
        true
    }

    /// Advances the animation to `now_ms` (animation clock, milliseconds).
    ///
    /// Returns `None` until a layout has produced geometry; the session is
    /// not advanced in that case.
    pub fn on_tick(&mut self, now_ms: i64) -> Option<ProgressFrame> {
        let geometry = self.geometry?;

        let was_running = self.session.state().is_running();
        self.progress.animation_fraction = self.session.tick(now_ms);
        if was_running {
            self.redraw_requested = true;
        }

        let frame = ProgressFrame::resolve(geometry, self.progress, self.session.state());
        trace!(
            now_ms,
            fraction = frame.fraction_complete,
            angle_deg = frame.angle_deg,
            "animation tick"
        );
        Some(frame)
    }

    /// Marker position for the current state without advancing the run.
    #[must_use]
    pub fn current_frame(&self) -> Option<ProgressFrame> {
        let geometry = self.geometry?;
        Some(ProgressFrame::resolve(
            geometry,
            self.progress,
            self.session.state(),
        ))
    }

    #[must_use]
    pub fn elapsed_wedge(&self) -> Option<ElapsedWedge> {
        let geometry = self.geometry?;
        let frame = self.current_frame()?;
        Some(ElapsedWedge::resolve(geometry, frame))
    }

    /// Host surface went away: cancel any run and return to `Idle`.
    pub fn on_detach(&mut self) {
        self.stop();
        self.session.reset();
        debug!("engine detached from host surface");
    }
}
