use crate::error::SunMoonResult;
use crate::render::{Renderer, SunMoonFrame};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_label_count: usize,
    pub last_frame: Option<SunMoonFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SunMoonFrame) -> SunMoonResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_label_count = frame.labels.len();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
