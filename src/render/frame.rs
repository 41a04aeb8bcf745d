use smallvec::SmallVec;

use crate::core::BoundingBox;
use crate::error::{SunMoonError, SunMoonResult};
use crate::render::{
    ArcPrimitive, CirclePrimitive, IconPrimitive, LinePrimitive, TextPrimitive, WedgePrimitive,
};

/// Up to two lines of text under each anchor.
pub type FrameLabels = SmallVec<[TextPrimitive; 4]>;

/// Backend-agnostic scene for one indicator draw pass.
///
/// Members are listed in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct SunMoonFrame {
    pub bounds: BoundingBox,
    pub baseline: LinePrimitive,
    pub arc: ArcPrimitive,
    pub rise_anchor: CirclePrimitive,
    pub set_anchor: CirclePrimitive,
    /// Absent while the marker still sits on the rise anchor.
    pub elapsed_wedge: Option<WedgePrimitive>,
    pub marker: IconPrimitive,
    pub labels: FrameLabels,
}

impl SunMoonFrame {
    pub fn validate(&self) -> SunMoonResult<()> {
        if !self.bounds.is_valid() {
            return Err(SunMoonError::InvalidBounds {
                width: self.bounds.width,
                height: self.bounds.height,
            });
        }

        self.baseline.validate()?;
        self.arc.validate()?;
        self.rise_anchor.validate()?;
        self.set_anchor.validate()?;
        if let Some(wedge) = self.elapsed_wedge {
            wedge.validate()?;
        }
        self.marker.validate()?;
        for label in &self.labels {
            label.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        5 + usize::from(self.elapsed_wedge.is_some()) + self.labels.len()
    }
}
