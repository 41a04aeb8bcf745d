use thiserror::Error;

pub type SunMoonResult<T> = Result<T, SunMoonError>;

#[derive(Debug, Error)]
pub enum SunMoonError {
    #[error("invalid bounding box: width={width}, height={height}")]
    InvalidBounds { width: u32, height: u32 },

    #[error(
        "infeasible arc geometry: radius={radius}, vertical_offset={vertical_offset} \
         (vertical offset must lie strictly between 0 and the radius)"
    )]
    InfeasibleGeometry { radius: f64, vertical_offset: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
