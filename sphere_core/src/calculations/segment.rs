//! # Spherical Segment Calculation
//!
//! Surface area and volume of the slice of a sphere between two parallel
//! planes. Heights are measured from the sphere center, so a segment is fully
//! described by the radius `R`, the top plane height `ha` and the bottom plane
//! height `hb`, with `0 < hb <= ha <= R`.
//!
//! ## Formulas
//!
//! ```text
//! cap(h)    = π (R² − h²)
//! lateral   = 2π R (ha − hb)
//! total     = cap(ha) + cap(hb) + lateral
//! volume    = (π h / 6) (3a² + 3b² + h²)   h = ha − hb, a² = R² − ha², b² = R² − hb²
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sphere_core::calculations::segment::{calculate, SegmentInput};
//!
//! let input = SegmentInput::new(5.0, 4.0, 3.0);
//! let result = calculate(&input).unwrap();
//! assert!((result.total_area - 109.956).abs() < 0.001);
//! assert!((result.volume - 39.794).abs() < 0.001);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Measurements for one spherical segment.
///
/// ## JSON Example
///
/// ```json
/// {
///   "radius": 5.0,
///   "top_height": 4.0,
///   "bottom_height": 3.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentInput {
    /// Sphere radius R
    pub radius: f64,

    /// Height of the top plane above the center (ha)
    pub top_height: f64,

    /// Height of the bottom plane above the center (hb)
    pub bottom_height: f64,
}

impl SegmentInput {
    pub fn new(radius: f64, top_height: f64, bottom_height: f64) -> Self {
        SegmentInput {
            radius,
            top_height,
            bottom_height,
        }
    }

    /// Validate the measurements.
    ///
    /// Returns the first violated constraint. NaN and infinities are rejected
    /// before any ordering check.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("radius", self.radius),
            ("top_height", self.top_height),
            ("bottom_height", self.bottom_height),
        ] {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
            }
            if value <= 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
            }
        }
        if self.top_height > self.radius {
            return Err(CalcError::invalid_input(
                "top_height",
                self.top_height.to_string(),
                "Top height exceeds radius",
            ));
        }
        if self.bottom_height > self.radius {
            return Err(CalcError::invalid_input(
                "bottom_height",
                self.bottom_height.to_string(),
                "Bottom height exceeds radius",
            ));
        }
        if self.top_height < self.bottom_height {
            return Err(CalcError::invalid_input(
                "top_height",
                self.top_height.to_string(),
                "Top height is below bottom height",
            ));
        }
        Ok(())
    }

    /// Check the measurements without building an error.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Results for one spherical segment. Values are unrounded.
///
/// ## JSON Example
///
/// ```json
/// {
///   "top_area": 28.274,
///   "bottom_area": 50.265,
///   "lateral_area": 31.416,
///   "total_area": 109.956,
///   "volume": 39.794
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentResult {
    /// Area of the top circular face
    pub top_area: f64,

    /// Area of the bottom circular face
    pub bottom_area: f64,

    /// Curved band area between the planes
    pub lateral_area: f64,

    /// top + bottom + lateral
    pub total_area: f64,

    /// Enclosed volume
    pub volume: f64,
}

/// Area of the circular cross-section at height `h` from the center.
///
/// Only |h| matters; the area shrinks to zero at `h = R`.
pub fn cap_area(radius: f64, height: f64) -> f64 {
    PI * squared_chord(radius, height)
}

/// R² − h², factored so that large radii do not overflow to `inf - inf`.
fn squared_chord(radius: f64, height: f64) -> f64 {
    (radius - height) * (radius + height)
}

/// Curved surface area of the zone between `top_height` and `bottom_height`.
pub fn lateral_area(radius: f64, top_height: f64, bottom_height: f64) -> f64 {
    2.0 * PI * radius * (top_height - bottom_height)
}

pub fn total_area(top_area: f64, bottom_area: f64, lateral_area: f64) -> f64 {
    top_area + bottom_area + lateral_area
}

/// Volume of the segment between the two planes.
pub fn volume(radius: f64, top_height: f64, bottom_height: f64) -> f64 {
    let a_sq = squared_chord(radius, top_height);
    let b_sq = squared_chord(radius, bottom_height);
    let h = top_height - bottom_height;
    (PI * h / 6.0) * (3.0 * a_sq + 3.0 * b_sq + h * h)
}

/// Calculate areas and volume for a segment.
///
/// # Returns
///
/// * `Ok(SegmentResult)` - Calculation results
/// * `Err(CalcError::InvalidInput)` - If the measurements violate `0 < hb <= ha <= R`
pub fn calculate(input: &SegmentInput) -> CalcResult<SegmentResult> {
    input.validate()?;

    let top_area = cap_area(input.radius, input.top_height);
    let bottom_area = cap_area(input.radius, input.bottom_height);
    let lateral_area = lateral_area(input.radius, input.top_height, input.bottom_height);

    Ok(SegmentResult {
        top_area,
        bottom_area,
        lateral_area,
        total_area: total_area(top_area, bottom_area, lateral_area),
        volume: volume(input.radius, input.top_height, input.bottom_height),
    })
}
