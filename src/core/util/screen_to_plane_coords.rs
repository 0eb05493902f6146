use crate::core::data::complex::Complex;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::viewport::Viewport;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ScreenToPlaneCoordsError {
    #[error("viewport {width}x{height} has no area")]
    DegenerateViewport { width: u32, height: u32 },
}

fn ensure_area(viewport: Viewport) -> Result<(), ScreenToPlaneCoordsError> {
    if viewport.is_degenerate() {
        return Err(ScreenToPlaneCoordsError::DegenerateViewport {
            width: viewport.width(),
            height: viewport.height(),
        });
    }

    Ok(())
}

/// Maps a window pixel to normalised device coordinates.
///
/// The vertical axis is flipped so that "up" is positive, and the horizontal
/// axis is stretched by the aspect ratio so that a unit of plane space covers
/// the same number of pixels in both directions. The viewport centre maps to
/// the origin.
pub fn screen_to_ndc(
    point: ScreenPoint,
    viewport: Viewport,
) -> Result<Complex, ScreenToPlaneCoordsError> {
    ensure_area(viewport)?;

    let width = f64::from(viewport.width());
    let height = f64::from(viewport.height());

    let real = (f64::from(point.x) / width - 0.5) * 2.0 * viewport.aspect_ratio();
    let imag = -(f64::from(point.y) / height - 0.5) * 2.0;

    Ok(Complex { real, imag })
}

/// The plane-space point drawn under `point` for the given zoom and offset.
pub fn screen_to_plane(
    point: ScreenPoint,
    viewport: Viewport,
    zoom: f64,
    offset: Complex,
) -> Result<Complex, ScreenToPlaneCoordsError> {
    Ok(screen_to_ndc(point, viewport)? * zoom + offset)
}

/// Converts a cursor movement in pixels into the plane-space vector a drag
/// subtracts from the offset.
///
/// Unlike [`screen_to_ndc`] the vertical axis is not flipped: dragging down
/// moves the offset towards negative imaginary values.
pub fn screen_delta_to_plane(
    delta_x: f32,
    delta_y: f32,
    viewport: Viewport,
    zoom: f64,
) -> Result<Complex, ScreenToPlaneCoordsError> {
    ensure_area(viewport)?;

    let width = f64::from(viewport.width());
    let height = f64::from(viewport.height());

    let real = (f64::from(delta_x) / width) * zoom * viewport.aspect_ratio() * 2.0;
    let imag = (f64::from(delta_y) / height) * zoom * 2.0;

    Ok(Complex { real, imag })
}
