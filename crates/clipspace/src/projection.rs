//! Object space <-> viewport mapping
//!
//! `project` carries an object-space point through `projection * model_view`,
//! divides by `w`, and maps normalized device coordinates into the viewport
//! rectangle. `unproject` runs the same chain backwards through the analytic
//! inverse of the combined matrix.
//!
//! Conventions: NDC depth is `[-1, 1]` and is reported as `[0, 1]`; the
//! viewport is a [`Vec4`] holding `(x, y, width, height)`; angles are radians.
//!
//! All degeneracy checks compare against exactly zero.

use crate::consts;
use crate::error::ProjectionError;
use crate::matrix::Mat4;
use crate::vector::{Vec3, Vec4};

/// Convert degrees to radians
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    (degrees * consts::PI) / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    (radians * 180.0) / consts::PI
}

/// Map an object-space point to viewport coordinates.
///
/// The result holds window `x`/`y` inside `viewport` and a depth in `[0, 1]`.
/// Fails with [`ProjectionError::ZeroW`] when the clip-space `w` is exactly
/// zero.
pub fn project(
    position: Vec3,
    model_view: &Mat4,
    projection: &Mat4,
    viewport: Vec4,
) -> Result<Vec3, ProjectionError> {
    let combined = *projection * *model_view;
    let clip = combined * position.extend(1.0);

    let w = clip.w();
    if w == 0.0 {
        log::trace!("project: clip w is zero for {:?}", position.values);
        return Err(ProjectionError::ZeroW);
    }

    let ndc = clip.truncate() / w;
    let x = ndc.x() * 0.5 + 0.5;
    let y = ndc.y() * 0.5 + 0.5;
    let z = ndc.z() * 0.5 + 0.5;

    Ok(Vec3::new(
        x * viewport.width() + viewport.x(),
        y * viewport.height() + viewport.y(),
        z,
    ))
}

/// Map a viewport point (window `x`/`y`, depth in `[0, 1]`) back to object space.
///
/// Fails with [`ProjectionError::SingularMatrix`] when `projection * model_view`
/// has a zero determinant, and with [`ProjectionError::ZeroW`] when the
/// unprojected `w` is exactly zero.
pub fn unproject(
    position: Vec3,
    model_view: &Mat4,
    projection: &Mat4,
    viewport: Vec4,
) -> Result<Vec3, ProjectionError> {
    let combined = *projection * *model_view;
    let inverse = combined.try_inverse().ok_or_else(|| {
        log::trace!("unproject: combined matrix is singular");
        ProjectionError::SingularMatrix
    })?;

    let ndc = Vec4::new(
        (position.x() - viewport.x()) / viewport.width() * 2.0 - 1.0,
        (position.y() - viewport.y()) / viewport.height() * 2.0 - 1.0,
        position.z() * 2.0 - 1.0,
        1.0,
    );
    let object = inverse * ndc;

    let w = object.w();
    if w == 0.0 {
        log::trace!("unproject: object w is zero for {:?}", position.values);
        return Err(ProjectionError::ZeroW);
    }

    Ok(object.truncate() / w)
}

/// [`project`] writing into `out`. Returns `false`, leaving `out` untouched,
/// when there is no projection.
pub fn project_into(
    position: Vec3,
    model_view: &Mat4,
    projection: &Mat4,
    viewport: Vec4,
    out: &mut Vec3,
) -> bool {
    match project(position, model_view, projection, viewport) {
        Ok(window) => {
            *out = window;
            true
        }
        Err(_) => false,
    }
}

/// [`unproject`] writing into `out`. Returns `false`, leaving `out` untouched,
/// when there is no unprojection.
pub fn unproject_into(
    position: Vec3,
    model_view: &Mat4,
    projection: &Mat4,
    viewport: Vec4,
    out: &mut Vec3,
) -> bool {
    match unproject(position, model_view, projection, viewport) {
        Ok(object) => {
            *out = object;
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT_VIEWPORT: Vec4 = Vec4::viewport(0.0, 0.0, 1.0, 1.0);

    #[test]
    fn test_angle_conversion() {
        assert!((degrees_to_radians(180.0) - consts::PI).abs() < 1e-6);
        assert!((degrees_to_radians(90.0) - consts::FRAC_PI_2).abs() < 1e-6);
        assert!((radians_to_degrees(consts::PI) - 180.0).abs() < 1e-4);
        assert!((radians_to_degrees(degrees_to_radians(37.5)) - 37.5).abs() < 1e-4);
    }

    #[test]
    fn test_identity_project() {
        let p = Vec3::new(0.5, -0.25, 0.75);
        let window = project(p, &Mat4::IDENTITY, &Mat4::IDENTITY, UNIT_VIEWPORT).unwrap();
        assert_eq!(window, Vec3::new(0.75, 0.375, 0.875));

        let back = unproject(window, &Mat4::IDENTITY, &Mat4::IDENTITY, UNIT_VIEWPORT).unwrap();
        assert!((back - p).length() < 1e-6);
    }

    #[test]
    fn test_viewport_offset_and_extent() {
        let viewport = Vec4::viewport(100.0, 50.0, 800.0, 600.0);
        let window = project(Vec3::ZERO, &Mat4::IDENTITY, &Mat4::IDENTITY, viewport).unwrap();
        assert_eq!(window, Vec3::new(500.0, 350.0, 0.5));

        let corner = project(Vec3::new(-1.0, -1.0, -1.0), &Mat4::IDENTITY, &Mat4::IDENTITY, viewport).unwrap();
        assert_eq!(corner, Vec3::new(100.0, 50.0, 0.0));
    }

    #[test]
    fn test_point_on_eye_plane_has_no_projection() {
        let projection = Mat4::perspective(degrees_to_radians(60.0), 1.0, 0.1, 100.0);
        let result = project(Vec3::new(1.0, 1.0, 0.0), &Mat4::IDENTITY, &projection, UNIT_VIEWPORT);
        assert_eq!(result, Err(ProjectionError::ZeroW));
    }

    #[test]
    fn test_zero_projection_is_singular() {
        let result = unproject(Vec3::new(0.5, 0.5, 0.5), &Mat4::IDENTITY, &Mat4::ZERO, UNIT_VIEWPORT);
        assert_eq!(result, Err(ProjectionError::SingularMatrix));
    }

    #[test]
    fn test_into_variants_leave_out_untouched_on_failure() {
        let sentinel = Vec3::new(7.0, 8.0, 9.0);

        let mut out = sentinel;
        assert!(!project_into(Vec3::ONE, &Mat4::IDENTITY, &Mat4::ZERO, UNIT_VIEWPORT, &mut out));
        assert_eq!(out, sentinel);

        assert!(!unproject_into(Vec3::ONE, &Mat4::IDENTITY, &Mat4::ZERO, UNIT_VIEWPORT, &mut out));
        assert_eq!(out, sentinel);

        assert!(project_into(Vec3::ZERO, &Mat4::IDENTITY, &Mat4::IDENTITY, UNIT_VIEWPORT, &mut out));
        assert_eq!(out, Vec3::splat(0.5));
        assert!(unproject_into(Vec3::splat(0.5), &Mat4::IDENTITY, &Mat4::IDENTITY, UNIT_VIEWPORT, &mut out));
        assert_eq!(out, Vec3::ZERO);
    }

    #[test]
    fn test_unproject_zero_w() {
        // Swapping z and w makes the unprojected w equal to NDC z, which is
        // zero at depth 0.5.
        let swap_zw = Mat4::from_cols(Vec4::X, Vec4::Y, Vec4::W, Vec4::Z);
        let result = unproject(Vec3::new(0.5, 0.5, 0.5), &Mat4::IDENTITY, &swap_zw, UNIT_VIEWPORT);
        assert_eq!(result, Err(ProjectionError::ZeroW));

        let forward = project(Vec3::new(0.3, 0.3, 0.0), &Mat4::IDENTITY, &swap_zw, UNIT_VIEWPORT);
        assert_eq!(forward, Err(ProjectionError::ZeroW));
    }
}
