//! Error types for projection and unprojection

use thiserror::Error;

/// Why a point could not be carried between object space and the viewport.
///
/// Both variants come from exact comparisons against zero; there is no
/// tolerance band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ProjectionError {
    /// The homogeneous `w` coordinate came out exactly zero, so the
    /// perspective divide has no answer. In the forward direction this is
    /// a point on the plane through the eye parallel to the image plane.
    #[error("homogeneous w is zero; point has no projection")]
    ZeroW,

    /// `projection * model_view` has a determinant of exactly zero.
    #[error("combined model-view-projection matrix is singular")]
    SingularMatrix,
}
