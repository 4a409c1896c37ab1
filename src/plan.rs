//! Host-facing planning: one-shot [`plan`] and the memoizing [`Reorienter`].

use crate::direction::DirectionMatrix;
use crate::error::OrientError;
use crate::grid::{GridDescription, reorient};
use crate::orientation::OrientationCode;
use crate::region::{IndexRegion, map_to_input};
use crate::transform::{AxisTransform, FlipFlags, PermuteOrder};

/// Everything a host needs to reorient one input grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Reorientation {
    /// Orientation the input was found (or declared) to have.
    pub given: OrientationCode,
    /// Orientation the output is expressed in.
    pub desired: OrientationCode,
    /// Permutation and flips taking `given` to `desired`.
    pub transform: AxisTransform,
    /// Input grid the plan was computed for.
    pub input: GridDescription,
    /// Output grid metadata.
    pub output: GridDescription,
}

impl Reorientation {
    /// Input region to read for `requested` output voxels.
    pub fn input_region(&self, requested: &IndexRegion) -> Result<IndexRegion, OrientError> {
        map_to_input(requested, &self.input, &self.transform)
    }
}

/// Plan the reorientation of `input` into `desired`, deriving the input
/// orientation from its direction matrix.
///
/// ```
/// use zenorient::{DirectionMatrix, GridDescription, IndexRegion, OrientationCode, plan};
///
/// let input = GridDescription::new(
///     [5, 6, 7],
///     [1.0; 3],
///     [0.0; 3],
///     DirectionMatrix::diagonal([-1.0, -1.0, 1.0]),
/// );
/// let p = plan(&input, OrientationCode::LPS);
/// assert_eq!(p.given, OrientationCode::RAS);
/// assert_eq!(p.transform.flip(), [true, true, false]);
/// assert_eq!(p.output.direction, DirectionMatrix::IDENTITY);
///
/// let required = p.input_region(&IndexRegion::new([0, 0, 0], [1, 2, 3])).unwrap();
/// assert_eq!(required, IndexRegion::new([4, 4, 0], [1, 2, 3]));
/// ```
pub fn plan(input: &GridDescription, desired: OrientationCode) -> Reorientation {
    plan_from(input, input.orientation(), desired)
}

/// Like [`plan`], but with the input orientation supplied by the caller.
pub fn plan_from(
    input: &GridDescription,
    given: OrientationCode,
    desired: OrientationCode,
) -> Reorientation {
    let transform = AxisTransform::resolve(given, desired);
    Reorientation {
        given,
        desired,
        transform,
        input: *input,
        output: reorient(input, &transform, desired),
    }
}

/// Stateful reorientation stage for a pipeline host.
///
/// Holds the desired orientation and the last known input orientation, and
/// memoizes the resolved [`AxisTransform`]. The transform is re-resolved only
/// when either orientation changes, so repeated region requests against the
/// same input reuse it.
///
/// Call [`update_output_information`](Self::update_output_information)
/// whenever the input grid changes. Region requests are answered against the
/// grid seen by the last update; before any update that grid is empty, so
/// every non-empty request is out of bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct Reorienter {
    desired: OrientationCode,
    given: OrientationCode,
    use_image_direction: bool,
    transform: AxisTransform,
    input: GridDescription,
}

impl Default for Reorienter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reorienter {
    /// `LPS` in, `LPS` out, input orientation taken from the image direction.
    pub fn new() -> Self {
        Self {
            desired: OrientationCode::LPS,
            given: OrientationCode::LPS,
            use_image_direction: true,
            transform: AxisTransform::IDENTITY,
            input: GridDescription::with_size([0; 3]),
        }
    }

    /// Builder form of [`set_desired`](Self::set_desired).
    pub fn with_desired(mut self, desired: OrientationCode) -> Self {
        self.set_desired(desired);
        self
    }

    /// Orientation the output will be expressed in.
    pub fn desired(&self) -> OrientationCode {
        self.desired
    }

    /// Orientation the input is assumed to have.
    pub fn given(&self) -> OrientationCode {
        self.given
    }

    /// Current resolved transform.
    pub fn transform(&self) -> AxisTransform {
        self.transform
    }

    /// Current permutation.
    pub fn permute_order(&self) -> PermuteOrder {
        self.transform.permute()
    }

    /// Current flips.
    pub fn flip_axes(&self) -> FlipFlags {
        self.transform.flip()
    }

    /// Whether the input orientation is read from the input direction matrix.
    pub fn uses_image_direction(&self) -> bool {
        self.use_image_direction
    }

    /// Whether the current transform reorders axes.
    pub fn needs_permute(&self) -> bool {
        self.transform.needs_permute()
    }

    /// Whether the current transform mirrors any axis.
    pub fn needs_flip(&self) -> bool {
        self.transform.needs_flip()
    }

    /// Set the output orientation.
    pub fn set_desired(&mut self, desired: OrientationCode) {
        if self.desired != desired {
            self.desired = desired;
            self.refresh();
        }
    }

    /// Set the output orientation from a code string such as `"RAS"`.
    ///
    /// On error the previous desired orientation is kept.
    pub fn set_desired_str(&mut self, desired: &str) -> Result<(), OrientError> {
        let code = OrientationCode::parse(desired).inspect_err(|e| {
            tracing::warn!(input = desired, error = %e, "rejected desired orientation");
        })?;
        self.set_desired(code);
        Ok(())
    }

    /// Set the output orientation to that of a direction matrix.
    pub fn set_desired_direction(&mut self, direction: &DirectionMatrix) {
        self.set_desired(OrientationCode::from_direction(direction));
    }

    /// Choose whether the input orientation comes from the input direction
    /// matrix (the default) or from [`set_given`](Self::set_given).
    pub fn set_use_image_direction(&mut self, use_image_direction: bool) {
        self.use_image_direction = use_image_direction;
    }

    /// Declare the input orientation. Overwritten by the next
    /// [`update_output_information`](Self::update_output_information) while
    /// the image direction is in use.
    pub fn set_given(&mut self, given: OrientationCode) {
        if self.given != given {
            self.given = given;
            self.refresh();
        }
    }

    /// Input grid seen by the last
    /// [`update_output_information`](Self::update_output_information).
    pub fn input(&self) -> &GridDescription {
        &self.input
    }

    /// Output grid metadata for `input`, refreshing the input orientation from
    /// its direction matrix when enabled. `input` becomes the grid that region
    /// requests are mapped onto.
    pub fn update_output_information(&mut self, input: &GridDescription) -> GridDescription {
        self.input = *input;
        if self.use_image_direction {
            let given = input.orientation();
            if given != self.given {
                tracing::trace!(previous = %self.given, current = %given, "input orientation changed");
            }
            self.set_given(given);
        }
        if !self.needs_permute() {
            tracing::trace!("no need to permute");
        }
        if !self.needs_flip() {
            tracing::trace!("no need to flip");
        }
        reorient(input, &self.transform, self.desired)
    }

    /// Input region to read for `requested` output voxels, on the grid from
    /// the last [`update_output_information`](Self::update_output_information).
    pub fn input_requested_region(
        &self,
        requested: &IndexRegion,
    ) -> Result<IndexRegion, OrientError> {
        map_to_input(requested, &self.input, &self.transform)
    }

    fn refresh(&mut self) {
        self.transform = AxisTransform::resolve(self.given, self.desired);
        tracing::debug!(
            given = %self.given,
            desired = %self.desired,
            permute = ?self.transform.permute(),
            flip = ?self.transform.flip(),
            "resolved reorientation"
        );
    }
}
