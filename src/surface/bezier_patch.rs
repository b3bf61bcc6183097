use itertools::Itertools;
use nalgebra::{Point2, Point3, Vector2, Vector3};
use simba::scalar::SupersetOf;

use crate::basis::bernstein_basis;
use crate::misc::FloatingPoint;

/// Tensor-product Bezier surface patch over a rectangular grid of 2D control offsets.
/// The grid is row-major with its origin at the top-left corner.
/// By generics, it can be used with f32 or f64 scalar types.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BezierPatch<T: FloatingPoint> {
    /// control point offsets in normalized patch space, row-major
    control_points: Vec<Point2<T>>,
    /// number of grid columns (control points along the u axis)
    u_count: usize,
    /// number of grid rows (control points along the v axis)
    v_count: usize,
}

impl<T: FloatingPoint> BezierPatch<T> {
    /// Create a new Bezier patch from a row-major grid of control offsets
    /// # Failures
    /// - if the grid has fewer than 2 columns or 2 rows
    /// - if the number of control points does not match the grid resolution
    ///
    /// # Example
    /// ```
    /// use bezier_patch::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let control_points: Vec<Point2<f64>> = vec![
    ///     Point2::new(0., 0.),
    ///     Point2::new(0.1, 0.),
    ///     Point2::new(0., -0.1),
    ///     Point2::new(0.1, -0.1),
    /// ];
    /// let patch = BezierPatch::try_new(control_points, 2, 2);
    /// assert!(patch.is_ok());
    /// ```
    pub fn try_new(
        control_points: Vec<Point2<T>>,
        u_count: usize,
        v_count: usize,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(
            u_count >= 2 && v_count >= 2,
            "Control grid resolution must be at least 2x2, got {}x{}",
            u_count,
            v_count
        );
        anyhow::ensure!(
            control_points.len() == u_count * v_count,
            "Invalid number of control points, got {}, expected {}",
            control_points.len(),
            u_count * v_count
        );

        Ok(Self {
            control_points,
            u_count,
            v_count,
        })
    }

    pub fn control_points(&self) -> &Vec<Point2<T>> {
        &self.control_points
    }

    /// Number of control grid columns
    pub fn u_count(&self) -> usize {
        self.u_count
    }

    /// Number of control grid rows
    pub fn v_count(&self) -> usize {
        self.v_count
    }

    /// Degree of the patch along the u axis
    pub fn u_degree(&self) -> usize {
        self.u_count - 1
    }

    /// Degree of the patch along the v axis
    pub fn v_degree(&self) -> usize {
        self.v_count - 1
    }

    /// Evaluate the patch at the given (u, v) parameters
    /// in the unit patch frame centered at the origin.
    /// The patch is a height-free XY blend, so the z coordinate is always zero.
    pub fn point_at(&self, u: T, v: T) -> Point3<T> {
        let bu = bernstein_basis(self.u_degree(), u);
        let bv = bernstein_basis(self.v_degree(), v);
        let half = T::from_f64(0.5).unwrap();
        let origin = Vector2::new(u - half, half - v);
        self.blend(&origin, &bu, &bv)
    }

    /// Blend the control grid, translated by a sample origin, with the
    /// tensor product of the two basis weight vectors.
    /// Each grid row is summed with the u weights, scaled by its v weight
    /// and accumulated across rows.
    fn blend(&self, origin: &Vector2<T>, bu: &[T], bv: &[T]) -> Point3<T> {
        let mut position = Vector3::zeros();
        for (r, wv) in bv.iter().enumerate() {
            let mut row = Vector3::zeros();
            for (c, wu) in bu.iter().enumerate() {
                let p = &self.control_points[r * self.u_count + c];
                let translated = Vector3::new(origin.x + p.x, origin.y + p.y, T::zero());
                row += translated * *wu;
            }
            position += row * *wv;
        }
        position.into()
    }

    /// Control points offset into the [-1/2, 1/2] centered grid frame,
    /// row-major from the top-left corner.
    /// These are exposed for downstream visualization and editing only,
    /// the surface math never consumes them.
    pub fn helper_points(&self) -> Vec<Point2<T>> {
        let half = T::from_f64(0.5).unwrap();
        let inc_u = T::one() / T::from_usize(self.u_count - 1).unwrap();
        let inc_v = T::one() / T::from_usize(self.v_count - 1).unwrap();

        (0..self.v_count)
            .cartesian_product(0..self.u_count)
            .map(|(r, c)| {
                let p = &self.control_points[r * self.u_count + c];
                let mu = T::from_usize(c).unwrap() * inc_u - half;
                let mv = half - T::from_usize(r).unwrap() * inc_v;
                Point2::new(p.x + mu, p.y + mv)
            })
            .collect()
    }

    /// Cast the patch to another floating point type.
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> BezierPatch<F> {
        BezierPatch {
            control_points: self
                .control_points
                .iter()
                .map(|p| p.clone().cast())
                .collect(),
            u_count: self.u_count,
            v_count: self.v_count,
        }
    }
}
