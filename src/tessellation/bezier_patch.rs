use itertools::Itertools;
use nalgebra::{Vector2, Vector3};

use super::patch_tessellation::PatchTessellation;
use super::patch_tessellation_option::PatchTessellationOptions;
use super::Tessellation;
use crate::misc::FloatingPoint;
use crate::surface::BezierPatch;

impl<T: FloatingPoint> Tessellation<PatchTessellationOptions> for BezierPatch<T> {
    type Output = anyhow::Result<PatchTessellation<T>>;

    /// Tessellate the patch into a regular grid of output samples,
    /// two triangles per grid cell.
    /// The v axis is flipped: the first output row maps to the parameter 1,
    /// the last row to 0.
    fn tessellate(&self, options: PatchTessellationOptions) -> Self::Output {
        let PatchTessellationOptions { res_u, res_v } = options;
        anyhow::ensure!(
            res_u >= 2 && res_v >= 2,
            "Output resolution must be at least 2x2, got {}x{}",
            res_u,
            res_v
        );

        #[cfg(feature = "log")]
        log::trace!(
            "tessellating a {}x{} control grid into {}x{} samples",
            self.u_count(),
            self.v_count(),
            res_u,
            res_v
        );

        let du = T::one() / T::from_usize(res_u - 1).unwrap();
        let dv = T::one() / T::from_usize(res_v - 1).unwrap();

        let uvs = (0..res_v)
            .cartesian_product(0..res_u)
            .map(|(i, j)| {
                let tu = (T::from_usize(j).unwrap() * du).clamp(T::zero(), T::one());
                let tv = (T::one() - T::from_usize(i).unwrap() * dv).clamp(T::zero(), T::one());
                Vector2::new(tu, tv)
            })
            .collect_vec();

        let points = uvs.iter().map(|uv| self.point_at(uv.x, uv.y)).collect_vec();
        let normal = Vector3::new(T::zero(), T::zero(), T::one());
        let normals = vec![normal; points.len()];

        let mut faces = Vec::with_capacity(2 * (res_u - 1) * (res_v - 1));
        for i in 0..res_v - 1 {
            let row_low = i * res_u;
            let row_up = (i + 1) * res_u;
            for j in 0..res_u - 1 {
                faces.push([row_low + j, row_up + j, row_low + j + 1]);
                faces.push([row_up + j + 1, row_low + j + 1, row_up + j]);
            }
        }

        Ok(PatchTessellation {
            points,
            normals,
            uvs,
            faces,
            helper_points: self.helper_points(),
        })
    }
}
