use nalgebra::{Point2, Point3, Vector2, Vector3};
use simba::scalar::SupersetOf;

use crate::misc::FloatingPoint;

/// Patch tessellation representation
/// This struct is used to create a mesh data from a Bezier patch
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatchTessellation<T: FloatingPoint> {
    pub(crate) points: Vec<Point3<T>>,
    pub(crate) normals: Vec<Vector3<T>>,
    pub(crate) uvs: Vec<Vector2<T>>,
    pub(crate) faces: Vec<[usize; 3]>,
    /// control points in the centered grid frame, for visualization only
    pub(crate) helper_points: Vec<Point2<T>>,
}

impl<T: FloatingPoint> PatchTessellation<T> {
    pub fn points(&self) -> &Vec<Point3<T>> {
        &self.points
    }

    pub fn normals(&self) -> &Vec<Vector3<T>> {
        &self.normals
    }

    pub fn uvs(&self) -> &Vec<Vector2<T>> {
        &self.uvs
    }

    pub fn faces(&self) -> &Vec<[usize; 3]> {
        &self.faces
    }

    pub fn helper_points(&self) -> &Vec<Point2<T>> {
        &self.helper_points
    }

    /// Cast the patch tessellation to another floating point type.
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> PatchTessellation<F> {
        PatchTessellation {
            points: self.points.iter().map(|p| p.clone().cast()).collect(),
            normals: self.normals.iter().map(|n| n.clone().cast()).collect(),
            uvs: self.uvs.iter().map(|uv| uv.cast()).collect(),
            faces: self.faces.clone(),
            helper_points: self.helper_points.iter().map(|p| p.clone().cast()).collect(),
        }
    }
}
