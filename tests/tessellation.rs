use approx::assert_relative_eq;
use bezier_patch::prelude::{BezierPatch, PatchTessellationOptions, Tessellation};
use nalgebra::{Point2, Point3, Vector2, Vector3};

fn flat_patch(u_count: usize, v_count: usize) -> BezierPatch<f64> {
    let control_points = vec![Point2::origin(); u_count * v_count];
    BezierPatch::try_new(control_points, u_count, v_count).unwrap()
}

#[test]
fn test_mesh_size() {
    let patch = flat_patch(4, 4);
    let tess = patch
        .tessellate(PatchTessellationOptions::new(7, 5))
        .unwrap();

    assert_eq!(tess.points().len(), 7 * 5);
    assert_eq!(tess.normals().len(), 7 * 5);
    assert_eq!(tess.uvs().len(), 7 * 5);
    assert_eq!(tess.faces().len(), 2 * 6 * 4);
    assert_eq!(tess.helper_points().len(), 16);
    assert!(tess.faces().iter().flatten().all(|i| *i < 7 * 5));
}

#[test]
fn test_flat_patch_spans_unit_square() {
    // with all control offsets at zero, every vertex collapses onto
    // its sample origin in the [-1/2, 1/2] centered frame
    let patch = flat_patch(2, 2);
    let tess = patch
        .tessellate(PatchTessellationOptions::new(3, 3))
        .unwrap();

    assert_relative_eq!(tess.points()[0], Point3::new(-0.5, -0.5, 0.));
    assert_relative_eq!(tess.points()[1], Point3::new(0., -0.5, 0.));
    assert_relative_eq!(tess.points()[4], Point3::new(0., 0., 0.));
    assert_relative_eq!(tess.points()[8], Point3::new(0.5, 0.5, 0.));

    for normal in tess.normals() {
        assert_eq!(*normal, Vector3::new(0., 0., 1.));
    }
}

#[test]
fn test_uv_orientation() {
    // row 0 maps to v = 1, the last row to v = 0
    let patch = flat_patch(2, 2);
    let tess = patch
        .tessellate(PatchTessellationOptions::new(4, 3))
        .unwrap();

    assert_relative_eq!(tess.uvs()[0], Vector2::new(0., 1.));
    assert_relative_eq!(tess.uvs()[3], Vector2::new(1., 1.));
    assert_relative_eq!(tess.uvs()[8], Vector2::new(0., 0.));
    assert_relative_eq!(tess.uvs()[11], Vector2::new(1., 0.));
}

#[test]
fn test_corner_interpolation() {
    // a degree 1x1 patch interpolates its four corner control points;
    // compare against the direct bilinear form, independent of the
    // tensor-product code path
    let control_points = vec![
        Point2::new(0.1, 0.2),
        Point2::new(-0.05, 0.3),
        Point2::new(0., -0.1),
        Point2::new(0.2, 0.1),
    ];
    let patch = BezierPatch::try_new(control_points.clone(), 2, 2).unwrap();
    let tess = patch
        .tessellate(PatchTessellationOptions::new(5, 5))
        .unwrap();

    // output row 0 carries v = 1, which selects the last control row
    let corners = [
        (0, Point2::new(-0.5, -0.5), control_points[2]),
        (4, Point2::new(0.5, -0.5), control_points[3]),
        (20, Point2::new(-0.5, 0.5), control_points[0]),
        (24, Point2::new(0.5, 0.5), control_points[1]),
    ];
    for (index, origin, control) in corners {
        let expected = Point3::new(origin.x + control.x, origin.y + control.y, 0.);
        assert_relative_eq!(tess.points()[index], expected);
    }
}

#[test]
fn test_interior_matches_point_at() {
    let control_points = vec![
        Point2::new(0.05, 0.),
        Point2::new(0., 0.2),
        Point2::new(-0.1, 0.1),
        Point2::new(0.3, 0.),
        Point2::new(0., -0.2),
        Point2::new(0.1, 0.1),
    ];
    let patch = BezierPatch::try_new(control_points, 3, 2).unwrap();
    let tess = patch
        .tessellate(PatchTessellationOptions::new(9, 7))
        .unwrap();

    for (point, uv) in tess.points().iter().zip(tess.uvs()) {
        assert_relative_eq!(*point, patch.point_at(uv.x, uv.y));
    }
}

#[test]
fn test_determinism() {
    let control_points = vec![
        Point2::new(0.05, 0.),
        Point2::new(0., 0.2),
        Point2::new(-0.1, 0.1),
        Point2::new(0.3, 0.),
        Point2::new(0., -0.2),
        Point2::new(0.1, 0.1),
        Point2::new(0.2, -0.1),
        Point2::new(0., 0.),
        Point2::new(-0.3, 0.2),
    ];
    let patch = BezierPatch::try_new(control_points, 3, 3).unwrap();
    let options = PatchTessellationOptions::default();

    let a = patch.tessellate(options).unwrap();
    let b = patch.tessellate(options).unwrap();

    assert_eq!(a.points(), b.points());
    assert_eq!(a.normals(), b.normals());
    assert_eq!(a.uvs(), b.uvs());
    assert_eq!(a.faces(), b.faces());
    assert_eq!(a.helper_points(), b.helper_points());
}

#[test]
fn test_invalid_output_resolution() {
    let patch = flat_patch(2, 2);
    assert!(patch.tessellate(PatchTessellationOptions::new(1, 8)).is_err());
    assert!(patch.tessellate(PatchTessellationOptions::new(8, 0)).is_err());
    assert!(patch.tessellate(PatchTessellationOptions::new(2, 2)).is_ok());
}

#[test]
fn test_f32_matches_f64() {
    let control_points = vec![
        Point2::new(0.05, 0.),
        Point2::new(0., 0.2),
        Point2::new(-0.1, 0.1),
        Point2::new(0.3, 0.),
    ];
    let patch = BezierPatch::try_new(control_points, 2, 2).unwrap();
    let options = PatchTessellationOptions::new(6, 6);

    let double = patch.tessellate(options).unwrap();
    let single = patch.cast::<f32>().tessellate(options).unwrap();

    assert_eq!(single.points().len(), double.points().len());
    for (s, d) in single.points().iter().zip(double.points()) {
        assert_relative_eq!(s.cast::<f64>(), *d, epsilon = 1e-5);
    }
}

#[test]
fn test_cast_tessellation() {
    let patch = flat_patch(2, 2);
    let tess = patch
        .tessellate(PatchTessellationOptions::new(3, 3))
        .unwrap();
    let single = tess.cast::<f32>();

    assert_eq!(single.faces(), tess.faces());
    for (s, d) in single.points().iter().zip(tess.points()) {
        assert_relative_eq!(s.cast::<f64>(), *d, epsilon = 1e-6);
    }
}
