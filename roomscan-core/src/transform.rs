//! 3D transformation utilities

use nalgebra::{Isometry3, Matrix4, Point3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D affine transformation that can be applied to points and vectors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    pub matrix: Matrix4<f32>,
}

impl Transform3D {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a translation transformation
    pub fn translation(translation: Vector3<f32>) -> Self {
        Self {
            matrix: Matrix4::new_translation(&translation),
        }
    }

    /// Create a scaling transformation
    pub fn scaling(scale: Vector3<f32>) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&scale),
        }
    }

    /// Create a uniform scaling transformation
    pub fn uniform_scaling(scale: f32) -> Self {
        Self {
            matrix: Matrix4::new_scaling(scale),
        }
    }

    /// Create a transformation from translation and rotation
    pub fn from_translation_rotation(
        translation: Vector3<f32>,
        rotation: UnitQuaternion<f32>,
    ) -> Self {
        let isometry = Isometry3::from_parts(translation.into(), rotation);
        Self {
            matrix: isometry.to_homogeneous(),
        }
    }

    /// Apply the transformation to a point
    pub fn transform_point(&self, point: &Point3<f32>) -> Point3<f32> {
        let homogeneous = self.matrix * point.to_homogeneous();
        Point3::from_homogeneous(homogeneous).unwrap_or(*point)
    }

    /// Apply the transformation to a vector (no translation)
    pub fn transform_vector(&self, vector: &Vector3<f32>) -> Vector3<f32> {
        self.matrix.fixed_view::<3, 3>(0, 0) * vector
    }

    /// The transformation to apply to normal vectors under this point
    /// transform: the inverse-transpose. Required for normals to stay
    /// perpendicular to surfaces under non-uniform scaling. Falls back to
    /// identity when the matrix is singular.
    pub fn normal_transform(&self) -> Self {
        match self.matrix.try_inverse() {
            Some(inverse) => Self {
                matrix: inverse.transpose(),
            },
            None => Self::identity(),
        }
    }

    /// Compose this transformation with another
    pub fn compose(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Get the inverse transformation
    pub fn inverse(self) -> Option<Self> {
        self.matrix.try_inverse().map(|inv_matrix| Self {
            matrix: inv_matrix,
        })
    }

    /// Check if this is approximately the identity transformation
    pub fn is_identity(&self, epsilon: f32) -> bool {
        let identity = Matrix4::identity();
        (self.matrix - identity).norm() < epsilon
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Transform3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl From<Matrix4<f32>> for Transform3D {
    fn from(matrix: Matrix4<f32>) -> Self {
        Self { matrix }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_point_scale_and_translate() {
        let transform = Transform3D::translation(Vector3::new(1.0, 2.0, 3.0))
            * Transform3D::uniform_scaling(2.0);

        let p = transform.transform_point(&Point3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(p.x, 3.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 4.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_from_translation_rotation() {
        // Quarter turn about z, then shift along x: (1, 0, 0) rotates onto
        // the y axis before the translation lands it at (10, 1, 0).
        let rotation = UnitQuaternion::from_axis_angle(
            &Vector3::z_axis(),
            std::f32::consts::FRAC_PI_2,
        );
        let transform =
            Transform3D::from_translation_rotation(Vector3::new(10.0, 0.0, 0.0), rotation);

        let p = transform.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 10.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_inverse_round_trips_points() {
        let transform = Transform3D::translation(Vector3::new(4.0, -2.0, 1.0))
            * Transform3D::scaling(Vector3::new(2.0, 3.0, 0.5));
        let inverse = transform.inverse().unwrap();

        let p = Point3::new(1.5, -0.25, 8.0);
        let back = inverse.transform_point(&transform.transform_point(&p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-5);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-5);
        assert_relative_eq!(back.z, p.z, epsilon = 1e-5);

        // Singular transforms have no inverse.
        assert!(Transform3D::scaling(Vector3::new(1.0, 0.0, 1.0))
            .inverse()
            .is_none());
    }

    #[test]
    fn test_normal_transform_nonuniform_scale() {
        // Under scale (2, 1, 1) the tilted normal (1, 1, 0)/sqrt(2) must map
        // through the inverse-transpose, contracting its x component.
        let transform = Transform3D::scaling(Vector3::new(2.0, 1.0, 1.0));
        let normal = Vector3::new(1.0, 1.0, 0.0).normalize();

        let mapped = transform
            .normal_transform()
            .transform_vector(&normal)
            .normalize();
        let expected = Vector3::new(0.5, 1.0, 0.0).normalize();

        assert_relative_eq!(mapped.x, expected.x, epsilon = 1e-6);
        assert_relative_eq!(mapped.y, expected.y, epsilon = 1e-6);
        assert_relative_eq!(mapped.z, expected.z, epsilon = 1e-6);
    }

    #[test]
    fn test_normal_transform_singular_falls_back_to_identity() {
        let transform = Transform3D::scaling(Vector3::new(1.0, 0.0, 1.0));
        assert!(transform.normal_transform().is_identity(1e-6));
    }

    #[test]
    fn test_translation_does_not_move_vectors() {
        let transform = Transform3D::translation(Vector3::new(5.0, -3.0, 7.0));
        let v = transform.transform_vector(&Vector3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(v.z, 1.0, epsilon = 1e-6);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
    }
}
