use nalgebra::{Matrix3, Point2, Vector3};

pub type Real = f64;

pub type Pt2 = Point2<Real>;
pub type Vec3 = Vector3<Real>;
pub type Mat3 = Matrix3<Real>;

pub fn to_homogeneous(p: &Pt2) -> Vec3 {
    Vec3::new(p.x, p.y, 1.0)
}

pub fn from_homogeneous(v: &Vec3) -> Pt2 {
    Pt2::new(v.x / v.z, v.y / v.z)
}

/// Apply a homogeneous 2D transform to a point.
pub fn transform_point(m: &Mat3, p: &Pt2) -> Pt2 {
    from_homogeneous(&(m * to_homogeneous(p)))
}
