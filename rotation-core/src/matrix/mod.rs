mod rotation_matrix;
mod vector3;

pub use rotation_matrix::RotationMatrix;
pub use vector3::Vector3;
