#![cfg(feature = "serde")]

use rotation_core::{AxisAngle, EulerAngles, EulerSequence, Quaternion, RotationMatrix, Vector3, Zxz};

#[test]
fn quaternion_serializes_by_component() {
    let q = Quaternion::new(0.0, 0.5, -0.5, 1.0);
    let json = serde_json::to_string(&q).unwrap();
    assert_eq!(json, r#"{"x":0.0,"y":0.5,"z":-0.5,"w":1.0}"#);
    let back: Quaternion = serde_json::from_str(&json).unwrap();
    assert_eq!(back, q);
}

#[test]
fn euler_angles_omit_the_marker() {
    let e = EulerAngles::<Zxz>::new(0.25, 0.5, 0.75);
    let json = serde_json::to_string(&e).unwrap();
    assert_eq!(json, r#"{"x":0.25,"y":0.5,"z":0.75}"#);
    let back: EulerAngles<Zxz> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, e);
}

#[test]
fn sequence_uses_lowercase_names() {
    let json = serde_json::to_string(&EulerSequence::Yzx).unwrap();
    assert_eq!(json, r#""yzx""#);
    let back: EulerSequence = serde_json::from_str(r#""zyz""#).unwrap();
    assert_eq!(back, EulerSequence::Zyz);
}

#[test]
fn matrix_and_axis_angle_survive_json() {
    let m = RotationMatrix::about_y(0.5);
    let back: RotationMatrix = serde_json::from_str(&serde_json::to_string(&m).unwrap()).unwrap();
    assert!(back.max_difference(&m) < 1e-15);

    let aa = AxisAngle::new(Vector3::new(0.0, 3.0, 4.0), 1.25);
    let back: AxisAngle = serde_json::from_str(&serde_json::to_string(&aa).unwrap()).unwrap();
    assert!((back.axis() - aa.axis()).magnitude() < 1e-15);
    assert_eq!(back.angle(), aa.angle());
}
