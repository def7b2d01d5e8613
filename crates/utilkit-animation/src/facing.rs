//! Horizontal facing of a sprite, encoded as the sign of its x scale

use utilkit_core::Transform;

/// 1 when facing right, -1 when facing left.
pub fn facing(transform: &Transform) -> i32 {
    if transform.scale.x.is_sign_negative() {
        -1
    } else {
        1
    }
}

pub fn flip(transform: &mut Transform) {
    transform.scale.x = -transform.scale.x;
}

pub fn face_left(transform: &mut Transform) {
    if transform.scale.x > 0.0 {
        flip(transform);
    }
}

pub fn face_right(transform: &mut Transform) {
    if transform.scale.x < 0.0 {
        flip(transform);
    }
}
