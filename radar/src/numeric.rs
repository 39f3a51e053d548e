pub(crate) fn degree_to_radian(degree: f64) -> f64 {
    degree * std::f64::consts::PI / 180.
}

pub(crate) fn radian_to_degree(radian: f64) -> f64 {
    radian * 180. / std::f64::consts::PI
}

/// Bin index of an angle: rounded to the nearest degree and wrapped into `0..360`.
pub(crate) fn angle_bin(angle_degrees: f64) -> usize {
    (angle_degrees.round().rem_euclid(360.)) as usize % 360
}
