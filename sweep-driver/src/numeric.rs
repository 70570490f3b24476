pub(crate) fn degree_to_radian(degree: f64) -> f64 {
    degree * std::f64::consts::PI / 180.
}

/// Projects a polar measurement onto the plane, 0° along +x and counter-clockwise positive.
pub(crate) fn to_cartesian(angle_radian: f64, distance: f64) -> (f64, f64) {
    (distance * angle_radian.cos(), distance * angle_radian.sin())
}

pub(crate) fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

pub(crate) fn to_string(data: &[u8]) -> String {
    strip_line_ending(&String::from_utf8_lossy(data)).to_string()
}
