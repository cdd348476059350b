// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Unit conversion
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
pub const MICRON: Real = 0.001;
pub const MM: Real = 1.0;
pub const INCH: Real = 25.4;
pub const FOOT: Real = 25.4 * 12.0;
pub const METER: Real = 1000.0;

/// Millimetres per unit for the unit names AMF allows on its root element.
///
/// Unknown names give `None`. AMF defaults to millimetres when the
/// attribute is absent, which callers handle themselves.
pub fn unit_scale(unit: &str) -> Option<Real> {
    match unit.trim().to_ascii_lowercase().as_str() {
        "millimeter" | "millimetre" | "mm" => Some(MM),
        "inch" | "in" => Some(INCH),
        "feet" | "foot" | "ft" => Some(FOOT),
        "meter" | "metre" | "m" => Some(METER),
        "micron" | "micrometer" | "um" => Some(MICRON),
        _ => None,
    }
}
