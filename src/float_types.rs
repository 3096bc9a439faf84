// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Bit pattern of a [`Real`], used for exact-equality hashing.
#[cfg(feature = "f32")]
pub type RealBits = u32;
/// Bit pattern of a [`Real`], used for exact-equality hashing.
#[cfg(feature = "f64")]
pub type RealBits = u64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Determinant threshold below which a ray is treated as parallel to a triangle.
pub const PARALLEL_EPSILON: Real = 1e-6;

/// Lazily-initialized tolerance used for box containment checks.
/// Defaults depend on precision (`f32` vs `f64`), but can be overridden:
///  1) **Build-time**: set env var `LEVELTREE_TOLERANCE` (e.g. `LEVELTREE_TOLERANCE=1e-5 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before building any tree
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-4
    }
    #[cfg(feature = "f64")]
    {
        1e-6
    }
}

/// Returns the current tolerance.
/// If not set yet, it tries `LEVELTREE_TOLERANCE` (parsed as the active `Real`) and
/// falls back to a sensible default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        // Compile-time env if provided
        if let Some(environment_variable) = option_env!("LEVELTREE_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `leveltree::float_types::set_tolerance(1e-5);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// Bit pattern of `value` with `-0.0` folded into `0.0`, so that values that
/// compare equal also hash equal.
#[inline]
pub fn real_bits(value: Real) -> RealBits {
    (value + 0.0).to_bits()
}
