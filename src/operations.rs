//! Arithmetic operations
//!
//! `add`, `subtract` and `multiply` widen their operands first, so integer
//! results never overflow: `i8`/`i16`/`i32`/`u8`/`u16`/`u32` compute in `i64`,
//! `i64` computes in `i128`, floats stay as they are. `divide` always yields
//! `f64` and rejects a zero divisor up front.

use std::ops::{Add, Mul, Sub};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Cannot divide by zero!")]
pub struct DivisionByZeroError;

/// A numeric operand and the type its sums and products are computed in.
pub trait Operand: Copy {
    type Wide: Add<Output = Self::Wide> + Sub<Output = Self::Wide> + Mul<Output = Self::Wide>;

    fn widen(self) -> Self::Wide;
}

macro_rules! impl_operand {
    ($($ty:ty => $wide:ty),* $(,)?) => {
        $(
            impl Operand for $ty {
                type Wide = $wide;

                fn widen(self) -> $wide {
                    <$wide>::from(self)
                }
            }
        )*
    };
}

impl_operand! {
    i8 => i64,
    i16 => i64,
    i32 => i64,
    i64 => i128,
    u8 => i64,
    u16 => i64,
    u32 => i64,
    f32 => f32,
    f64 => f64,
}

pub fn add<T: Operand>(a: T, b: T) -> T::Wide {
    a.widen() + b.widen()
}

pub fn subtract<T: Operand>(a: T, b: T) -> T::Wide {
    a.widen() - b.widen()
}

pub fn multiply<T: Operand>(a: T, b: T) -> T::Wide {
    a.widen() * b.widen()
}

/// Divides `a` by `b` as floating point.
///
/// # Errors
///
/// Returns [`DivisionByZeroError`] when `b` is zero (either sign).
pub fn divide<T: Into<f64>>(a: T, b: T) -> Result<f64, DivisionByZeroError> {
    let (a, b) = (a.into(), b.into());
    if b == 0.0 {
        #[cfg(feature = "tracing")]
        tracing::warn!(dividend = a, "division by zero rejected");
        return Err(DivisionByZeroError);
    }
    Ok(a / b)
}
