use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{Error, Result};

/// A binary operation that can be named in a `reduce`.
///
/// Operations have a canonical name (`add`, `multiply`, ...) which is
/// also what they display as. The arithmetic symbols (`+`, `*`, ...) are
/// accepted as aliases when parsing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Operation {
    #[strum(to_string = "add", serialize = "+")]
    Add,
    #[strum(to_string = "subtract", serialize = "-")]
    Subtract,
    #[strum(to_string = "multiply", serialize = "*")]
    Multiply,
    #[strum(to_string = "divide", serialize = "/")]
    Divide,
    #[strum(to_string = "remainder", serialize = "%")]
    Remainder,
}

/// The binary function an [`Operation`] resolves to.
pub type BinaryFn<T> = fn(T, T) -> Result<T>;

impl Operation {
    /// Look up the concrete function implementing this operation for `T`.
    pub fn function<T: Operand>(self) -> BinaryFn<T> {
        match self {
            Operation::Add => T::try_add,
            Operation::Subtract => T::try_subtract,
            Operation::Multiply => T::try_multiply,
            Operation::Divide => T::try_divide,
            Operation::Remainder => T::try_remainder,
        }
    }

    /// Apply this operation to `left` and `right`.
    pub fn apply<T: Operand>(self, left: T, right: T) -> Result<T> {
        (self.function::<T>())(left, right)
    }
}

/// A type that named operations can be applied to.
///
/// Every operation is unsupported unless the implementation overrides it.
pub trait Operand: Sized {
    fn try_add(self, _rhs: Self) -> Result<Self> {
        Err(Error::Unsupported(Operation::Add))
    }

    fn try_subtract(self, _rhs: Self) -> Result<Self> {
        Err(Error::Unsupported(Operation::Subtract))
    }

    fn try_multiply(self, _rhs: Self) -> Result<Self> {
        Err(Error::Unsupported(Operation::Multiply))
    }

    fn try_divide(self, _rhs: Self) -> Result<Self> {
        Err(Error::Unsupported(Operation::Divide))
    }

    fn try_remainder(self, _rhs: Self) -> Result<Self> {
        Err(Error::Unsupported(Operation::Remainder))
    }
}

macro_rules! integer_operand {
    ($($t:ty),*) => {
        $(
            impl Operand for $t {
                #[inline]
                fn try_add(self, rhs: Self) -> Result<Self> {
                    self.checked_add(rhs).ok_or(Error::Overflow(Operation::Add))
                }

                #[inline]
                fn try_subtract(self, rhs: Self) -> Result<Self> {
                    self.checked_sub(rhs)
                        .ok_or(Error::Overflow(Operation::Subtract))
                }

                #[inline]
                fn try_multiply(self, rhs: Self) -> Result<Self> {
                    self.checked_mul(rhs)
                        .ok_or(Error::Overflow(Operation::Multiply))
                }

                #[inline]
                fn try_divide(self, rhs: Self) -> Result<Self> {
                    if rhs == 0 {
                        return Err(Error::DivisionByZero);
                    }
                    // MIN / -1 for signed types
                    self.checked_div(rhs).ok_or(Error::Overflow(Operation::Divide))
                }

                #[inline]
                fn try_remainder(self, rhs: Self) -> Result<Self> {
                    if rhs == 0 {
                        return Err(Error::DivisionByZero);
                    }
                    self.checked_rem(rhs)
                        .ok_or(Error::Overflow(Operation::Remainder))
                }
            }
        )*
    };
}

integer_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_operand {
    ($($t:ty),*) => {
        $(
            impl Operand for $t {
                #[inline]
                fn try_add(self, rhs: Self) -> Result<Self> {
                    Ok(self + rhs)
                }

                #[inline]
                fn try_subtract(self, rhs: Self) -> Result<Self> {
                    Ok(self - rhs)
                }

                #[inline]
                fn try_multiply(self, rhs: Self) -> Result<Self> {
                    Ok(self * rhs)
                }

                #[inline]
                fn try_divide(self, rhs: Self) -> Result<Self> {
                    Ok(self / rhs)
                }

                #[inline]
                fn try_remainder(self, rhs: Self) -> Result<Self> {
                    Ok(self % rhs)
                }
            }
        )*
    };
}

float_operand!(f32, f64);

// strings only know how to concatenate
impl Operand for String {
    fn try_add(mut self, rhs: Self) -> Result<Self> {
        self.push_str(&rhs);
        Ok(self)
    }
}
