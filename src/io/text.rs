//! Whitespace separated decimal text.
//!
//! Values are written in memory order (column by column for matrices) and
//! read back with a small nom scanner. Reading stops after the expected count;
//! anything following is ignored.

use core::fmt;

use nom::{
    IResult,
    character::complete::{multispace0, one_of},
    combinator::{opt, recognize},
    number::complete::recognize_float_or_exceptions,
    sequence::{pair, preceded},
};

use crate::errors::{MathError, MathResult};
use crate::float_types::Scalar;

/// One decimal token, skipping leading whitespace of any kind.
/// The explicit sign lets `-inf` through, which the float recognizer rejects.
fn scalar_token(input: &str) -> IResult<&str, &str> {
    preceded(
        multispace0,
        recognize(pair(opt(one_of("+-")), recognize_float_or_exceptions)),
    )(input)
}

/// Reads exactly `N` numbers from the start of `input`.
pub fn parse_scalars<T: Scalar, const N: usize>(
    input: &str,
    type_name: &'static str,
) -> MathResult<[T; N]> {
    let mut out = [T::zero(); N];
    let mut rest = input;
    for (i, slot) in out.iter_mut().enumerate() {
        let (next, token) = scalar_token(rest).map_err(|_| {
            if rest.trim().is_empty() {
                MathError::parse(type_name, N, format!("found only {i}"))
            } else {
                MathError::parse(type_name, N, format!("no number at {:?}", rest.trim_start()))
            }
        })?;
        *slot = token.parse::<T>().map_err(|_| {
            MathError::parse(type_name, N, format!("invalid number {token:?}"))
        })?;
        rest = next;
    }
    Ok(out)
}

/// Writes `values` separated by single spaces.
pub fn write_scalars<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{v}")?;
    }
    Ok(())
}
