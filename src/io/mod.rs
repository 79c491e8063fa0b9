//! Text input and output.
//!
//! Every type in this crate implements [`Display`](core::fmt::Display) and
//! [`FromStr`](core::str::FromStr) on top of the helpers in [`text`].

pub mod text;

pub use text::{parse_scalars, write_scalars};
