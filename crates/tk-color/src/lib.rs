// SPDX-License-Identifier: MIT
//
// tk-color — Color primitives for tonekit.
//
// A color here is exactly what a stylesheet writes: three 8-bit sRGB
// channels plus an alpha. Parsing accepts the hex, functional, and keyword
// forms theming code actually meets, and the `linear` module exposes the
// shared linear-light lookup table used by every luminance computation.

pub mod color;
pub mod error;
pub mod linear;

pub use color::Color;
pub use error::ParseColorError;
