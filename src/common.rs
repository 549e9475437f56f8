//! Defines some common functions used in this library.

/// Defines the column-major layout of multi-class score vectors.
pub mod layout;

/// Defines the projection onto the column space of the anchor.
pub mod projection;

/// Defines the random Fourier feature map.
pub mod fourier;

/// Defines some useful functions such as the stable sigmoid.
pub mod utils;

/// Defines some checker functions.
pub(crate) mod checker;
