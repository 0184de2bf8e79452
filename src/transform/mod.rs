//! Pure style transforms.
//!
//! Every function maps an input value plus a little context to either a
//! rewritten value or `None` for "no change". Nothing in here touches the
//! document; the engine decides where outputs land.

mod background;
mod border;
mod gradient;
mod invert;
mod text;
mod vector;

pub use background::darken_background;
pub use border::{darken_border, flatten_side_border};
pub use gradient::{darken_gradient, gradient_is_dark};
pub use invert::INVERT_FILTER;
pub use text::{LIGHT_TEXT, lighten_text};
pub use vector::lighten_vector_paint;
