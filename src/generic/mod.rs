//! Generic components, with no dependence on the rest of the library.

pub mod minimal_pcg;
