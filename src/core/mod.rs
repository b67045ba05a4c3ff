//! Core building blocks: stage detection, compiler parameters and command
//! line construction. These are pure primitives consumed by the `api` module.
pub mod invocation;
pub mod params;
pub mod stage;
