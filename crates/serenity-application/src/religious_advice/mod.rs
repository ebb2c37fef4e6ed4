//! Faith-aware advice lookup.
//!
//! # Module Structure
//!
//! - `religion`: The closed set of supported traditions and tag parsing
//! - `catalog`: Static per-religion tables with fallback entries
//! - `usecase`: `ReligiousAdviceUseCase`, the public lookup surface

mod catalog;
mod religion;
mod usecase;

pub use religion::Religion;
pub use usecase::ReligiousAdviceUseCase;
