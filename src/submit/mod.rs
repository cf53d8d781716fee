//! Submit collaborator seam
//!
//! The form engine hands validated values to a [`SubmitHandler`] and only
//! cares whether it succeeded.

mod logger;
mod traits;

pub use logger::LogSubmitHandler;
pub use traits::SubmitHandler;

#[cfg(test)]
pub use traits::MockSubmitHandler;
