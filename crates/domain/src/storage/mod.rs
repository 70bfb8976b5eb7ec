//! Storage abstractions the data tier runs its timed queries through.

mod traits;

pub use traits::*;
