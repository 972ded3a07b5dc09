#![cfg_attr(not(feature = "std"), no_std)]


// 'alloc' is used for owned strings in error values and serialization.
extern crate alloc;

// --- Foundation Modules ---
pub mod types;
pub mod version;

// --- Type Dictionary ---
pub mod dictionary;

// --- Top-level Exports ---
pub use types::{Category, ParseCategoryError, ParseRepresentationError, Representation};
pub use version::{ParseVersionError, Version};
pub use dictionary::{DataItemDefinition, lookup};
