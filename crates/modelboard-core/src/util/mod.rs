//! Utility functions.

mod collate;

pub use collate::locale_cmp;
