//! Embedded vocabulary
//!
//! Weighted word list compiled into the binary at build time.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/weighted_words.rs"));
