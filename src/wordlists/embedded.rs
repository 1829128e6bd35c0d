//! Embedded word lists
//!
//! Secret candidates and the guess dictionary, generated from data/ at build
//! time.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
