//! Ambient terminal-output helpers kept from the teacher's `utils/` module.

pub mod terminal_utils;
