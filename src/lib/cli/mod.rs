//! The command line interface of gypgen
pub mod input;
