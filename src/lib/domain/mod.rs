//! The data the GYP writer works on: the resolved build graph, its items and
//! the configuration groups built on top of them
pub mod config_group;
pub mod graph;
pub mod grouping;
pub mod source;
pub mod target;
pub mod toolchain;
