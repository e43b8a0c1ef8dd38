//! The demo language shipped with the `munch` command line tool.

pub mod demo;
