//! Command line front end for matfit: CSV/JSON loading and the text
//! reports printed by the `matfit` binary.
pub mod commands;
pub mod io;
