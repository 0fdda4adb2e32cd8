//! MARTA arrivals board server.
//!
//! A web application that shows real-time train arrivals for the four
//! MARTA rail lines, grouped by station and filterable by arrival window,
//! schedule, direction, and station.

pub mod board;
pub mod cache;
pub mod directory;
pub mod domain;
pub mod marta;
pub mod web;
