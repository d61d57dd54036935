//! Core game types and logic (entities, input, motion, rules, loop).
//!
//! Re-exports:
//! - `player`: Player data and defaults
//! - `gem`: The gem and its spawn point
//! - `collision`: Bounding boxes and the overlap test
//! - `process_events`: Held keys to movement, input source trait
//! - `motion`: Clamped fixed-speed movement
//! - `game`: Game state and the level rule
//! - `frame_limiter`: 60 Hz frame cap
//! - `frame_loop`: Running/Terminated loop

pub mod collision;
pub mod frame_limiter;
pub mod frame_loop;
pub mod game;
pub mod gem;
pub mod motion;
pub mod player;
pub mod process_events;
