// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod repos;
pub mod time;
pub mod util;

pub use repos::{BusyRepo, FailingRepo, ScriptedRepo};
pub use time::{FixedClock, fixed_now};
pub use util::{EchoSlug, FixedSuffixResolver};
