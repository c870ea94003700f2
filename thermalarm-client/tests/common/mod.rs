#![allow(dead_code)]

pub mod recorder;
pub mod scripted_remote;
