#![no_std]

pub mod binary;
pub mod pattern;
