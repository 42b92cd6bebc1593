mod all;
mod detail;
mod footer;
mod list;
mod log;

use super::*;

pub use all::all as render;
