mod footer;
mod input;
mod log;
mod main;
mod task_list;

use super::*;

pub use main::main as render;
