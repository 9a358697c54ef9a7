//! Event handling module.
//!
//! This module contains the terminal event handler translating user input
//! into store and state mutations. All mutations run synchronously on the
//! main thread; the only other thread is the input poller.

pub mod terminal;
