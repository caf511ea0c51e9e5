mod action_queue;
mod actions;
mod event_loop;
mod views;

pub use event_loop::{run_app, Timers};
