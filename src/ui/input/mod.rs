//! Input handling subsystem for canvas interactions.

pub mod floor_plan_input;
pub mod schedule_input;
