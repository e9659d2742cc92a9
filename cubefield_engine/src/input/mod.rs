//! Input module - logical key state, pointer deltas and head tracking.

mod bindings;
mod head_tracker;
mod input_state;

pub use bindings::key_for;
pub use head_tracker::{
    open_head_tracker, open_head_tracker_or_none,
    HeadTracker, HeadTrackerMode, SimulatedHeadTracker,
};
pub use input_state::{InputState, Key};
