pub mod move_animation;
pub mod playback;

pub use move_animation::{LegFrame, LegPlan, MoveAnimator, MovePlan};
pub use playback::FramePlayback;
