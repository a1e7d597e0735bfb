pub mod explain;
pub mod intent;
pub mod planner;
