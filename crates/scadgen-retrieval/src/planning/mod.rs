mod planner;

pub use planner::QueryPlanner;
