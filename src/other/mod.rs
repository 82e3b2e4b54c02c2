pub mod numeric;
pub mod partition;
pub mod rotate;
pub mod search;
