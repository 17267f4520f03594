// Style classification and affect mapping for synesthe.

pub mod affect;
pub mod classifier;
