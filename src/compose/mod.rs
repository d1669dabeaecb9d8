pub(crate) mod marker;
pub(crate) mod rows;
pub(crate) mod static_box;
pub(crate) mod topic;
