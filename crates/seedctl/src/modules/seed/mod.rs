mod actions;
pub(crate) mod descriptors;
mod report;

pub(crate) use actions::run_seed;
pub(crate) use descriptors::{SeedUser, TEST_USERS};
pub(crate) use report::print_credentials_table;
