pub mod fetch;
pub mod install;
pub mod setup;
