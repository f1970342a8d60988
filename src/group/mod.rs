pub mod group_models;
pub mod group_repository;

pub use group_models::Group;
pub use group_repository::{GroupMembership, GroupRepository};
