pub mod contact;
pub mod profile;
pub mod skills;
