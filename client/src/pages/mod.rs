pub mod home;
pub mod maps;
