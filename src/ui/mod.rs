pub mod app_shell;
pub mod layout;
pub mod textures;
