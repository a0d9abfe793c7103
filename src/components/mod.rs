pub mod command_bar;
pub mod profile_row;
