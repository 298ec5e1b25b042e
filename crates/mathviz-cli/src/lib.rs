pub mod commands;
pub mod console;
pub mod util;
