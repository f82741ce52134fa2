pub mod catalog;
pub mod generate;
pub mod history;
pub mod present;
pub mod prompt;
pub mod session;
