pub mod daemon;
pub mod doctor;
pub mod init;
pub mod key;
pub mod reload;
pub mod start;
pub mod status;
pub mod stop;
