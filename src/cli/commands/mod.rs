pub mod config;
pub mod export;
pub mod init;
pub mod overused;
pub mod recommend;
pub mod session;
pub mod stats;
pub mod tariff;
pub mod validate;
