pub mod details;
pub mod http;
pub mod music_api;
