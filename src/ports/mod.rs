pub mod http;
pub mod song_details;
