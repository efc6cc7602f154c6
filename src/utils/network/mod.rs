pub mod request;
pub mod m3u;
