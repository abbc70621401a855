pub mod client;
pub mod request;

pub use client::StraddleClient;
pub use request::RequestOptions;
