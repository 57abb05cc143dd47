pub mod config;
pub mod logging;

pub mod codec;
pub mod error;
pub mod proxy_url;

pub use error::ProxyUrlError;
pub use proxy_url::{build_proxy_url, proxy_picture, EncodingScheme, ProxyRequest};
