//! HTTP transport layer.

pub mod endpoints;
mod error;
mod http;
mod request;
mod response;
mod reqwest;

pub use self::reqwest::ReqwestTransport;
pub use error::TransportError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use request::RequestBuilder;
pub use response::ResponseParser;
