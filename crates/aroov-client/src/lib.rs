//! aroov-client: talks to the Aroov Trip backend.
//!
//! Every call goes through a [`Gateway`], whose single operation turns an HTTP
//! exchange into a `Result`. Nothing past this boundary panics or throws: a
//! refused connection, a 409 with `{"error": "Already added"}` and a malformed
//! body all come back as [`GatewayError`] values.
//!
//! [`Api`] layers typed endpoints over any gateway, so controllers and tests
//! share the same request shapes:
//!
//! ```no_run
//! use std::rc::Rc;
//! use aroov_client::{Api, HttpGateway};
//! use aroov_types::ListQuery;
//!
//! # async fn demo() -> Result<(), aroov_client::GatewayError> {
//! let gateway = HttpGateway::new("http://localhost:3000", 10)?;
//! let api = Api::new(Rc::new(gateway));
//! let page = api.destinations(&ListQuery::default()).await?;
//! println!("{} destinations on page 1 of {}", page.items.len(), page.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod gateway;
pub mod http;

pub use api::Api;
pub use error::{GatewayError, Result};
pub use gateway::{Gateway, Method};
pub use http::HttpGateway;
