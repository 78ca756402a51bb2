//! API Layer
//!
//! Client side of the apostas HTTP+JSON contract:
//!
//! | Operation | Method & Path |
//! |---|---|
//! | Login | `POST /api/login` |
//! | Register | `POST /api/register` |
//! | Logout | `POST /api/logout` |
//! | Session probe | `GET /api/profile` |
//! | List bets | `GET /api/apostas` |
//! | Summary | `GET /api/apostas/resumo` |
//! | Create bet | `POST /api/apostas` |
//! | Update bet | `PUT /api/apostas/{id}` |
//! | Delete bet | `DELETE /api/apostas/{id}` |

mod body;
mod client;
mod error;
mod transport;

#[cfg(feature = "native")]
mod http;

#[cfg(test)]
pub mod mock;

pub use body::ResponseBody;
pub use client::ApiClient;
pub use error::{ApiError, ApiResult, CONNECTION_ERROR_MESSAGE};
pub use transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};

#[cfg(feature = "native")]
pub use http::HttpTransport;
