//! # Simple and type-safe client for the WEDOS WAPI.
//!
//! Implements a blocking client for managing the DNS records of domains
//! hosted at WEDOS through their [WAPI].
//!
//! ## Examples
//!
//! ```no_run
//! use wedos_wapi::Client;
//! use wedos_wapi::record::Type;
//!
//! let client = Client::builder()
//!     .user("<USER>")
//!     .key("<WAPI PASSWORD>")
//!     .build()
//!     .unwrap();
//!
//! assert!(client.ping().unwrap());
//!
//! let domain = client.open_domain("example.cz");
//! for record in domain.records().unwrap() {
//!     if record.name == "www" && record.type_ == Type::A {
//!         domain.remove_record(&record).unwrap();
//!     }
//! }
//! domain.add_record("www", Type::A, "192.0.2.1", None).unwrap();
//! domain.commit().unwrap();
//! ```
//!
//! Record changes are staged by WEDOS and only published by
//! [Domain::commit](domain::Domain::commit).
//!
//! [WAPI]: https://kb.wedos.com/en/kategorie/wapi-api-interface/

mod auth;
mod client;
pub mod domain;
mod errors;
mod payload;
pub mod record;
mod response;

pub use client::*;
pub use errors::*;
pub use payload::Payload;
pub use response::*;
