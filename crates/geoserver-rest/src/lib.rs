//! # GeoServer REST client
//!
//! A thin, stateless client for GeoServer's REST configuration API:
//! workspaces, data stores, coverage stores, feature types, coverages,
//! layers, layer groups and styles, mapped onto the structs in
//! [`geoserver_core`].
//!
//! Every operation is a single request/response round trip with no retry,
//! caching or shared mutable state; concurrency is entirely the caller's
//! affair. Non-2xx responses surface as [`Error::Api`] with the server's
//! body text attached, unchanged.
//!
//! ```no_run
//! use geoserver_rest::{GeoserverClient, GeoserverConfig};
//!
//! # async fn run() -> Result<(), geoserver_rest::Error> {
//! let client = GeoserverClient::new(
//!     GeoserverConfig::default()
//!         .with_base_url("http://localhost:8080/geoserver")
//!         .with_credentials("admin", "geoserver"),
//! )?;
//! for ws in client.get_workspaces().await? {
//!     println!("{}", ws.name);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod about;
pub mod client;
pub mod error;
mod coverages;
mod coveragestores;
mod datastores;
mod featuretypes;
mod layergroups;
mod layers;
pub mod paths;
mod styles;
mod workspaces;

pub use client::{GeoserverClient, GeoserverConfig};
pub use error::Error;
