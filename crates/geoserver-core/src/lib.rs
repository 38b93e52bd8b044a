//! # GeoServer catalog model
//!
//! Rust structs for GeoServer's REST resource representations, plus the wire
//! codecs for the fields whose JSON shape varies by server state.
//!
//! Two decoding tiers apply throughout:
//!
//! - **Lenient**: keywords, style references, and style lists arrive in
//!   several shapes depending on cardinality and server version. Their
//!   codecs ([`Keywords`], [`StyleRef`], [`StyleList`]) absorb every known
//!   shape and degrade unknown ones to an empty value instead of erroring.
//! - **Strict**: every other field maps one-to-one onto the wire and a
//!   mismatch surfaces as a serde error, because there it signals a real
//!   incompatibility rather than a known quirk.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod about;
pub mod bounds;
pub mod coverage;
pub mod coveragestore;
pub mod datastore;
pub mod featuretype;
pub mod keywords;
pub mod layer;
pub mod layergroup;
pub mod refs;
pub mod style;
pub mod workspace;

pub use about::AboutResponse;
pub use bounds::{BoundingBox, Crs};
pub use coverage::{Coverage, CoverageBody, CoveragesResponse};
pub use coveragestore::{CoverageStore, CoverageStoreBody, CoverageStoresResponse};
pub use datastore::{ConnectionParams, DataStore, DataStoreBody, DataStoresResponse, ParamEntry};
pub use featuretype::{Attribute, Attributes, FeatureType, FeatureTypeBody, FeatureTypesResponse};
pub use keywords::Keywords;
pub use layer::{Attribution, Layer, LayerBody, LayersResponse};
pub use layergroup::{LayerGroup, LayerGroupBody, LayerGroupsResponse, Publishables};
pub use refs::{ResourceRef, TypedRef};
pub use style::{LanguageVersion, StyleBody, StyleInfo, StyleList, StyleRef, StylesResponse};
pub use workspace::{Workspace, WorkspaceBody, WorkspacesResponse};
