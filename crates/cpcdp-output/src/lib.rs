//! Validated JSON serialization of CPCDP records.
//!
//! [`Serializer`] is the gate in front of the platform upload: it runs the
//! record validator and only encodes records that pass.
//!
//! ```ignore
//! use cpcdp_output::{Serializer, SerializerOptions};
//!
//! let serializer = Serializer::new(SerializerOptions::from_env())?;
//! let body = serializer.serialize(&first_aid)?;
//! ```

pub mod adapters;
pub mod encoder;
pub mod error;
pub mod gate;
pub mod options;

pub use adapters::{decode_key, decode_key_list, join_keys};
pub use encoder::{Encoder, check_date_format};
pub use error::{SerializeError, SerializeResult};
pub use gate::{Serializer, serialize, to_document};
pub use options::{DEFAULT_DATE_FORMAT, FieldNaming, PRETTY_ENV, SerializerOptions};
