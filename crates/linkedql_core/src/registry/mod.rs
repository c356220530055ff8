mod decode;
mod error;
mod item;
mod shape;
mod store;
#[cfg(test)]
mod test_support;
mod value;

/// Registry-driven item decoding entry points and options.
pub use decode::{DecodeOptions, Decoder, WIRE_TYPE_KEY};
/// Error and result aliases.
pub use error::{DecodeError, RegistryError, Result};
/// Decoded item trait and field payloads.
pub use item::{FieldData, RegistryItem, Shape};
/// Registry storage, builder, and lock-guarded variant.
pub use store::{RegistryBuilder, ShapeEntry, SharedRegistry, TypeRegistry};
/// Shape descriptor tables.
pub use shape::{FieldKind, FieldSpec, ShapeDescriptor, ShapeLayout};
/// JSON-LD value model and parser.
pub use value::{BlankNode, Iri, Value, XSD, XSD_BOOLEAN, XSD_FLOAT, XSD_INTEGER, parse_value};
