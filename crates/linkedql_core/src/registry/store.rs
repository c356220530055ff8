use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde_json::{Map, Value as Json};
use tracing::debug;

use crate::registry::decode::decode_shape;
use crate::registry::{DecodeOptions, Decoder, RegistryError, RegistryItem, Result, Shape, ShapeDescriptor, ShapeLayout};

pub(crate) type DecodeFn = fn(&Decoder<'_>, &ShapeDescriptor, &Map<String, Json>, u32) -> Result<Box<dyn RegistryItem>>;

/// Registered shape with its decode routine.
pub struct ShapeEntry {
	/// Registration descriptor.
	pub descriptor: ShapeDescriptor,
	pub(crate) decode: DecodeFn,
}

impl std::fmt::Debug for ShapeEntry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ShapeEntry").field("descriptor", &self.descriptor).finish_non_exhaustive()
	}
}

/// Immutable bidirectional mapping between discriminators and shapes.
#[derive(Debug, Default)]
pub struct TypeRegistry {
	by_name: HashMap<&'static str, ShapeEntry>,
	by_type: HashMap<TypeId, &'static str>,
}

impl TypeRegistry {
	/// Start a registration phase.
	pub fn builder() -> RegistryBuilder {
		RegistryBuilder::default()
	}

	/// Look up a shape by discriminator.
	pub fn lookup(&self, name: &str) -> Option<&ShapeEntry> {
		self.by_name.get(name)
	}

	/// Whether a discriminator is registered.
	pub fn contains(&self, name: &str) -> bool {
		self.by_name.contains_key(name)
	}

	/// Discriminator registered for Rust type `S`.
	pub fn name_of<S: Shape>(&self) -> Option<&'static str> {
		self.by_type.get(&TypeId::of::<S>()).copied()
	}

	/// Number of registered shapes.
	pub fn len(&self) -> usize {
		self.by_name.len()
	}

	/// Whether no shapes are registered.
	pub fn is_empty(&self) -> bool {
		self.by_name.is_empty()
	}

	/// Registered descriptors sorted by discriminator.
	pub fn shapes(&self) -> Vec<&ShapeDescriptor> {
		let mut out: Vec<_> = self.by_name.values().map(|entry| &entry.descriptor).collect();
		out.sort_by_key(|descriptor| descriptor.name);
		out
	}

	fn insert<S: Shape>(&mut self) -> std::result::Result<(), RegistryError> {
		let descriptor = S::descriptor();
		if let ShapeLayout::Atomic { native } = descriptor.layout {
			return Err(RegistryError::InvalidRegistrant { name: descriptor.name, native });
		}
		if self.by_name.contains_key(descriptor.name) {
			return Err(RegistryError::DuplicateRegistration { name: descriptor.name });
		}

		let name = descriptor.name;
		debug!(item_type = name, fields = descriptor.fields().len(), "registered shape");
		self.by_type.insert(TypeId::of::<S>(), name);
		self.by_name.insert(
			name,
			ShapeEntry {
				descriptor,
				decode: decode_shape::<S>,
			},
		);
		Ok(())
	}
}

/// Startup-phase registry under construction.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
	registry: TypeRegistry,
	errors: Vec<RegistryError>,
}

impl RegistryBuilder {
	/// Empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Register shape `S`, keeping any earlier mapping on failure.
	pub fn register<S: Shape>(&mut self) -> std::result::Result<(), RegistryError> {
		self.registry.insert::<S>()
	}

	/// Chainable registration; failures are collected and reported by [`finish`](Self::finish).
	pub fn with<S: Shape>(mut self) -> Self {
		if let Err(err) = self.register::<S>() {
			self.errors.push(err);
		}
		self
	}

	/// Freeze the registry, or report every failure collected by [`with`](Self::with).
	pub fn finish(self) -> std::result::Result<TypeRegistry, RegistryError> {
		if self.errors.is_empty() {
			Ok(self.registry)
		} else {
			Err(RegistryError::Startup(self.errors))
		}
	}
}

/// Registry guarded by a reader/writer lock for late registration alongside decoding.
#[derive(Debug, Default)]
pub struct SharedRegistry {
	inner: RwLock<TypeRegistry>,
	options: DecodeOptions,
}

impl SharedRegistry {
	/// Wrap an already-built registry.
	pub fn new(registry: TypeRegistry, options: DecodeOptions) -> Self {
		Self {
			inner: RwLock::new(registry),
			options,
		}
	}

	/// Register shape `S` under the write lock.
	pub fn register<S: Shape>(&self) -> std::result::Result<(), RegistryError> {
		self.inner.write().unwrap_or_else(PoisonError::into_inner).insert::<S>()
	}

	/// Whether a discriminator is registered.
	pub fn contains(&self, name: &str) -> bool {
		self.inner.read().unwrap_or_else(PoisonError::into_inner).contains(name)
	}

	/// Decode one document under the read lock.
	pub fn decode(&self, bytes: &[u8]) -> Result<Box<dyn RegistryItem>> {
		let registry = self.inner.read().unwrap_or_else(PoisonError::into_inner);
		Decoder::with_options(&registry, self.options.clone()).decode(bytes)
	}
}
