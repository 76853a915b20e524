//! Custom decoder registry
//!
//! Custom decoders are registered per qualified column key and run before
//! built-in conversion; when a key matches, built-in conversion is bypassed
//! entirely for that cell. Storage is type-erased so one registry serves any
//! record type; the typed [`register`](DecoderRegistry::register) helper
//! performs the downcast.

use std::any::{self, Any};
use std::collections::HashMap;
use std::fmt;

use crate::error::BoxError;
use crate::record::Record;

/// Why a custom decoder invocation failed
#[derive(Debug)]
pub(crate) enum CustomFailure {
    /// The decoder was registered for a different record type
    Target { expected: &'static str },
    /// The decoder itself returned an error
    Decoder(BoxError),
}

type ErasedDecoder = Box<dyn Fn(&mut dyn Any, &str) -> Result<(), CustomFailure> + Send + Sync>;

/// Mapping from qualified column key to a custom conversion function
#[derive(Default)]
pub struct DecoderRegistry {
    decoders: HashMap<String, ErasedDecoder>,
}

impl DecoderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom decoder for a qualified column key
    pub fn register<T, F>(&mut self, key: impl Into<String>, decode: F)
    where
        T: Record,
        F: Fn(&mut T, &str) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        let erased: ErasedDecoder = Box::new(move |target, raw| match target.downcast_mut::<T>() {
            Some(record) => decode(record, raw).map_err(CustomFailure::Decoder),
            None => Err(CustomFailure::Target {
                expected: any::type_name::<T>(),
            }),
        });

        self.decoders.insert(key.into(), erased);
    }

    /// Number of registered decoders
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    pub(crate) fn get(&self, key: &str) -> Option<&ErasedDecoder> {
        self.decoders.get(key)
    }
}

impl fmt::Debug for DecoderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoderRegistry")
            .field("keys", &self.decoders.keys().collect::<Vec<_>>())
            .finish()
    }
}
