/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// All logic for converting external representations into internal ones
mod import;

/// All logic for exporting internal representations into external ones
mod export;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use import::import;
