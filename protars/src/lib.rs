#[cfg(feature = "core")]
#[doc(inline)]
pub use protars_core as core;

#[cfg(feature = "decoys")]
#[doc(inline)]
pub use protars_decoys as decoys;
