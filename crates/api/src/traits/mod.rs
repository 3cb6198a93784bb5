//! Traits implemented by a cipher API under test

pub mod cipher;

pub use cipher::CipherApi;
