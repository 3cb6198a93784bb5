//! Entry-point dispatcher for cipher vectors

use std::collections::HashMap;

use cipher_vectors_api::{CipherApi, KeyId, Status};
use cipher_vectors_table::{EntryPoint, TestVector};
use once_cell::sync::Lazy;

use super::error::{HarnessError, Result};

/// Registry key for looking up handlers
#[derive(Hash, Eq, PartialEq, Debug, Clone, Copy)]
pub struct DispatchKey {
    pub entry_point: EntryPoint,
}

/// Handler function type
///
/// The inner `Result` is the status the implementation returned.
pub type HandlerFn =
    fn(&mut dyn CipherApi, KeyId, &TestVector, &mut [u8]) -> std::result::Result<usize, Status>;

/// Global registry of entry-point handlers
pub static REGISTRY: Lazy<HashMap<DispatchKey, HandlerFn>> = Lazy::new(|| {
    let mut m = HashMap::<DispatchKey, HandlerFn>::new();
    insert(&mut m, EntryPoint::Encrypt, encrypt);
    insert(&mut m, EntryPoint::Decrypt, decrypt);
    m
});

/// Helper function for registering handlers
pub fn insert(map: &mut HashMap<DispatchKey, HandlerFn>, entry_point: EntryPoint, handler: HandlerFn) {
    map.insert(DispatchKey { entry_point }, handler);
}

fn encrypt(
    api: &mut dyn CipherApi,
    key: KeyId,
    vector: &TestVector,
    output: &mut [u8],
) -> std::result::Result<usize, Status> {
    api.cipher_encrypt(key, vector.algorithm, vector.input.as_slice(), output)
}

fn decrypt(
    api: &mut dyn CipherApi,
    key: KeyId,
    vector: &TestVector,
    output: &mut [u8],
) -> std::result::Result<usize, Status> {
    api.cipher_decrypt(key, vector.algorithm, vector.input.as_slice(), output)
}

/// Invoke the handler registered for `entry_point`
pub fn dispatch(
    api: &mut dyn CipherApi,
    entry_point: EntryPoint,
    key: KeyId,
    vector: &TestVector,
    output: &mut [u8],
) -> Result<std::result::Result<usize, Status>> {
    let handler = REGISTRY
        .get(&DispatchKey { entry_point })
        .ok_or(HarnessError::Unsupported(entry_point))?;
    Ok(handler(api, key, vector, output))
}
