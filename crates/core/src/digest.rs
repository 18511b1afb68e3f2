//! MD5 digest helpers for favicon identification.
//!
//! The hash database stores lowercase hex MD5 digests, so both helpers
//! produce 32-character lowercase hex strings.

use std::io::Read;
use std::path::Path;

use md5::{Digest, Md5};

use crate::Error;

/// Lowercase hex MD5 digest of a byte slice.
pub fn md5_hex(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Lowercase hex MD5 digest of a file's contents, read in chunks.
///
/// # Errors
///
/// Returns `Error::Io` if the path does not exist or is unreadable.
pub fn md5_hex_file(path: &Path) -> Result<String, Error> {
    let mut file = std::fs::File::open(path)?;
    let mut hasher = Md5::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
