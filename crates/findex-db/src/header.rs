//! Fixed database header.

use findex_core::DecodeError;

/// Magic signature at the start of every mlocate database: `"\0mlocate"`.
pub const MAGIC: [u8; 8] = [0x00, b'm', b'l', b'o', b'c', b'a', b't', b'e'];

/// Length of the fixed header prefix: magic, config size, version,
/// visibility flag, and padding. The record stream starts at
/// `HEADER_PREFIX_LEN + config_size`.
pub const HEADER_PREFIX_LEN: usize = 16;

/// Entry type byte for a file.
pub const ENTRY_FILE: u8 = 0;

/// Entry type byte for a subdirectory.
pub const ENTRY_DIRECTORY: u8 = 1;

/// Entry type byte terminating a directory's entry list.
pub const ENTRY_END: u8 = 2;

/// Parsed fixed header of an mlocate database.
#[derive(Debug, Clone)]
pub struct Header {
    /// Size in bytes of the opaque configuration block.
    pub config_size: u32,
    /// Format version byte. Retained for display; parsing never branches
    /// on it.
    pub version: u8,
    /// Whether the database requires visibility checks before reporting
    /// paths. Retained but unused by decoding.
    pub require_visibility: u8,
    /// Root path the database was built from.
    pub root_path: String,
}

impl Header {
    /// Parse the fixed header at the start of `data`.
    ///
    /// The magic bytes are checked before anything else is read; a
    /// mismatch is fatal with no attempt at recovery.
    pub fn parse(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() < MAGIC.len() {
            return Err(DecodeError::UnexpectedEof {
                offset: data.len(),
                needed: MAGIC.len() - data.len(),
            });
        }
        if data[..MAGIC.len()] != MAGIC {
            return Err(DecodeError::InvalidFormat {
                found: data[..MAGIC.len()].to_vec(),
            });
        }
        if data.len() < HEADER_PREFIX_LEN {
            return Err(DecodeError::UnexpectedEof {
                offset: data.len(),
                needed: HEADER_PREFIX_LEN - data.len(),
            });
        }

        let config_size = u32::from_be_bytes([data[8], data[9], data[10], data[11]]);
        let version = data[12];
        let require_visibility = data[13];
        // data[14..16] is padding

        let root_path = read_root_path(data, HEADER_PREFIX_LEN)?;

        Ok(Self {
            config_size,
            version,
            require_visibility,
            root_path,
        })
    }
}

/// Read the null-terminated root path starting at `offset`.
///
/// Path bytes are decoded lossily; real filesystems contain non-UTF-8
/// names and the format does not guarantee validity.
fn read_root_path(data: &[u8], offset: usize) -> Result<String, DecodeError> {
    let rest = &data[offset..];
    let null = rest
        .iter()
        .position(|&b| b == 0)
        .ok_or(DecodeError::CorruptRecord { offset })?;
    Ok(String::from_utf8_lossy(&rest[..null]).into_owned())
}
