//! Record stream decoder.

use std::path::Path;

use findex_core::{DecodeError, PathSet};

use crate::header::{ENTRY_END, HEADER_PREFIX_LEN, Header};

/// Size of the per-directory header: time_sec (8), time_nsec (4),
/// padding (4). Consumed and discarded; this reader does not use
/// directory mtimes.
const DIR_HEADER_LEN: usize = 16;

/// A fully decoded mlocate database.
///
/// Holds every path the database indexes, deduplicated and in record
/// order, together with the header metadata worth displaying. The entire
/// file is decoded up front; there is no streaming access.
#[derive(Debug, Clone)]
pub struct Database {
    paths: PathSet,
    root_path: String,
    version: u8,
}

impl Database {
    /// Read and decode a database file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DecodeError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| DecodeError::io(path, e))?;
        Self::decode(&data)
    }

    /// Decode a database from its raw bytes.
    ///
    /// Decoding is all-or-nothing: any structural error is returned
    /// without a partial path set.
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let header = Header::parse(data)?;

        let mut reader = Reader::new(data);
        // The record stream starts at a fixed offset derived from the
        // header, not wherever root path parsing stopped: the root path
        // lives inside the config block region.
        reader.seek(HEADER_PREFIX_LEN + header.config_size as usize)?;

        let mut paths = PathSet::new();
        while reader.remaining() >= DIR_HEADER_LEN {
            reader.skip(DIR_HEADER_LEN);
            let dir_path = reader.read_cstring()?;
            paths.insert(dir_path.clone());

            loop {
                let Some(entry_type) = reader.read_u8() else {
                    break;
                };
                if entry_type == ENTRY_END {
                    break;
                }
                // File and directory entries both just contribute a path;
                // unknown type bytes carry a name like any other entry.
                let name = reader.read_cstring()?;
                paths.insert(join(&dir_path, &name));
            }
        }

        tracing::debug!(
            target: "findex_db",
            paths = paths.len(),
            version = header.version,
            root = %header.root_path,
            "decoded database"
        );

        Ok(Self {
            paths,
            root_path: header.root_path,
            version: header.version,
        })
    }

    /// All indexed paths, deduplicated, in record order.
    pub fn paths(&self) -> &PathSet {
        &self.paths
    }

    /// Root path the database was built from.
    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    /// Format version byte from the header.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Number of unique paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if the database contains no paths.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Join a directory path and an entry name without doubling the
/// separator under the filesystem root.
fn join(dir_path: &str, name: &str) -> String {
    if dir_path == "/" {
        format!("/{name}")
    } else {
        format!("{dir_path}/{name}")
    }
}

/// Bounds-checked cursor over the raw database bytes.
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Move the cursor to an absolute offset. Seeking exactly to the end
    /// of the buffer is allowed (an empty record stream); past it is not.
    fn seek(&mut self, offset: usize) -> Result<(), DecodeError> {
        if offset > self.data.len() {
            return Err(DecodeError::UnexpectedEof {
                offset: self.data.len(),
                needed: offset - self.data.len(),
            });
        }
        self.pos = offset;
        Ok(())
    }

    /// Skip `n` bytes. Callers check `remaining()` first.
    fn skip(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.pos += n;
    }

    /// Read one byte, or `None` at end of buffer.
    fn read_u8(&mut self) -> Option<u8> {
        let byte = self.data.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }

    /// Read a null-terminated string and advance past the terminator.
    ///
    /// A missing terminator means the record was cut off; the error
    /// reports where the string began so the caller can point at the
    /// corruption.
    fn read_cstring(&mut self) -> Result<String, DecodeError> {
        let start = self.pos;
        let rest = &self.data[start..];
        let null = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(DecodeError::CorruptRecord { offset: start })?;
        self.pos = start + null + 1;
        Ok(String::from_utf8_lossy(&rest[..null]).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{ENTRY_DIRECTORY, ENTRY_FILE, MAGIC};

    /// Build a valid database buffer. The root path occupies the start of
    /// the config block region; `config_pad` adds opaque bytes after it.
    fn db_buffer(root: &str, config_pad: usize, dirs: &[(&str, &[(u8, &str)])]) -> Vec<u8> {
        let config_size = (root.len() + 1 + config_pad) as u32;
        let mut buf = Vec::new();
        buf.extend_from_slice(&MAGIC);
        buf.extend_from_slice(&config_size.to_be_bytes());
        buf.push(1); // version
        buf.push(0); // require_visibility
        buf.extend_from_slice(&[0, 0]); // padding
        buf.extend_from_slice(root.as_bytes());
        buf.push(0);
        buf.resize(buf.len() + config_pad, 0xaa);
        for (dir, entries) in dirs {
            buf.extend_from_slice(&[0u8; DIR_HEADER_LEN]);
            buf.extend_from_slice(dir.as_bytes());
            buf.push(0);
            for (entry_type, name) in *entries {
                buf.push(*entry_type);
                buf.extend_from_slice(name.as_bytes());
                buf.push(0);
            }
            buf.push(ENTRY_END);
        }
        buf
    }

    #[test]
    fn test_decode_single_directory() {
        let buf = db_buffer(
            "/",
            2,
            &[("/etc", &[(ENTRY_FILE, "passwd"), (ENTRY_FILE, "hosts")])],
        );
        let db = Database::decode(&buf).unwrap();
        let paths: Vec<&str> = db.paths().iter().collect();
        assert_eq!(paths, vec!["/etc", "/etc/passwd", "/etc/hosts"]);
        assert_eq!(db.root_path(), "/");
        assert_eq!(db.version(), 1);
    }

    #[test]
    fn test_root_directory_join_has_single_slash() {
        let buf = db_buffer("/", 2, &[("/", &[(ENTRY_DIRECTORY, "etc")])]);
        let db = Database::decode(&buf).unwrap();
        assert!(db.paths().contains("/etc"));
        assert!(!db.paths().contains("//etc"));
    }

    #[test]
    fn test_empty_record_stream() {
        let buf = db_buffer("/", 2, &[]);
        let db = Database::decode(&buf).unwrap();
        assert!(db.is_empty());
    }

    #[test]
    fn test_trailing_bytes_shorter_than_dir_header_are_ignored() {
        let mut buf = db_buffer("/", 2, &[("/etc", &[])]);
        buf.extend_from_slice(&[0u8; 15]);
        let db = Database::decode(&buf).unwrap();
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn test_jump_past_end_is_eof() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&MAGIC);
        buf.extend_from_slice(&1000u32.to_be_bytes());
        buf.extend_from_slice(&[1, 0, 0, 0]);
        buf.push(b'/');
        buf.push(0);
        let err = Database::decode(&buf).unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedEof { .. }));
    }
}
