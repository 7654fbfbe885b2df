//! Binary persistence of trained profiles
//!
//! Layout, all integers big-endian:
//!
//! ```text
//! magic       "NGCP"
//! version     u16
//! categories  u32
//!   id        i64
//!   entries   u32
//!     len     u8
//!     gram    [u8; len]
//!     rank    u16
//! digest      SHA-256 of everything above
//! ```
//!
//! Categories are written in ascending id order and entries in ascending
//! rank order, so equal registries encode to equal bytes. Enabled flags are
//! not persisted; every decoded category starts disabled.

use crate::profile::CategoryProfile;
use crate::registry::ProfileRegistry;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use ngramcat_core::{Error, Result, MAX_PATTERNS};
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::{debug, info};

/// Leading bytes of every encoded profile set
pub const MAGIC: &[u8; 4] = b"NGCP";

/// Current encoding version
pub const FORMAT_VERSION: u16 = 1;

const HEADER_LEN: usize = 4 + 2;
const DIGEST_LEN: usize = 32;

/// Encode every trained category of the registry
pub fn encode(registry: &ProfileRegistry) -> Bytes {
    let trained: Vec<_> = registry.trained().collect();

    let mut buf = BytesMut::new();
    buf.put_slice(MAGIC);
    buf.put_u16(FORMAT_VERSION);
    buf.put_u32(trained.len() as u32);

    for (id, profile) in trained {
        let entries = profile.iter_ranked();
        buf.put_i64(id);
        buf.put_u32(entries.len() as u32);
        for (gram, rank) in entries {
            buf.put_u8(gram.len() as u8);
            buf.put_slice(gram);
            buf.put_u16(rank as u16);
        }
    }

    let digest = Sha256::digest(&buf);
    buf.put_slice(&digest);
    buf.freeze()
}

/// Decode a profile set into a registry with every category disabled
pub fn decode(data: &[u8]) -> Result<ProfileRegistry> {
    if data.len() < HEADER_LEN + 4 + DIGEST_LEN {
        return Err(Error::corrupt(format!("{} bytes is too short", data.len())));
    }
    if &data[..MAGIC.len()] != MAGIC {
        return Err(Error::corrupt("bad magic"));
    }

    let (body, digest) = data.split_at(data.len() - DIGEST_LEN);
    let mut reader = Reader { buf: &body[MAGIC.len()..] };

    let version = reader.u16("version")?;
    if version != FORMAT_VERSION {
        return Err(Error::corrupt(format!("unsupported version {}", version)));
    }
    if Sha256::digest(body).as_slice() != digest {
        return Err(Error::corrupt("digest mismatch"));
    }

    let count = reader.u32("category count")?;
    let mut registry = ProfileRegistry::new();

    for _ in 0..count {
        let id = reader.i64("category id")?;
        if registry.category(id).is_some() {
            return Err(Error::corrupt(format!("category {} listed twice", id)));
        }

        let entries = reader.u32("entry count")? as usize;
        if entries > MAX_PATTERNS {
            return Err(Error::corrupt(format!(
                "category {} holds {} entries",
                id, entries
            )));
        }

        let mut pairs = Vec::with_capacity(entries);
        for _ in 0..entries {
            let len = reader.u8("n-gram length")? as usize;
            let gram = reader.bytes(len, "n-gram")?.to_vec();
            let rank = reader.u16("rank")? as usize;
            pairs.push((gram, rank));
        }

        let profile = CategoryProfile::from_ranks(pairs).map_err(|e| match e {
            Error::CorruptProfile(msg) => Error::corrupt(format!("category {}: {}", id, msg)),
            other => other,
        })?;
        registry.set_profile(id, profile);
    }

    if reader.buf.has_remaining() {
        return Err(Error::corrupt(format!(
            "{} trailing bytes",
            reader.buf.remaining()
        )));
    }

    debug!(categories = registry.len(), "Decoded profiles");
    Ok(registry)
}

/// Write the registry's trained profiles to a file
pub fn save(registry: &ProfileRegistry, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let data = encode(registry);
    std::fs::write(path, &data)?;
    info!(path = %path.display(), bytes = data.len(), "Saved profiles");
    Ok(())
}

/// Read a registry from a profile file
pub fn load(path: impl AsRef<Path>) -> Result<ProfileRegistry> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let registry = decode(&data)?;
    info!(path = %path.display(), categories = registry.len(), "Loaded profiles");
    Ok(registry)
}

/// Bounds-checked reads over the body
struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    fn need(&self, len: usize, what: &str) -> Result<()> {
        if self.buf.remaining() < len {
            return Err(Error::corrupt(format!("truncated while reading {}", what)));
        }
        Ok(())
    }

    fn u8(&mut self, what: &str) -> Result<u8> {
        self.need(1, what)?;
        Ok(self.buf.get_u8())
    }

    fn u16(&mut self, what: &str) -> Result<u16> {
        self.need(2, what)?;
        Ok(self.buf.get_u16())
    }

    fn u32(&mut self, what: &str) -> Result<u32> {
        self.need(4, what)?;
        Ok(self.buf.get_u32())
    }

    fn i64(&mut self, what: &str) -> Result<i64> {
        self.need(8, what)?;
        Ok(self.buf.get_i64())
    }

    fn bytes(&mut self, len: usize, what: &str) -> Result<&'a [u8]> {
        self.need(len, what)?;
        let buf: &'a [u8] = self.buf;
        let (head, tail) = buf.split_at(len);
        self.buf = tail;
        Ok(head)
    }
}
