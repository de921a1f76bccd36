//! Binary and text layouts for [`HashRecord`].
//!
//! Binary layout, all integers big-endian:
//!
//! ```text
//! version:u8 | algorithm_id:u8 | params_len:u16 | params
//!            | salt_len:u16 | salt | digest_len:u16 | digest
//! ```
//!
//! Fast-digest params are `iterations:u32`; adaptive KDF params are
//! `time_cost:u32 | memory_kib:u32 | parallelism:u32`. Every variable part
//! carries an explicit length so older records stay parseable when new
//! algorithms are added. The text form is `$pf$` followed by the
//! unpadded URL-safe base64 of the binary form. The JSON form is the
//! record's serde representation.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use passforge_core::error::{ErrorKind, ForgeError};
use passforge_core::result::ForgeResult;
use passforge_core::types::{
    DigestFunction, FORMAT_VERSION, HashAlgorithmSpec, HashRecord, KdfFunction,
};

/// Prefix of the text form.
pub const TEXT_PREFIX: &str = "$pf$";

const DIGEST_PARAMS_LEN: usize = 4;
const KDF_PARAMS_LEN: usize = 12;

/// Serializes a record into the binary layout.
pub fn encode_record(record: &HashRecord) -> ForgeResult<Vec<u8>> {
    let params = encode_params(record.algorithm());
    let mut out =
        Vec::with_capacity(2 + 2 + params.len() + 2 + record.salt().len() + 2 + record.digest().len());

    out.push(record.format_version());
    out.push(record.algorithm().algorithm_id());
    put_section(&mut out, &params, "params")?;
    put_section(&mut out, record.salt(), "salt")?;
    put_section(&mut out, record.digest(), "digest")?;
    Ok(out)
}

/// Parses a record from the binary layout.
///
/// An unknown version or algorithm id is `UnsupportedAlgorithm`; a
/// truncated buffer, trailing bytes or a malformed params section is
/// `CorruptRecord`.
pub fn decode_record(bytes: &[u8]) -> ForgeResult<HashRecord> {
    let mut reader = Reader::new(bytes);

    let version = reader.u8()?;
    if version != FORMAT_VERSION {
        return Err(ForgeError::unsupported_algorithm(format!(
            "record format version {version} is not supported"
        )));
    }

    let algorithm_id = reader.u8()?;
    let params = reader.section()?;
    let algorithm = decode_algorithm(algorithm_id, params)?;
    let salt = reader.section()?.to_vec();
    let digest = reader.section()?.to_vec();

    if !reader.is_empty() {
        return Err(ForgeError::corrupt_record(format!(
            "{} trailing bytes after digest",
            reader.remaining()
        )));
    }

    Ok(HashRecord::from_parts(version, algorithm, salt, digest))
}

/// Serializes a record into its `$pf$…` text form.
pub fn record_to_text(record: &HashRecord) -> ForgeResult<String> {
    let bytes = encode_record(record)?;
    Ok(format!("{TEXT_PREFIX}{}", URL_SAFE_NO_PAD.encode(bytes)))
}

/// Parses a record from its `$pf$…` text form.
pub fn record_from_text(text: &str) -> ForgeResult<HashRecord> {
    let body = text
        .strip_prefix(TEXT_PREFIX)
        .ok_or_else(|| ForgeError::corrupt_record("missing record prefix"))?;
    let bytes = URL_SAFE_NO_PAD
        .decode(body)
        .map_err(|e| ForgeError::corrupt_record(format!("invalid record encoding: {e}")))?;
    decode_record(&bytes)
}

/// Serializes a record as JSON.
pub fn record_to_json(record: &HashRecord) -> ForgeResult<String> {
    Ok(serde_json::to_string(record)?)
}

/// Parses a JSON record.
///
/// Classified like [`decode_record`]: an unknown algorithm kind, function
/// name or format version is `UnsupportedAlgorithm`, any other malformed
/// document is `CorruptRecord`.
pub fn record_from_json(json: &str) -> ForgeResult<HashRecord> {
    let record: HashRecord = serde_json::from_str(json).map_err(|e| {
        // serde reports unrecognized enum tags only through the message.
        if e.is_data() && e.to_string().contains("unknown variant") {
            ForgeError::with_source(
                ErrorKind::UnsupportedAlgorithm,
                format!("record names an unsupported algorithm: {e}"),
                e,
            )
        } else {
            ForgeError::with_source(
                ErrorKind::CorruptRecord,
                format!("malformed JSON record: {e}"),
                e,
            )
        }
    })?;

    if record.format_version() != FORMAT_VERSION {
        return Err(ForgeError::unsupported_algorithm(format!(
            "record format version {} is not supported",
            record.format_version()
        )));
    }
    Ok(record)
}

fn encode_params(algorithm: &HashAlgorithmSpec) -> Vec<u8> {
    match algorithm {
        HashAlgorithmSpec::FastDigest { iterations, .. } => iterations.to_be_bytes().to_vec(),
        HashAlgorithmSpec::AdaptiveKdf {
            time_cost,
            memory_kib,
            parallelism,
            ..
        } => {
            let mut params = Vec::with_capacity(KDF_PARAMS_LEN);
            params.extend_from_slice(&time_cost.to_be_bytes());
            params.extend_from_slice(&memory_kib.to_be_bytes());
            params.extend_from_slice(&parallelism.to_be_bytes());
            params
        }
    }
}

fn decode_algorithm(id: u8, params: &[u8]) -> ForgeResult<HashAlgorithmSpec> {
    let digest = [DigestFunction::Sha256, DigestFunction::Sha512]
        .into_iter()
        .find(|f| f.id() == id);
    if let Some(function) = digest {
        if params.len() != DIGEST_PARAMS_LEN {
            return Err(ForgeError::corrupt_record(format!(
                "{} params must be {DIGEST_PARAMS_LEN} bytes, got {}",
                function.name(),
                params.len()
            )));
        }
        let mut reader = Reader::new(params);
        return Ok(HashAlgorithmSpec::FastDigest {
            function,
            iterations: reader.u32()?,
        });
    }

    let kdf = [KdfFunction::Argon2id, KdfFunction::Argon2i, KdfFunction::Argon2d]
        .into_iter()
        .find(|f| f.id() == id);
    if let Some(function) = kdf {
        if params.len() != KDF_PARAMS_LEN {
            return Err(ForgeError::corrupt_record(format!(
                "{} params must be {KDF_PARAMS_LEN} bytes, got {}",
                function.name(),
                params.len()
            )));
        }
        let mut reader = Reader::new(params);
        return Ok(HashAlgorithmSpec::AdaptiveKdf {
            function,
            time_cost: reader.u32()?,
            memory_kib: reader.u32()?,
            parallelism: reader.u32()?,
        });
    }

    Err(ForgeError::unsupported_algorithm(format!(
        "algorithm id {id:#04x} is not implemented by this build"
    )))
}

fn put_section(out: &mut Vec<u8>, data: &[u8], what: &str) -> ForgeResult<()> {
    let len = u16::try_from(data.len()).map_err(|_| {
        ForgeError::serialization(format!("{what} of {} bytes is too long to encode", data.len()))
    })?;
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(data);
    Ok(())
}

/// Cursor over a byte slice whose reads fail as `CorruptRecord`.
struct Reader<'a> {
    bytes: &'a [u8],
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    fn take(&mut self, n: usize) -> ForgeResult<&'a [u8]> {
        if self.bytes.len() < n {
            return Err(ForgeError::corrupt_record(format!(
                "record truncated: needed {n} bytes, {} left",
                self.bytes.len()
            )));
        }
        let (head, tail) = self.bytes.split_at(n);
        self.bytes = tail;
        Ok(head)
    }

    fn u8(&mut self) -> ForgeResult<u8> {
        Ok(self.take(1)?[0])
    }

    fn u16(&mut self) -> ForgeResult<u16> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    fn u32(&mut self) -> ForgeResult<u32> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn section(&mut self) -> ForgeResult<&'a [u8]> {
        let len = self.u16()? as usize;
        self.take(len)
    }

    fn remaining(&self) -> usize {
        self.bytes.len()
    }

    fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
