// crates/engine/src/decode.rs
//! Incremental UTF-8 decoding.
//!
//! Bytes arrive in arbitrary pieces, so a multi-byte character may be split
//! across two reads. [`Utf8Decoder`] keeps the unfinished prefix (at most three
//! bytes) and completes it with the next piece.

use crate::error::DecodeError;

const MAX_PENDING: usize = 4;

#[derive(Debug, Default)]
pub struct Utf8Decoder {
    pending: [u8; MAX_PENDING],
    pending_len: usize,
    pending_offset: u64,
    position: u64,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `bytes` and append the complete characters to `out`.
    ///
    /// # Errors
    /// Returns [`DecodeError::InvalidSequence`] at the first byte sequence that
    /// cannot start or continue a UTF-8 character.
    pub fn decode(&mut self, bytes: &[u8], out: &mut String) -> Result<(), DecodeError> {
        let rest = self.complete_pending(bytes, out)?;
        let mut at = self.position + (bytes.len() - rest.len()) as u64;
        let end = self.position + bytes.len() as u64;

        for chunk in rest.utf8_chunks() {
            out.push_str(chunk.valid());
            at += chunk.valid().len() as u64;

            let invalid = chunk.invalid();
            if invalid.is_empty() {
                continue;
            }
            if at + invalid.len() as u64 == end && is_incomplete_prefix(invalid) {
                self.pending[..invalid.len()].copy_from_slice(invalid);
                self.pending_len = invalid.len();
                self.pending_offset = at;
                break;
            }
            return Err(DecodeError::InvalidSequence {
                offset: at,
                len: invalid.len(),
            });
        }

        self.position = end;
        Ok(())
    }

    /// Check that the input did not stop in the middle of a character.
    ///
    /// # Errors
    /// Returns [`DecodeError::Truncated`] if bytes of an unfinished character
    /// are still pending.
    pub const fn finish(&self) -> Result<(), DecodeError> {
        if self.pending_len > 0 {
            return Err(DecodeError::Truncated {
                offset: self.pending_offset,
            });
        }
        Ok(())
    }

    fn complete_pending<'a>(
        &mut self,
        bytes: &'a [u8],
        out: &mut String,
    ) -> Result<&'a [u8], DecodeError> {
        if self.pending_len == 0 {
            return Ok(bytes);
        }

        let need = sequence_len(self.pending[0]);
        let take = need.saturating_sub(self.pending_len).min(bytes.len());
        self.pending[self.pending_len..self.pending_len + take].copy_from_slice(&bytes[..take]);
        self.pending_len += take;

        match std::str::from_utf8(&self.pending[..self.pending_len]) {
            Ok(s) => {
                out.push_str(s);
                self.pending_len = 0;
            }
            Err(e) => {
                if let Some(len) = e.error_len() {
                    return Err(DecodeError::InvalidSequence {
                        offset: self.pending_offset,
                        len,
                    });
                }
                // still short of a full character; `bytes` was used up
            }
        }

        Ok(&bytes[take..])
    }
}

/// Encoded length announced by a leading byte.
const fn sequence_len(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    }
}

fn is_incomplete_prefix(bytes: &[u8]) -> bool {
    matches!(std::str::from_utf8(bytes), Err(e) if e.error_len().is_none())
}
