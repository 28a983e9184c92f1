//! Game descriptions: `width, height, x1, y1, x2, y2, ...` as bytes, scrambled, then hex encoded.
//!
//! The scramble splits the bytes into two halves and XORs each half with a SHA-256 keystream derived from the other,
//! so the layout is not readable at a glance. Decoding undoes the two halves in reverse order.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use sha2::{Digest, Sha256};

use crate::*;

/// Encodes a layout as a game description.
pub fn encode(layout: &BallLayout) -> String {
    let (width, height) = layout.size();
    let mut bytes = Vec::with_capacity(2 + 2 * layout.balls().len());
    bytes.push(width);
    bytes.push(height);
    for &(x, y) in layout.balls() {
        bytes.push(x);
        bytes.push(y);
    }

    obfuscate(&mut bytes, false);
    to_hex(&bytes)
}

/// Decodes and validates a game description against `params`.
pub fn decode(params: &GameParams, desc: &str) -> Result<BallLayout> {
    let desc = desc.trim();
    // 2 header bytes and 2 bytes per ball, 2 hex digits per byte
    if desc.len() < 4 || desc.len() % 4 != 0 {
        return Err(DescriptorError::WrongLength.into());
    }
    let ball_count = desc.len() / 4 - 1;
    if ball_count < usize::from(params.min_balls) || ball_count > usize::from(params.max_balls) {
        return Err(DescriptorError::WrongLength.into());
    }

    let mut bytes = from_hex(desc)?;
    obfuscate(&mut bytes, true);

    if bytes[0] != params.width || bytes[1] != params.height {
        log::debug!(
            "Description is for {}x{}, expected {}x{}",
            bytes[0],
            bytes[1],
            params.width,
            params.height
        );
        return Err(DescriptorError::SizeMismatch.into());
    }

    let balls: Vec<Dim2> = bytes[2..].chunks_exact(2).map(|pair| (pair[0], pair[1])).collect();
    BallLayout::from_ball_coords((bytes[0], bytes[1]), &balls)
}

fn obfuscate(bytes: &mut [u8], decode: bool) {
    let first_half = bytes.len() / 2;
    let (head, tail) = bytes.split_at_mut(first_half);
    if decode {
        scramble(head, tail);
        scramble(tail, head);
    } else {
        scramble(tail, head);
        scramble(head, tail);
    }
}

/// XORs `target` with a keystream of `sha256(seed || counter)` blocks.
fn scramble(seed: &[u8], target: &mut [u8]) {
    let mut base = Sha256::new();
    base.update(seed);

    for (counter, block) in target.chunks_mut(32).enumerate() {
        let mut hasher = base.clone();
        hasher.update(format!("{counter}").as_bytes());
        let digest = hasher.finalize();
        for (byte, key) in block.iter_mut().zip(digest.iter()) {
            *byte ^= key;
        }
    }
}

fn to_hex(bytes: &[u8]) -> String {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(char::from(DIGITS[usize::from(byte >> 4)]));
        out.push(char::from(DIGITS[usize::from(byte & 0xf)]));
    }
    out
}

fn from_hex(hex: &str) -> Result<Vec<u8>> {
    fn nibble(digit: u8) -> Result<u8> {
        char::from(digit)
            .to_digit(16)
            .map(|value| value as u8)
            .ok_or(DescriptorError::NotHex.into())
    }

    hex.as_bytes()
        .chunks_exact(2)
        .map(|pair| -> Result<u8> { Ok((nibble(pair[0])? << 4) | nibble(pair[1])?) })
        .collect()
}
