//! Call data for the health-access contract.
//!
//! Only one contract function is called from the portal:
//! `createRecord(string patientId, string ipfsHash)`. The call data is the
//! 4-byte Keccak-256 selector followed by the Solidity ABI encoding of the two
//! dynamic string arguments:
//!
//! ```text
//! selector | offset(a) | offset(b) | len(a) | a (padded) | len(b) | b (padded)
//! ```

use sha3::{Digest, Keccak256};

pub const CREATE_RECORD_SIGNATURE: &str = "createRecord(string,string)";

const WORD: usize = 32;

/// First four bytes of the Keccak-256 hash of a function signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = Keccak256::digest(signature.as_bytes());
    let mut out = [0u8; 4];
    out.copy_from_slice(&hash[..4]);
    out
}

fn word_from_usize(value: usize) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[WORD - 8..].copy_from_slice(&(value as u64).to_be_bytes());
    word
}

fn padded_len(len: usize) -> usize {
    len.div_ceil(WORD) * WORD
}

/// ABI-encode a tuple of dynamic strings (head of offsets, then tails).
fn encode_strings(args: &[&str]) -> Vec<u8> {
    let head_len = args.len() * WORD;
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();

    for arg in args {
        head.extend_from_slice(&word_from_usize(head_len + tail.len()));
        tail.extend_from_slice(&word_from_usize(arg.len()));
        tail.extend_from_slice(arg.as_bytes());
        tail.resize(tail.len() + padded_len(arg.len()) - arg.len(), 0);
    }

    head.extend_from_slice(&tail);
    head
}

/// Call data for `createRecord(patientId, ipfsHash)`.
pub fn create_record_call(patient_id: &str, ipfs_hash: &str) -> Vec<u8> {
    let mut data = selector(CREATE_RECORD_SIGNATURE).to_vec();
    data.extend(encode_strings(&[patient_id, ipfs_hash]));
    data
}

/// `0x`-prefixed hex, as wallets expect in `eth_sendTransaction`.
pub fn to_hex_data(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(data: &[u8], index: usize) -> &[u8] {
        &data[index * WORD..(index + 1) * WORD]
    }

    #[test]
    fn test_known_selector() {
        // ERC-20 transfer, a well-known selector.
        assert_eq!(hex::encode(selector("transfer(address,uint256)")), "a9059cbb");
    }

    #[test]
    fn test_create_record_layout() {
        let data = create_record_call("p1", "QmHash");
        assert_eq!(&data[..4], &selector(CREATE_RECORD_SIGNATURE));

        let body = &data[4..];
        // two offsets + (len + 1 word) per string
        assert_eq!(body.len(), 6 * WORD);
        assert_eq!(word(body, 0), &word_from_usize(0x40));
        assert_eq!(word(body, 1), &word_from_usize(0x80));
        assert_eq!(word(body, 2), &word_from_usize(2));
        assert_eq!(&word(body, 3)[..2], b"p1");
        assert!(word(body, 3)[2..].iter().all(|b| *b == 0));
        assert_eq!(word(body, 4), &word_from_usize(6));
        assert_eq!(&word(body, 5)[..6], b"QmHash");
    }

    #[test]
    fn test_long_string_spans_words() {
        let long = "x".repeat(40);
        let body = encode_strings(&[&long, ""]);
        // offsets, len(a), 2 words of a, len(b), no words for empty b
        assert_eq!(body.len(), 6 * WORD);
        assert_eq!(word(&body, 1), &word_from_usize(0x40 + 3 * WORD));
        assert_eq!(word(&body, 5), &word_from_usize(0));
    }

    #[test]
    fn test_hex_data_prefix() {
        assert_eq!(to_hex_data(&[0xde, 0xad]), "0xdead");
    }
}
