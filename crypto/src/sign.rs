//! EIP-191 signature encoding and verification.

use alloy_primitives::Signature;
use vouch_types::Address;

/// Encode a signature as `0x`-prefixed hex of its 65-byte `r || s || v` form.
pub fn encode_signature(signature: &Signature) -> String {
    format!("0x{}", hex::encode(signature.as_bytes()))
}

/// Verify that `signature` over the personal message `message` was produced
/// by `address`.
///
/// Returns `false` for malformed signatures rather than erroring.
pub fn verify_signature(message: &str, signature: &str, address: &Address) -> bool {
    let digits = signature.strip_prefix("0x").unwrap_or(signature);
    let Ok(bytes) = hex::decode(digits) else {
        return false;
    };
    let Ok(sig) = Signature::try_from(bytes.as_slice()) else {
        return false;
    };
    match sig.recover_address_from_msg(message.as_bytes()) {
        Ok(recovered) => recovered.to_checksum(None).eq_ignore_ascii_case(address.as_str()),
        Err(_) => false,
    }
}
