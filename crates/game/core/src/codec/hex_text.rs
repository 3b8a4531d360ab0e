//! Hex text transport for state records.

use super::{DecodeError, STATE_RECORD_SIZE, decode_state, encode_state};
use crate::state::GameState;

/// Length of the hex text of one state record.
pub const STATE_HEX_LEN: usize = STATE_RECORD_SIZE * 2;

/// Lowercase hex text of the state record, two digits per byte.
pub fn encode_state_hex(state: &GameState) -> String {
    hex::encode(encode_state(state))
}

/// Parses hex text produced by [`encode_state_hex`].
///
/// Digits may be upper or lower case. Anything other than exactly
/// [`STATE_HEX_LEN`] hex digits is rejected.
pub fn decode_state_hex(text: &str) -> Result<GameState, DecodeError> {
    if text.len() != STATE_HEX_LEN {
        return Err(DecodeError::TextLength {
            expected: STATE_HEX_LEN,
            actual: text.len(),
        });
    }
    let bytes = hex::decode(text)?;
    decode_state(&bytes)
}
