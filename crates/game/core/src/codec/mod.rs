//! Wire formats.
//!
//! - binary record: [`encode_state`] / [`decode_state`]
//! - hex text of the record, used as the state transport: [`encode_state_hex`] / [`decode_state_hex`]
//! - action text: [`encode_action`] / [`decode_action`]
mod action_text;
mod error;
mod hex_text;
mod record;

pub use action_text::{decode_action, encode_action};
pub use error::DecodeError;
pub use hex_text::{STATE_HEX_LEN, decode_state_hex, encode_state_hex};
pub use record::{STATE_RECORD_SIZE, decode_state, encode_state};
