//! Action text: `identity,TTTTTTTT,px,py,tx,ty`.
//!
//! The tag is eight hex digits, each coordinate two. Digits are written in
//! lowercase and read in either case. Fields must have exactly their width.

use super::DecodeError;
use crate::action::ActionRecord;
use crate::state::{Identity, Position};

const FIELD_COUNT: usize = 6;
const TAG_WIDTH: usize = 8;
const COORD_WIDTH: usize = 2;

/// Formats an action record as action text.
pub fn encode_action(record: &ActionRecord) -> String {
    format!(
        "{},{:08x},{:02x},{:02x},{:02x},{:02x}",
        record.identity,
        record.tag,
        record.player.x,
        record.player.y,
        record.target.x,
        record.target.y
    )
}

/// Parses action text into a raw record.
///
/// The tag is not interpreted here: unknown tags decode fine and are dropped
/// by the engine.
pub fn decode_action(text: &str) -> Result<ActionRecord, DecodeError> {
    let fields: Vec<&str> = text.split(',').collect();
    let [identity, tag, px, py, tx, ty] = fields.as_slice() else {
        return Err(DecodeError::FieldCount {
            expected: FIELD_COUNT,
            actual: fields.len(),
        });
    };

    let identity = Identity::new(identity)?;
    let tag = hex_field("tag", tag, TAG_WIDTH)?;
    let player = Position::new(
        coord_field("player_x", px)?,
        coord_field("player_y", py)?,
    );
    let target = Position::new(
        coord_field("target_x", tx)?,
        coord_field("target_y", ty)?,
    );

    Ok(ActionRecord {
        identity,
        tag,
        player,
        target,
    })
}

fn hex_field(field: &'static str, value: &str, width: usize) -> Result<u32, DecodeError> {
    let malformed = || DecodeError::ActionField {
        field,
        value: value.to_owned(),
    };
    if value.len() != width || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }
    u32::from_str_radix(value, 16).map_err(|_| malformed())
}

fn coord_field(field: &'static str, value: &str) -> Result<u8, DecodeError> {
    // Two hex digits always fit in a byte.
    hex_field(field, value, COORD_WIDTH).map(|v| v as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, ActionTag};
    use crate::movement::MovementPattern;

    fn id() -> Identity {
        Identity::new("alice").unwrap()
    }

    #[test]
    fn encodes_fixed_width_lowercase() {
        let record = Action::Move {
            player: Position::new(3, 3),
            target: Position::new(3, 4),
        }
        .to_record(id());
        assert_eq!(encode_action(&record), "alice,00000001,03,03,03,04");

        let record = ActionRecord {
            identity: id(),
            tag: 0xABCD_EF01,
            player: Position::new(255, 10),
            target: Position::ORIGIN,
        };
        assert_eq!(encode_action(&record), "alice,abcdef01,ff,0a,00,00");
    }

    #[test]
    fn decodes_either_case() {
        let record = decode_action("alice,0000000A,0B,0c,01,02").unwrap();
        assert_eq!(record.identity, id());
        assert_eq!(record.tag, 10);
        assert_eq!(record.player, Position::new(11, 12));
        assert_eq!(record.target, Position::new(1, 2));
    }

    #[test]
    fn round_trips() {
        let record = Action::ChangePattern {
            player: Position::new(6, 1),
            pattern: MovementPattern::Knight,
        }
        .to_record(id());
        let text = encode_action(&record);
        assert_eq!(text, "alice,00000002,06,01,01,00");
        assert_eq!(decode_action(&text).unwrap(), record);
        assert_eq!(record.tag, ActionTag::ChangePattern as u32);
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!(
            decode_action("alice,00000001,03,03,03"),
            Err(DecodeError::FieldCount {
                expected: 6,
                actual: 5
            })
        );
        assert!(matches!(
            decode_action("alice,1,03,03,03,04"),
            Err(DecodeError::ActionField { field: "tag", .. })
        ));
        assert!(matches!(
            decode_action("alice,00000001,3,03,03,04"),
            Err(DecodeError::ActionField {
                field: "player_x",
                ..
            })
        ));
        assert!(matches!(
            decode_action("alice,00000001,03,03,0x,04"),
            Err(DecodeError::ActionField {
                field: "target_x",
                ..
            })
        ));
        assert!(matches!(
            decode_action(",00000001,03,03,03,04"),
            Err(DecodeError::Identity(_))
        ));
    }
}
