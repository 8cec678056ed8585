use std::fmt;

use rand::Rng;

pub const ROOM_ID_LEN: usize = 5;
pub const ROOM_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Short shareable identifier for a collaborative room.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomId(String);

impl RoomId {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let id = (0..ROOM_ID_LEN)
            .map(|_| ROOM_ID_ALPHABET[rng.gen_range(0..ROOM_ID_ALPHABET.len())] as char)
            .collect();
        Self(id)
    }

    pub fn parse(value: &str) -> Result<Self, RoomIdError> {
        if value.len() != ROOM_ID_LEN {
            return Err(RoomIdError::InvalidLength {
                expected: ROOM_ID_LEN,
                found: value.len(),
            });
        }
        for (index, ch) in value.chars().enumerate() {
            if !ch.is_ascii_uppercase() && !ch.is_ascii_digit() {
                return Err(RoomIdError::InvalidCharacter { ch, index });
            }
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for RoomId {
    type Err = RoomIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomIdError {
    InvalidLength { expected: usize, found: usize },
    InvalidCharacter { ch: char, index: usize },
}

impl fmt::Display for RoomIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomIdError::InvalidLength { expected, found } => {
                write!(f, "room id must be {expected} chars, got {found}")
            }
            RoomIdError::InvalidCharacter { ch, index } => {
                write!(f, "invalid character '{ch}' at position {index}")
            }
        }
    }
}

impl std::error::Error for RoomIdError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_ids_round_trip_through_parse() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let id = RoomId::generate(&mut rng);
            assert_eq!(RoomId::parse(id.as_str()), Ok(id));
        }
    }

    #[test]
    fn parse_rejects_bad_lengths() {
        assert_eq!(
            RoomId::parse("ABC"),
            Err(RoomIdError::InvalidLength {
                expected: ROOM_ID_LEN,
                found: 3
            })
        );
    }

    #[test]
    fn parse_rejects_lowercase_and_symbols() {
        assert_eq!(
            RoomId::parse("Ab3D5"),
            Err(RoomIdError::InvalidCharacter { ch: 'b', index: 1 })
        );
        assert_eq!(
            RoomId::parse("AB-D5"),
            Err(RoomIdError::InvalidCharacter { ch: '-', index: 2 })
        );
    }
}
