#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KeyCommand {
    Move { dx: i32, dy: i32 },
    Backspace,
}

pub(crate) fn parse_key(key: &str) -> Option<KeyCommand> {
    match key {
        "ArrowUp" => Some(KeyCommand::Move { dx: 0, dy: -1 }),
        "ArrowDown" => Some(KeyCommand::Move { dx: 0, dy: 1 }),
        "ArrowLeft" => Some(KeyCommand::Move { dx: -1, dy: 0 }),
        "ArrowRight" => Some(KeyCommand::Move { dx: 1, dy: 0 }),
        "Backspace" => Some(KeyCommand::Backspace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_unit_steps() {
        assert_eq!(parse_key("ArrowUp"), Some(KeyCommand::Move { dx: 0, dy: -1 }));
        assert_eq!(parse_key("ArrowDown"), Some(KeyCommand::Move { dx: 0, dy: 1 }));
        assert_eq!(parse_key("ArrowLeft"), Some(KeyCommand::Move { dx: -1, dy: 0 }));
        assert_eq!(parse_key("ArrowRight"), Some(KeyCommand::Move { dx: 1, dy: 0 }));
    }

    #[test]
    fn backspace_is_recognized() {
        assert_eq!(parse_key("Backspace"), Some(KeyCommand::Backspace));
    }

    #[test]
    fn other_keys_fall_through_to_text_input() {
        assert_eq!(parse_key("Enter"), None);
        assert_eq!(parse_key("a"), None);
        assert_eq!(parse_key("Tab"), None);
    }
}
