/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Play through every stored question.
    Play,
    /// List the stored questions and optionally add one.
    Manage,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 3] = [MenuChoice::Play, MenuChoice::Manage, MenuChoice::Exit];

    /// Parse a line typed at the menu prompt.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Play),
            "2" => Some(MenuChoice::Manage),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn key(self) -> char {
        match self {
            MenuChoice::Play => '1',
            MenuChoice::Manage => '2',
            MenuChoice::Exit => '3',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Play => "Play the quiz",
            MenuChoice::Manage => "View and add questions",
            MenuChoice::Exit => "Exit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Play));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::Manage));
        assert_eq!(MenuChoice::parse("3\n"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("4"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_keys_round_trip_through_parse() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::parse(&choice.key().to_string()), Some(choice));
        }
    }
}
