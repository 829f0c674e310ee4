//! Top-level prompt commands

/// One answer to the main prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `d`: plot and display
    Display,
    
    /// `s<filename>`: plot and save (empty name means the default)
    Save(String),
    
    /// `fr`: list present bins, then zero some out
    Remove,
    
    /// `fs`: list present bins, then scale some
    Scale,
    
    /// `fa`: list empty bins, then add tones
    Add,
    
    /// `q`
    Quit,
}

impl Command {
    /// Parse a prompt answer; commands are case-insensitive, save file names keep their case
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let lowered = input.to_lowercase();
        
        match lowered.as_str() {
            "d" => Some(Command::Display),
            "fr" => Some(Command::Remove),
            "fs" => Some(Command::Scale),
            "fa" => Some(Command::Add),
            "q" => Some(Command::Quit),
            s if s.starts_with('s') => {
                let skip = input.chars().next().map_or(0, char::len_utf8);
                Some(Command::Save(input[skip..].trim().to_string()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("d"), Some(Command::Display));
        assert_eq!(Command::parse(" FR "), Some(Command::Remove));
        assert_eq!(Command::parse("fs"), Some(Command::Scale));
        assert_eq!(Command::parse("fa"), Some(Command::Add));
        assert_eq!(Command::parse("Q"), Some(Command::Quit));
    }
    
    #[test]
    fn test_parse_save() {
        assert_eq!(Command::parse("s"), Some(Command::Save(String::new())));
        assert_eq!(Command::parse("s My Plot"), Some(Command::Save("My Plot".into())));
        assert_eq!(Command::parse("sout.png"), Some(Command::Save("out.png".into())));
    }
    
    #[test]
    fn test_parse_invalid() {
        assert_eq!(Command::parse("x"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("frx"), None);
        assert_eq!(Command::parse("display"), None);
    }
}
