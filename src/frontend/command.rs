//! Command line parsing for the interactive front-end

use retrobus_core::{Error, Result};
use retrobus_ui::{UiTag, AUTO, NEXT, PREV};

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Request a new value (or a sentinel) for a tag
    Set { tag: UiTag, value: i32 },
    /// Show the current value of a tag
    Get(UiTag),
    /// Show every owned setting
    List,
    /// Show usage
    Help,
    /// Leave the front-end
    Quit,
}

impl Command {
    /// Parse a line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        let expect_args = |count: usize| -> Result<()> {
            if args.len() == count {
                Ok(())
            } else {
                Err(Error::InvalidCommand {
                    input: line.to_string(),
                    reason: format!("'{}' takes {} argument(s)", verb, count),
                })
            }
        };

        let command = match verb.as_str() {
            "set" => {
                expect_args(2)?;
                let tag: UiTag = args[0].parse()?;
                let value = parse_value(tag, args[1])?;
                Command::Set { tag, value }
            }
            "toggle" => {
                expect_args(1)?;
                Command::Set {
                    tag: args[0].parse()?,
                    value: NEXT,
                }
            }
            "get" => {
                expect_args(1)?;
                Command::Get(args[0].parse()?)
            }
            "list" | "ls" => {
                expect_args(0)?;
                Command::List
            }
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => {
                return Err(Error::InvalidCommand {
                    input: line.to_string(),
                    reason: format!("unknown command '{}'", verb),
                })
            }
        };
        Ok(Some(command))
    }
}

/// Parse a value word: an integer, `on`/`off`, or a sentinel name.
pub fn parse_value(tag: UiTag, word: &str) -> Result<i32> {
    match word.to_ascii_lowercase().as_str() {
        "next" | "+" => Ok(NEXT),
        "prev" | "-" => Ok(PREV),
        "auto" => Ok(AUTO),
        "on" | "yes" | "true" => Ok(1),
        "off" | "no" | "false" => Ok(0),
        other => other.parse().map_err(|_| Error::InvalidValue {
            tag: tag.to_string(),
            value: word.to_string(),
        }),
    }
}

/// Render a value for display, naming sentinels.
///
/// `min` is the lower bound of the tag's range when one is known. A negative
/// bound makes the sentinel values ordinary numbers, as in
/// [`retrobus_ui::adjust_value_range`].
pub fn describe_value(value: i32, min: Option<i32>) -> String {
    if min.is_some_and(|min| min < 0) {
        return value.to_string();
    }
    match value {
        NEXT => "next".to_string(),
        PREV => "prev".to_string(),
        AUTO => "auto".to_string(),
        v => v.to_string(),
    }
}

/// Usage text printed by `help`
pub const HELP: &str = "\
commands:
  set <tag> <value>   request a value (integer, on/off, next, prev, auto)
  toggle <tag>        same as: set <tag> next
  get <tag>           show the current value
  list                show every owned setting and its range
  help                show this text
  quit                leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("# set zoom 3").unwrap(), None);
    }

    #[test]
    fn test_set_values() {
        assert_eq!(
            Command::parse("set zoom 3").unwrap(),
            Some(Command::Set {
                tag: UiTag::Zoom,
                value: 3
            })
        );
        assert_eq!(
            Command::parse("SET fullscreen next").unwrap(),
            Some(Command::Set {
                tag: UiTag::Fullscreen,
                value: NEXT
            })
        );
        assert_eq!(
            Command::parse("set keymap auto").unwrap(),
            Some(Command::Set {
                tag: UiTag::Keymap,
                value: AUTO
            })
        );
        assert_eq!(
            Command::parse("set hue -40").unwrap(),
            Some(Command::Set {
                tag: UiTag::Hue,
                value: -40
            })
        );
        assert_eq!(
            Command::parse("set menubar off").unwrap(),
            Some(Command::Set {
                tag: UiTag::Menubar,
                value: 0
            })
        );
    }

    #[test]
    fn test_toggle_is_set_next() {
        assert_eq!(
            Command::parse("toggle ratelimit").unwrap(),
            Some(Command::Set {
                tag: UiTag::Ratelimit,
                value: NEXT
            })
        );
    }

    #[test]
    fn test_simple_verbs() {
        assert_eq!(
            Command::parse("get volume").unwrap(),
            Some(Command::Get(UiTag::AudioVolume))
        );
        assert_eq!(Command::parse("list").unwrap(), Some(Command::List));
        assert_eq!(Command::parse("?").unwrap(), Some(Command::Help));
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            Command::parse("frobnicate"),
            Err(Error::InvalidCommand { .. })
        ));
        assert!(matches!(
            Command::parse("set zoom"),
            Err(Error::InvalidCommand { .. })
        ));
        assert!(matches!(
            Command::parse("set warp 1"),
            Err(Error::UnknownTag { .. })
        ));
        assert!(matches!(
            Command::parse("set zoom huge"),
            Err(Error::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_describe_value() {
        assert_eq!(describe_value(NEXT, None), "next");
        assert_eq!(describe_value(AUTO, Some(0)), "auto");
        assert_eq!(describe_value(42, None), "42");
    }

    #[test]
    fn test_describe_value_in_negative_range() {
        assert_eq!(describe_value(PREV, Some(-179)), "-2");
        assert_eq!(describe_value(NEXT, Some(-1)), "-1");
        assert_eq!(describe_value(PREV, Some(1)), "prev");
    }
}
