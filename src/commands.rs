//! Interactive command parsing and the settings the commands change.

use crate::config::Config;
use crate::error::ParseValueError;
use crate::highlight::HighlightStyle;
use crate::search::SearchMode;
use rapidfuzz::distance::jaro_winkler;

/// Prefix marking an input line as a command rather than a query.
pub const COMMAND_PREFIX: char = ':';

/// Minimum similarity for an unknown command to get a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// A user-changeable setting reachable through `:<name> <value>`.
///
/// Every setting follows the same shape: parse one token, check it against the
/// allowed values, apply it to the config. The session persists the result.
#[derive(Debug)]
pub struct Setting {
    /// Command name without the leading `:`
    pub name: &'static str,
    /// Accepted values, as shown in usage text
    pub allowed: &'static [&'static str],
    apply: fn(&mut Config, &str) -> Result<String, ParseValueError>,
}

impl Setting {
    pub fn usage(&self) -> String {
        format!("Usage: {}{} {}", COMMAND_PREFIX, self.name, self.allowed.join("|"))
    }

    /// Parse `value` and store it in `config`, returning a confirmation message.
    ///
    /// `config` is left untouched on error.
    pub fn apply(&self, config: &mut Config, value: &str) -> Result<String, ParseValueError> {
        (self.apply)(config, value)
    }
}

const ON_OFF: &[&str] = &["on", "off"];

fn parse_toggle(value: &str) -> Result<bool, ParseValueError> {
    match value.to_ascii_lowercase().as_str() {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => Err(ParseValueError::new("toggle", value, ON_OFF)),
    }
}

fn apply_highlight(config: &mut Config, value: &str) -> Result<String, ParseValueError> {
    config.highlight = parse_toggle(value)?;
    Ok(format!("Highlighting {}", if config.highlight { "ON" } else { "OFF" }))
}

fn apply_search_mode(config: &mut Config, value: &str) -> Result<String, ParseValueError> {
    config.search_mode = value.parse()?;
    Ok(format!("Search mode set to {}", config.search_mode))
}

fn apply_highlight_mode(config: &mut Config, value: &str) -> Result<String, ParseValueError> {
    config.highlight_mode = value.parse()?;
    Ok(format!("Highlight mode set to {}", config.highlight_mode))
}

pub static HIGHLIGHT: Setting = Setting {
    name: "highlight",
    allowed: ON_OFF,
    apply: apply_highlight,
};

pub static SEARCH_MODE: Setting = Setting {
    name: "search-mode",
    allowed: SearchMode::NAMES,
    apply: apply_search_mode,
};

pub static HIGHLIGHT_MODE: Setting = Setting {
    name: "hl-mode",
    allowed: HighlightStyle::NAMES,
    apply: apply_highlight_mode,
};

/// All settings, in help order.
pub static SETTINGS: [&Setting; 3] = [&HIGHLIGHT, &SEARCH_MODE, &HIGHLIGHT_MODE];

/// Names of commands that are not settings.
const BUILTIN_COMMANDS: &[&str] = &["help", "quit"];

/// One parsed line of user input.
#[derive(Debug)]
pub enum Command<'a> {
    Quit,
    Help,
    /// Change a setting; `args` holds every token after the command name
    Set {
        setting: &'static Setting,
        args: Vec<&'a str>,
    },
    Unknown {
        name: &'a str,
        suggestion: Option<String>,
    },
    /// Anything not starting with the command prefix
    Query(&'a str),
}

impl<'a> Command<'a> {
    /// Parse a trimmed, non-empty input line.
    pub fn parse(input: &'a str) -> Self {
        let Some(body) = input.strip_prefix(COMMAND_PREFIX) else {
            return Self::Query(input);
        };

        let mut tokens = body.split_whitespace();
        let name = tokens.next().unwrap_or_default();
        let bare = tokens.clone().next().is_none();

        match name {
            "quit" if bare => Self::Quit,
            "help" if bare => Self::Help,
            _ => match SETTINGS.iter().copied().find(|s| s.name == name) {
                Some(setting) => Self::Set {
                    setting,
                    args: tokens.collect(),
                },
                None => Self::Unknown {
                    name: body.trim(),
                    suggestion: suggest_command(name),
                },
            },
        }
    }
}

/// Closest known command to `name`, if any is close enough.
fn suggest_command(name: &str) -> Option<String> {
    BUILTIN_COMMANDS
        .iter()
        .copied()
        .chain(SETTINGS.iter().map(|s| s.name))
        .map(|candidate| (candidate, jaro_winkler::similarity(name.chars(), candidate.chars())))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(candidate, _)| format!("{}{}", COMMAND_PREFIX, candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use rstest::rstest;

    #[rstest]
    #[case(":quit")]
    #[case(":quit  ")]
    fn test_parse_quit(#[case] input: &str) {
        check!(matches!(Command::parse(input), Command::Quit));
    }

    #[test]
    fn test_parse_help() {
        check!(matches!(Command::parse(":help"), Command::Help));
    }

    #[test]
    fn test_parse_query() {
        let_assert!(Command::Query(q) = Command::parse("love thee"));
        check!(q == "love thee");
    }

    #[rstest]
    #[case(":highlight on", "highlight", &["on"])]
    #[case(":search-mode  or", "search-mode", &["or"])]
    #[case(":hl-mode", "hl-mode", &[])]
    #[case(":hl-mode green extra", "hl-mode", &["green", "extra"])]
    fn test_parse_setting(#[case] input: &str, #[case] name: &str, #[case] expected: &[&str]) {
        let_assert!(Command::Set { setting, args } = Command::parse(input));
        check!(setting.name == name);
        check!(args == expected);
    }

    #[rstest]
    #[case(":hightlight", Some(":highlight"))]
    #[case(":serch-mode", Some(":search-mode"))]
    #[case(":qiut", Some(":quit"))]
    #[case(":xyzzy", None)]
    fn test_parse_unknown(#[case] input: &str, #[case] expected: Option<&str>) {
        let_assert!(Command::Unknown { suggestion, .. } = Command::parse(input));
        check!(suggestion.as_deref() == expected);
    }

    #[rstest]
    #[case(":quit now", "quit now", ":quit")]
    #[case(":help foo", "help foo", ":help")]
    fn test_parse_command_with_extra_tokens(
        #[case] input: &str,
        #[case] expected_name: &str,
        #[case] expected_suggestion: &str,
    ) {
        let_assert!(Command::Unknown { name, suggestion } = Command::parse(input));
        check!(name == expected_name);
        check!(suggestion.as_deref() == Some(expected_suggestion));
    }

    #[rstest]
    #[case(&HIGHLIGHT, "OFF", "Highlighting OFF")]
    #[case(&SEARCH_MODE, "or", "Search mode set to OR")]
    #[case(&HIGHLIGHT_MODE, "Green", "Highlight mode set to GREEN")]
    fn test_apply_setting(#[case] setting: &Setting, #[case] value: &str, #[case] message: &str) {
        let mut config = Config::default();
        check!(setting.apply(&mut config, value).as_deref() == Ok(message));
        check!(config != Config::default());
    }

    #[rstest]
    #[case(&HIGHLIGHT, "maybe")]
    #[case(&SEARCH_MODE, "XOR")]
    #[case(&HIGHLIGHT_MODE, "BLUE")]
    fn test_apply_rejects_unknown_values(#[case] setting: &Setting, #[case] value: &str) {
        let mut config = Config::default();
        check!(setting.apply(&mut config, value).is_err());
        check!(config == Config::default());
    }

    #[rstest]
    #[case(&HIGHLIGHT, "Usage: :highlight on|off")]
    #[case(&SEARCH_MODE, "Usage: :search-mode AND|OR")]
    #[case(&HIGHLIGHT_MODE, "Usage: :hl-mode DEFAULT|GREEN")]
    fn test_usage(#[case] setting: &Setting, #[case] expected: &str) {
        check!(setting.usage() == expected);
    }
}
