//! Line commands read from stdin, standing in for DOM events.

use std::time::Duration;

use directory_core::{Category, Msg};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  type <text>      replace the search box content (one input event)
  keys <text>      append <text> one keystroke at a time
  back             delete the last character of the search box
  clear            click the X button
  enter            press Enter in the search box
  click <n>        click result card n (1-based)
  focus            click inside the search box
  outside          click somewhere else on the page
  page <n>         move the article feed to page n
  category <name>  filter articles by category (`all` for none)
  home             click the home link
  open <url>       navigate to a page URL
  wait <ms>        keep processing responses for <ms> milliseconds
  help             show this text
  quit             exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Keystrokes(String),
    Backspace,
    Open(String),
    Wait(Duration),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{command}` needs {expected}")]
    BadArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error(transparent)]
    Category(#[from] directory_core::UnknownCategory),
}

pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    let command = match word {
        // The box content is taken verbatim so surrounding spaces survive.
        "type" | "t" => Command::Dispatch(Msg::SearchInput(rest.to_string())),
        "keys" | "k" => Command::Keystrokes(rest.to_string()),
        "back" => Command::Backspace,
        "clear" | "x" => Command::Dispatch(Msg::ClearClicked),
        "enter" => Command::Dispatch(Msg::SearchSubmitted),
        "click" => {
            let index = parse_number(rest, "click", "a card number starting at 1")?;
            let index = usize::try_from(index).ok().and_then(|n| n.checked_sub(1)).ok_or(
                InputError::BadArgument {
                    command: "click",
                    expected: "a card number starting at 1",
                },
            )?;
            Command::Dispatch(Msg::ResultClicked { index })
        }
        "focus" => Command::Dispatch(Msg::SearchFocused),
        "outside" => Command::Dispatch(Msg::ClickedOutside),
        "page" => {
            let page = parse_number(rest, "page", "a page number")?;
            Command::Dispatch(Msg::FeedPageChanged(page))
        }
        "category" => {
            let rest = rest.trim();
            let category = if rest.eq_ignore_ascii_case("all") {
                None
            } else {
                Category::parse_param(rest)?
            };
            Command::Dispatch(Msg::FeedCategoryChanged(category))
        }
        "home" => Command::Dispatch(Msg::ReturnHomeClicked),
        "open" => {
            let url = rest.trim();
            if url.is_empty() {
                return Err(InputError::BadArgument {
                    command: "open",
                    expected: "a URL",
                });
            }
            Command::Open(url.to_string())
        }
        "wait" => {
            let millis = parse_number(rest, "wait", "a duration in milliseconds")?;
            Command::Wait(Duration::from_millis(u64::from(millis)))
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(InputError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_number(
    raw: &str,
    command: &'static str,
    expected: &'static str,
) -> Result<u32, InputError> {
    raw.trim()
        .parse()
        .map_err(|_| InputError::BadArgument { command, expected })
}
