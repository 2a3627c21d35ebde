//! Parsing of interactive presenter commands.

use anyhow::{anyhow, bail};
use deck_core::Command;
use std::str::FromStr;

/// One line of operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Move through the deck.
    Navigate(Command),
    /// Show the speaker notes of the current slide.
    Notes,
    /// Show the command summary.
    Help,
    /// End the presentation.
    Quit,
}

pub const HELP: &str = "\
Commands:
  <enter>, n, next      next slide
  p, prev, previous     previous slide
  f, first              first slide
  l, last               last slide
  g N, goto N, N        jump to slide N
  s, notes              speaker notes
  h, help               this help
  q, quit               quit";

impl FromStr for Input {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim().to_lowercase();
        let mut parts = line.split_whitespace();
        let word = parts.next().unwrap_or("");
        let arg = parts.next();

        if parts.next().is_some() {
            bail!("Too many arguments: '{}'", s.trim());
        }

        let input = match (word, arg) {
            ("", None) | ("n", None) | ("next", None) => Input::Navigate(Command::Next),
            ("p", None) | ("prev", None) | ("previous", None) => {
                Input::Navigate(Command::Previous)
            }
            ("f", None) | ("first", None) => Input::Navigate(Command::First),
            ("l", None) | ("last", None) => Input::Navigate(Command::Last),
            ("s", None) | ("notes", None) => Input::Notes,
            ("h", None) | ("help", None) | ("?", None) => Input::Help,
            ("q", None) | ("quit", None) | ("exit", None) => Input::Quit,
            ("g", Some(n)) | ("goto", Some(n)) => Input::Navigate(parse_slide_number(n)?),
            (n, None) if n.chars().all(|c| c.is_ascii_digit()) => {
                Input::Navigate(parse_slide_number(n)?)
            }
            _ => bail!("Unknown command: '{}' (type 'help' for commands)", s.trim()),
        };

        Ok(input)
    }
}

/// Parse a 1-based slide number into a 0-based jump.
fn parse_slide_number(text: &str) -> anyhow::Result<Command> {
    let number: usize = text
        .parse()
        .map_err(|_| anyhow!("Not a slide number: '{}'", text))?;
    let index = number
        .checked_sub(1)
        .ok_or_else(|| anyhow!("Slide numbers start at 1"))?;
    Ok(Command::JumpTo(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Input {
        s.parse().unwrap()
    }

    #[test]
    fn test_navigation_words() {
        assert_eq!(parse(""), Input::Navigate(Command::Next));
        assert_eq!(parse("  N "), Input::Navigate(Command::Next));
        assert_eq!(parse("prev"), Input::Navigate(Command::Previous));
        assert_eq!(parse("first"), Input::Navigate(Command::First));
        assert_eq!(parse("l"), Input::Navigate(Command::Last));
    }

    #[test]
    fn test_jumps_are_one_based() {
        assert_eq!(parse("g 3"), Input::Navigate(Command::JumpTo(2)));
        assert_eq!(parse("goto 1"), Input::Navigate(Command::JumpTo(0)));
        assert_eq!(parse("12"), Input::Navigate(Command::JumpTo(11)));
    }

    #[test]
    fn test_other_commands() {
        assert_eq!(parse("notes"), Input::Notes);
        assert_eq!(parse("?"), Input::Help);
        assert_eq!(parse("Q"), Input::Quit);
    }

    #[test]
    fn test_invalid_input() {
        assert!("0".parse::<Input>().is_err());
        assert!("g".parse::<Input>().is_err());
        assert!("g x".parse::<Input>().is_err());
        assert!("g 1 2".parse::<Input>().is_err());
        assert!("dance".parse::<Input>().is_err());
    }
}
