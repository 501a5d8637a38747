//! Translation of typed command lines into events.
//!
//! The terminal front end reads one line per user action. This module maps a
//! line to the [`Event`] the handler understands, in the same way a key press
//! would be mapped in a full-screen UI. Parsing needs read access to the state:
//! `filter` edits the current criteria and `details <n>` refers to a card
//! position on the current page.
//!
//! | command                         | event                                  |
//! |---------------------------------|----------------------------------------|
//! | `search <term>`, `/<term>`      | `ChangeSearchTerm`                     |
//! | `filter key=value ...`          | `ChangeFilters` (current + changes)    |
//! | `filter clear`                  | `ChangeFilters` (empty criteria)       |
//! | `page <n>`                      | `SetPage`                              |
//! | `next`, `n`, `prev`, `p`        | `NextPage`, `PrevPage`                 |
//! | `details <n or id>`, `d <...>`  | `ToggleDetails`                        |
//! | `refresh`, `r`                  | `Refresh`                              |
//! | `help`, `?`                     | `Notice` with the command reference    |
//! | `quit`, `q`, `exit`             | `Quit`                                 |

use crate::app::{AppState, Event};
use crate::domain::error::{RecipeError, Result};
use crate::domain::RecipeId;
use std::borrow::Cow;

/// Command reference shown by `help`.
pub const HELP: &str = "search <term> | filter category=Vegan min-rating=4 max-calories=600 \
exclude=Pork min-protein=20 max-fat=30 max-sodium=800 keyword=<words> | filter clear | \
page <n> | next | prev | details <n|id> | refresh | quit";

/// Parses one input line.
///
/// Returns `Ok(None)` for blank lines.
///
/// # Errors
///
/// Returns [`RecipeError::Command`] for unknown commands and malformed
/// arguments. The state is never touched.
///
/// # Example
///
/// ```rust
/// use epicurious::app::{command::parse_command, AppState, Event};
/// use epicurious::ui::Theme;
///
/// let state = AppState::new(6, Theme::default());
/// let event = parse_command("search roast chicken", &state)?;
/// assert_eq!(event, Some(Event::ChangeSearchTerm("roast chicken".to_string())));
/// # Ok::<(), epicurious::RecipeError>(())
/// ```
pub fn parse_command(line: &str, state: &AppState) -> Result<Option<Event>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    if let Some(term) = line.strip_prefix('/') {
        return Ok(Some(Event::ChangeSearchTerm(term.to_string())));
    }

    let (command, args) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(c, rest)| (c, rest.trim()));

    let event = match command.to_lowercase().as_str() {
        "search" | "s" => Event::ChangeSearchTerm(args.to_string()),
        "filter" | "f" => parse_filter(args, state)?,
        "page" => Event::SetPage(parse_number("page", args)?),
        "next" | "n" => Event::NextPage,
        "prev" | "p" => Event::PrevPage,
        "details" | "d" => Event::ToggleDetails(resolve_recipe(args, state)?),
        "refresh" | "r" => Event::Refresh,
        "help" | "?" => Event::Notice(HELP.to_string()),
        "quit" | "q" | "exit" => Event::Quit,
        other => {
            return Err(RecipeError::Command(format!(
                "unknown command '{other}' (type `help` for the list)"
            )));
        }
    };

    Ok(Some(event))
}

/// Maps one raw line read from the terminal to an event.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD before parsing.
/// Parse errors become a [`Event::Notice`] so a bad line never ends the
/// session. Returns `None` for blank lines.
pub fn input_event(raw: &[u8], state: &AppState) -> Option<Event> {
    let line = String::from_utf8_lossy(raw);
    if let Cow::Owned(_) = line {
        tracing::warn!(len = raw.len(), "input line is not valid UTF-8, decoding lossily");
    }

    match parse_command(&line, state) {
        Ok(event) => event,
        Err(e) => {
            tracing::debug!(error = %e, "rejected command");
            Some(Event::Notice(e.to_string()))
        }
    }
}

fn parse_filter(args: &str, state: &AppState) -> Result<Event> {
    if args.is_empty() {
        return Err(RecipeError::Command(
            "usage: filter <key>=<value> ... | filter clear".to_string(),
        ));
    }
    if args.eq_ignore_ascii_case("clear") {
        return Ok(Event::ChangeFilters(Default::default()));
    }

    let mut criteria = state.filters.clone();
    for (key, value) in split_assignments(args)? {
        criteria.set(&key, &value)?;
    }
    Ok(Event::ChangeFilters(criteria))
}

/// Splits `a=1 b=two words c=3` into key/value pairs.
///
/// A value runs until the next whitespace-separated token containing `=`, so
/// multi-word keywords need no quoting.
fn split_assignments(args: &str) -> Result<Vec<(String, String)>> {
    let mut pairs: Vec<(String, String)> = Vec::new();

    for token in args.split_whitespace() {
        if let Some((key, value)) = token.split_once('=') {
            if key.is_empty() {
                return Err(RecipeError::Command(format!("missing filter name in '{token}'")));
            }
            pairs.push((key.to_lowercase(), value.to_string()));
        } else if let Some((_, value)) = pairs.last_mut() {
            if !value.is_empty() {
                value.push(' ');
            }
            value.push_str(token);
        } else {
            return Err(RecipeError::Command(format!(
                "expected <key>=<value>, got '{token}'"
            )));
        }
    }

    Ok(pairs)
}

fn parse_number(command: &str, args: &str) -> Result<usize> {
    args.parse::<usize>()
        .map_err(|_| RecipeError::Command(format!("usage: {command} <number>")))
}

/// Resolves `details` arguments: a card position on the current page, or a
/// recipe id present in the filtered results.
fn resolve_recipe(args: &str, state: &AppState) -> Result<RecipeId> {
    if args.is_empty() {
        return Err(RecipeError::Command("usage: details <n|id>".to_string()));
    }

    if let Ok(position) = args.parse::<usize>() {
        if let Some(id) = state.recipe_at(position) {
            return Ok(id.clone());
        }
    }

    state
        .filtered_results
        .iter()
        .find(|recipe| recipe.id.as_str() == args)
        .map(|recipe| recipe.id.clone())
        .ok_or_else(|| RecipeError::Command(format!("no recipe '{args}' in the current results")))
}
