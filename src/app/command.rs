//! Interactive commands
//!
//! Text commands of the terminal browser, one per line.

use std::str::FromStr;

use crate::catalog::{PokemonId, Region};

use super::render::DetailTab;

/// A parsed browser command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the name filter; empty clears it
    Search(String),
    Type(Option<String>),
    Region(Option<Region>),
    FavoritesOnly(bool),
    Page(usize),
    Next,
    Prev,
    /// Toggle a favorite
    Favorite(PokemonId),
    /// Open the detail panel by id or name
    Show(String),
    /// Open a stage of the evolution strip (1-based)
    Stage(usize),
    Tab(DetailTab),
    Close,
    Help,
    Quit,
}

/// Help text listing every command
pub const HELP: &str = "\
Commands:
  search <text>           filter by name (no text clears)
  type <tag|clear>        filter by type
  region <name|clear>     filter by region (kanto, johto, ...)
  favorites on|off        show only favorites
  page <n> | next | prev  change page
  fav <id>                toggle a favorite
  show <id|name>          open the detail panel
  stage <n>               open stage n of the evolution chain
  tab stats|moves|evolution
  close                   close the detail panel
  help                    show this help
  quit                    exit";

fn is_clear(arg: &str) -> bool {
    matches!(arg, "" | "clear" | "all" | "any" | "none")
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (line, ""),
        };
        let arg_lower = arg.to_lowercase();

        match verb.to_lowercase().as_str() {
            "search" | "s" => Ok(Command::Search(arg.to_string())),
            "type" | "t" => Ok(Command::Type(if is_clear(&arg_lower) {
                None
            } else {
                Some(arg_lower)
            })),
            "region" | "r" => {
                if is_clear(&arg_lower) {
                    Ok(Command::Region(None))
                } else {
                    arg.parse::<Region>()
                        .map(|r| Command::Region(Some(r)))
                        .map_err(|e| e.to_string())
                }
            }
            "favorites" | "favs" => match arg_lower.as_str() {
                "on" | "true" | "yes" | "" => Ok(Command::FavoritesOnly(true)),
                "off" | "false" | "no" => Ok(Command::FavoritesOnly(false)),
                other => Err(format!("expected on|off, got {}", other)),
            },
            "page" | "p" => arg
                .parse::<usize>()
                .map(Command::Page)
                .map_err(|_| format!("invalid page number: {}", arg)),
            "next" | "n" => Ok(Command::Next),
            "prev" => Ok(Command::Prev),
            "fav" | "f" => arg
                .trim_start_matches('#')
                .parse::<PokemonId>()
                .map(Command::Favorite)
                .map_err(|_| format!("invalid id: {}", arg)),
            "show" | "open" => {
                if arg.is_empty() {
                    Err("show needs an id or a name".to_string())
                } else {
                    Ok(Command::Show(arg.to_string()))
                }
            }
            "stage" => arg
                .parse::<usize>()
                .map(Command::Stage)
                .map_err(|_| format!("invalid stage number: {}", arg)),
            "tab" => arg.parse::<DetailTab>().map(Command::Tab),
            "close" | "c" => Ok(Command::Close),
            "help" | "?" | "h" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!("unknown command: {} (try `help`)", other)),
        }
    }
}
