//! Interactive game loop
//!
//! One command per line. The center starts from the configuration and can be
//! moved with `u <name>`; every other command answers relative to it.

use crate::render::{self, OutputFormat};
use costar::{RankBy, Universe};
use std::io::BufRead;

const HELP: &str = "\
Commands:
  c [k]      best centers by average separation
  d [k]      best centers by degree
  p <name>   path from <name> to the current center
  s          number of people with a path to the center
  u <name>   make <name> the center of the universe
  m          people with no path to the center
  a          average separation from the center
  l          degree of the center
  h          show this help
  q          quit";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Rank(RankBy, Option<usize>),
    Path(String),
    Connected,
    Center(String),
    Missing,
    Average,
    Degree,
    Help,
    Quit,
}

/// Parse one input line. `Err` carries the message to show the player.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let top_k = |rest: &str| -> Result<Option<usize>, String> {
        if rest.is_empty() {
            return Ok(None);
        }
        match rest.parse::<usize>() {
            Ok(k) if k > 0 => Ok(Some(k)),
            _ => Err(format!("expected a positive number, got {:?}", rest)),
        }
    };
    let name = |rest: &str| -> Result<String, String> {
        if rest.is_empty() {
            Err(format!("{} needs a name", word))
        } else {
            Ok(rest.to_string())
        }
    };

    match word {
        "c" => Ok(Command::Rank(RankBy::Separation, top_k(rest)?)),
        "d" => Ok(Command::Rank(RankBy::Degree, top_k(rest)?)),
        "p" => Ok(Command::Path(name(rest)?)),
        "s" => Ok(Command::Connected),
        "u" => Ok(Command::Center(name(rest)?)),
        "m" => Ok(Command::Missing),
        "a" => Ok(Command::Average),
        "l" => Ok(Command::Degree),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command {:?}, h for help", other)),
    }
}

pub struct Game<'u> {
    universe: &'u Universe,
    center: String,
    top_k: usize,
    format: OutputFormat,
}

impl<'u> Game<'u> {
    pub fn new(universe: &'u Universe, center: String, top_k: usize, format: OutputFormat) -> Self {
        Self {
            universe,
            center,
            top_k,
            format,
        }
    }

    pub fn run<R: BufRead>(&mut self, input: R) -> anyhow::Result<()> {
        println!("<The {} Game>", self.center);
        println!("{}\n", HELP);
        render::summary(&self.universe.summary(&self.center)?, self.format)?;

        let mut lines = input.lines();
        loop {
            eprint!("{}> ", self.center);
            let Some(line) = lines.next() else {
                break; // EOF
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(message) => {
                    eprintln!("{}", message);
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }
            if let Err(e) = self.execute(command) {
                eprintln!("Error: {}", e);
            }
        }

        println!("Bye!");
        Ok(())
    }

    fn execute(&mut self, command: Command) -> anyhow::Result<()> {
        let universe = self.universe;
        match command {
            Command::Rank(by, k) => {
                let ranked = universe.rank(by, k.unwrap_or(self.top_k), &self.center)?;
                render::ranking(by, &self.center, &ranked, self.format)?;
            }
            Command::Path(target) => {
                if !universe.store().has_vertex(&target) {
                    anyhow::bail!("{:?} is not in the graph", target);
                }
                let tree = universe.build_tree(&self.center)?;
                render::path(&tree, &target, self.format)?;
            }
            Command::Connected => {
                let tree = universe.build_tree(&self.center)?;
                println!("{} people have a path to {}", tree.vertex_count() - 1, self.center);
            }
            Command::Center(name) => {
                let summary = universe.summary(&name)?;
                self.center = name;
                println!("<The {} Game>", self.center);
                render::summary(&summary, self.format)?;
            }
            Command::Missing => {
                let tree = universe.build_tree(&self.center)?;
                render::missing(&tree, self.format)?;
            }
            Command::Average => {
                let tree = universe.build_tree(&self.center)?;
                println!("{:.3}", tree.average_separation());
            }
            Command::Degree => {
                let tree = universe.build_tree(&self.center)?;
                println!("{}", tree.root_degree());
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use costar::graph::{EdgeLabel, GraphStore};
    use std::io::Cursor;

    fn universe() -> Universe {
        let mut store = GraphStore::new();
        store.insert_undirected_edge("A", "B", EdgeLabel::single("M1"));
        store.insert_undirected_edge("B", "C", EdgeLabel::single("M1"));
        store.insert_vertex("E");
        Universe::new(store)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("c 3"), Ok(Command::Rank(RankBy::Separation, Some(3))));
        assert_eq!(parse_command("d"), Ok(Command::Rank(RankBy::Degree, None)));
        assert_eq!(parse_command("p  Tom Hanks "), Ok(Command::Path("Tom Hanks".to_string())));
        assert_eq!(parse_command("u Meryl Streep"), Ok(Command::Center("Meryl Streep".to_string())));
        assert_eq!(parse_command("s"), Ok(Command::Connected));
        assert_eq!(parse_command("m"), Ok(Command::Missing));
        assert_eq!(parse_command("a"), Ok(Command::Average));
        assert_eq!(parse_command("l"), Ok(Command::Degree));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("c zero").is_err());
        assert!(parse_command("c 0").is_err());
        assert!(parse_command("p").is_err());
        assert!(parse_command("x").is_err());
    }

    #[test]
    fn test_unknown_names_keep_the_game_running() {
        let universe = universe();
        let mut game = Game::new(&universe, "A".to_string(), 3, OutputFormat::Table);

        let input = Cursor::new("u Nobody\np Nobody\nbogus\ns\nc 2\nq\nu C\n");
        assert!(game.run(input).is_ok());
        // Quit stops before the trailing move
        assert_eq!(game.center, "A");
    }

    #[test]
    fn test_move_center() {
        let universe = universe();
        let mut game = Game::new(&universe, "A".to_string(), 3, OutputFormat::Json);

        assert!(game.run(Cursor::new("u C\np A\nm\n")).is_ok());
        assert_eq!(game.center, "C");

        assert!(game.run(Cursor::new("u E\na\nl\n")).is_ok());
        assert_eq!(game.center, "E");
    }
}
