use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};

const BIN_NAME: &str = "actorcharts";

#[derive(Debug, Parser)]
#[command(name = "actorcharts")]
#[command(about = "Career analytics and charts for film actors")]
#[command(version)]
pub struct Cli {
    /// Starts the interactive prompt when left out
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List trending actors
    Popular,
    /// Search actors by name
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Show analysis and charts for an actor
    #[command(alias = "select")]
    Actor {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Compare two or more actors: `compare Emma Stone, Ryan Gosling`
    /// or `compare "Emma Stone" "Ryan Gosling"`
    Compare {
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,
    },
    /// Leave the prompt
    #[command(alias = "exit")]
    Quit,
}

impl Cli {
    /// Parses program arguments, the first one being the binary name.
    pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut cli = Cli::try_parse_from(args)?;
        if let Some(command) = cli.command.take() {
            cli.command = Some(command.resolve()?);
        }
        Ok(cli)
    }

    /// Parses one line typed at the interactive prompt with the same grammar
    /// as the program arguments. `None` for a blank line.
    pub fn parse_line(line: &str) -> Result<Option<Command>, clap::Error> {
        let mut words = split_words(line)?;
        match words.first_mut() {
            Some(verb) => *verb = verb.to_lowercase(),
            None => return Ok(None),
        }

        let cli = Cli::parse_args(std::iter::once(BIN_NAME.to_string()).chain(words))?;
        Ok(cli.command)
    }

    pub fn usage() -> String {
        Cli::command().render_help().to_string()
    }
}

impl Command {
    /// Words of a name or query joined back into one string.
    pub fn text(words: &[String]) -> String {
        words.join(" ").trim().to_string()
    }

    fn resolve(self) -> Result<Command, clap::Error> {
        match self {
            Command::Compare { names } => Ok(Command::Compare {
                names: actor_names(&names)?,
            }),
            other => Ok(other),
        }
    }
}

/// Actor names of a `compare`. Names are separated by commas, or each name is
/// its own (quoted) argument. Bare words without commas are ambiguous:
/// `Emma Stone Ryan Gosling` could be any split, so they are rejected.
fn actor_names(args: &[String]) -> Result<Vec<String>, clap::Error> {
    let names: Vec<String> = if args.iter().any(|arg| arg.contains(',')) {
        args.join(" ")
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect()
    } else {
        if args.len() > 1 && args.iter().all(|arg| !arg.trim().contains(char::is_whitespace)) {
            return Err(compare_error(
                "separate actor names with commas or quote each name",
            ));
        }
        args.iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect()
    };

    if names.len() < 2 {
        return Err(compare_error("compare needs at least 2 actor names"));
    }
    Ok(names)
}

fn compare_error(message: &str) -> clap::Error {
    Cli::command().error(ErrorKind::ValueValidation, message)
}

/// Splits a prompt line into words. Single or double quotes group words, and
/// an unterminated quote is an error.
fn split_words(line: &str) -> Result<Vec<String>, clap::Error> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => word.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            None => {
                word.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(Cli::command().error(ErrorKind::InvalidValue, "unterminated quote"));
    }
    if in_word {
        words.push(word);
    }
    Ok(words)
}
