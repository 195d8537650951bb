mod error;

use error::{InvalidNumber, MissingHeight, UnexpectedArgument, UnknownCommand};
use functree::{simplify::simplify_tree_with_steps, Error, FunctionTree, Generator};
use rand::{rngs::StdRng, SeedableRng};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{io::{self, BufRead, IsTerminal}, ops::Range};
use tracing_subscriber::EnvFilter;

/// What to print for a generated tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// The LaTeX of the whole tree.
    Render,

    /// The plain text of every node, grouped by height.
    Levels,

    /// The LaTeX of the tree before and after simplification.
    Simplify,
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
struct Request {
    command: Command,
    height: i64,
    seed: Option<u64>,

    /// Span of the height in the input line.
    height_span: Range<usize>,
}

/// Splits the input into whitespace-separated tokens, along with their spans in the input.
fn tokens(input: &str) -> impl Iterator<Item = (Range<usize>, &str)> {
    input.split_whitespace().map(move |token| {
        let start = token.as_ptr() as usize - input.as_ptr() as usize;
        (start..start + token.len(), token)
    })
}

/// Parses the token as a number of type `T`.
fn parse_number<T: std::str::FromStr>(
    (span, token): (Range<usize>, &str),
    expected: &'static str,
) -> Result<T, Error> {
    token.parse().map_err(|_| Error::new(vec![span], InvalidNumber {
        token: token.to_string(),
        expected,
    }))
}

/// Parses a line of the form `[:command] <height> [seed]`.
fn parse_request(input: &str) -> Result<Request, Error> {
    let mut tokens = tokens(input).peekable();

    let command = match tokens.peek() {
        Some((span, token)) if token.starts_with(':') => {
            let command = match *token {
                ":levels" => Command::Levels,
                ":simplify" => Command::Simplify,
                _ => return Err(Error::new(vec![span.clone()], UnknownCommand {
                    command: token.to_string(),
                })),
            };
            tokens.next();
            command
        },
        _ => Command::Render,
    };

    let (height_span, height) = match tokens.next() {
        Some(token) => (token.0.clone(), parse_number(token, "height")?),
        None => return Err(Error::new(vec![input.len()..input.len()], MissingHeight)),
    };
    let seed = tokens.next().map(|token| parse_number(token, "seed")).transpose()?;

    if let Some((span, token)) = tokens.next() {
        return Err(Error::new(vec![span], UnexpectedArgument { token: token.to_string() }));
    }

    Ok(Request { command, height, seed, height_span })
}

/// Generates the tree requested by the input line and formats the output for the command.
fn run(input: &str, generator: &Generator) -> Result<String, Error> {
    let request = parse_request(input)?;
    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let root = generator
        .generate(request.height, &mut rng)
        .map_err(|err| err.with_spans(vec![request.height_span.clone()]))?;
    let tree = FunctionTree::new(root);

    let output = match request.command {
        Command::Render => tree.render(),
        Command::Levels => tree.levels()
            .into_iter()
            .map(|(height, nodes)| {
                let labels = nodes.iter().map(|node| node.value()).collect::<Vec<_>>();
                format!("{}: {}", height, labels.join(", "))
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Command::Simplify => {
            let (simplified, steps) = simplify_tree_with_steps(tree.root());
            tracing::debug!(?steps, "simplified tree");
            format!("{}\n= {}", tree.render(), FunctionTree::new(simplified).render())
        },
    };
    Ok(output)
}

/// Runs the input line, printing the output or reporting the error to stderr.
fn run_line(src_id: &str, input: &str, generator: &Generator) {
    match run(input, generator) {
        Ok(output) => println!("{}", output),
        Err(err) => err.report_to_stderr(src_id, input),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let generator = Generator::default();
    let args = std::env::args().skip(1).collect::<Vec<_>>();

    if !args.is_empty() {
        // generate a single tree from the arguments
        run_line("args", &args.join(" "), &generator);
    } else if !io::stdin().is_terminal() {
        // one request per line
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) if line.trim().is_empty() => (),
                Ok(line) => run_line("input", &line, &generator),
                Err(err) => {
                    eprintln!("{}", err);
                    break;
                },
            }
        }
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("{}", err);
                return;
            },
        };

        fn process_line(rl: &mut DefaultEditor, generator: &Generator) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            run_line("input", &input, generator);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &generator) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use functree::error::InvalidHeight;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_render() {
        assert_eq!(parse_request("3 42").unwrap(), Request {
            command: Command::Render,
            height: 3,
            seed: Some(42),
            height_span: 0..1,
        });
    }

    #[test]
    fn parse_command() {
        let request = parse_request("  :levels 12").unwrap();
        assert_eq!(request.command, Command::Levels);
        assert_eq!(request.height, 12);
        assert_eq!(request.seed, None);
        assert_eq!(request.height_span, 10..12);
    }

    #[test]
    fn bad_number_points_at_token() {
        let err = parse_request(":simplify 3 abc").unwrap_err();
        assert_eq!(err.spans, vec![12..15]);
        assert_eq!(
            err.downcast_ref::<InvalidNumber>(),
            Some(&InvalidNumber { token: "abc".to_string(), expected: "seed" }),
        );
    }

    #[test]
    fn bad_input() {
        assert!(parse_request("").unwrap_err().is::<MissingHeight>());
        assert!(parse_request(":tree 3").unwrap_err().is::<UnknownCommand>());
        assert!(parse_request("3 4 5").unwrap_err().is::<UnexpectedArgument>());
    }

    #[test]
    fn invalid_height_points_at_height() {
        let err = run("  0 1", &Generator::default()).unwrap_err();
        assert!(err.is::<InvalidHeight>());
        assert_eq!(err.spans, vec![2..3]);
    }

    #[test]
    fn seeded_output_is_stable() {
        let generator = Generator::default();
        assert_eq!(run("4 9", &generator).unwrap(), run("4 9", &generator).unwrap());

        let levels = run(":levels 3 9", &generator).unwrap();
        assert_eq!(levels.lines().count(), 3);
        assert!(levels.starts_with("1: "));

        let simplified = run(":simplify 3 9", &generator).unwrap();
        assert_eq!(simplified.lines().count(), 2);
    }
}
