use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

use arbor::{Config, Error, Grammar, Outcome, Rendered, Session, Term};

#[derive(Parser)]
#[command(name = "arbor")]
#[command(about = "Prints every derivation of a sentence under a CNF grammar")]
struct Args {
    /// Grammar file, one `LHS -> RHS | RHS` rule per line
    grammar: PathBuf,

    /// The sentence; words are split on whitespace
    #[arg(required = true)]
    sentence: Vec<String>,

    /// Symbol every parse must be headed by
    #[arg(long, default_value = "S")]
    top: String,

    /// Give up once the chart holds this many items
    #[arg(long, conflicts_with = "unbounded")]
    max_items: Option<usize>,

    /// No item budget at all
    #[arg(long)]
    unbounded: bool,

    /// Give up after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Spaces per nesting level in printed trees
    #[arg(long, default_value_t = arbor::rendering::DEFAULT_INDENT)]
    indent: usize,

    /// Also print each tree on one line, in bracketed form
    #[arg(long)]
    bracketed: bool,

    /// Dump every bin of the chart after parsing
    #[arg(long)]
    chart: bool,

    /// Print the loaded rule tables before parsing
    #[arg(long = "grammar")]
    show_grammar: bool,

    /// Raise the log level (info, debug, trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> Config {
        let mut config = Config::default()
            .with_top(self.top.as_str())
            .with_indent(self.indent)
            .with_time_limit(self.timeout_ms.map(Duration::from_millis));
        if self.unbounded {
            config = config.with_max_items(None);
        } else if let Some(n) = self.max_items {
            config = config.with_max_items(Some(n));
        }
        config
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn run(args: &Args) -> Result<bool, Error> {
    let grammar = Grammar::from_path(&args.grammar)?;
    if args.show_grammar {
        print!("{}", grammar);
        println!();
    }

    let config = args.config();
    let tokens: Vec<Term> = args.sentence.iter()
        .flat_map(|s| s.split_whitespace())
        .map(Term::from)
        .collect();

    let session = Session::new(&grammar, config.clone());
    let parse = session.parse(&tokens)?;
    if args.chart {
        print!("{}", parse.chart());
        println!();
    }

    match parse.outcome() {
        Outcome::Parsed(trees) => {
            for (i, tree) in trees.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                if args.bracketed {
                    println!("{}", tree);
                }
                println!("{}", tree.rendered_with(config.indent));
            }
            Ok(true)
        }
        Outcome::NoParse => {
            println!("no parse: the sentence is not derivable from {}", config.top);
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}
