use clap::Parser;
use like_match::{expect, AssertionError, LikeOptions, Value};
use std::process::ExitCode;
use tracing::Level;

/// Check whether a JSON topic is "like" an expected JSON value.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Observed value (JSON document)
    topic: String,
    /// Expected value (JSON document)
    expected: String,
    /// Treat RFC 3339 strings as timestamps
    #[arg(long)]
    timestamps: bool,
    /// Seconds two timestamps may differ by
    #[arg(long, default_value_t = like_match::DATE_THRESHOLD)]
    threshold: f64,
    /// Maximum container nesting depth
    #[arg(long, default_value_t = like_match::DEFAULT_MAX_DEPTH)]
    max_depth: usize,
    /// Assert that the values are NOT alike
    #[arg(long = "not")]
    negate: bool,
    /// Log comparison steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse(raw: &str, timestamps: bool) -> Result<Value, serde_json::Error> {
    let json: serde_json::Value = serde_json::from_str(raw)?;
    Ok(if timestamps {
        Value::from_json_with_timestamps(json)
    } else {
        Value::from(json)
    })
}

fn main() -> ExitCode {
    // Parse CLI arguments.
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::TRACE } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    // Parse both JSON documents.
    let (topic, expected) = match (parse(&args.topic, args.timestamps), parse(&args.expected, args.timestamps)) {
        (Ok(t), Ok(e)) => (t, e),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Invalid JSON: {e}");
            return ExitCode::from(2);
        }
    };

    let options = LikeOptions::default()
        .with_time_threshold(args.threshold)
        .with_max_depth(args.max_depth);
    let expectation = expect(topic).with_options(options);
    let outcome = if args.negate {
        expectation.not_to_be_like(expected)
    } else {
        expectation.to_be_like(expected)
    };

    match outcome {
        Ok(()) => {
            println!("{}", if args.negate { "not alike" } else { "alike" });
            ExitCode::SUCCESS
        }
        Err(AssertionError::Failed { message }) => {
            println!("{message}");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
