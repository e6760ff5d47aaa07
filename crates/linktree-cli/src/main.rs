use linktree_core::{DiagramConfig, DiagramGenerator, SessionSnapshot};
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Core(linktree_core::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Core(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<linktree_core::Error> for CliError {
    fn from(value: linktree_core::Error) -> Self {
        Self::Core(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Render,
    Check,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    base_url: Option<String>,
    config: Option<String>,
    body_only: bool,
    verbose: bool,
    json: bool,
    out: Option<String>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckOut {
    nodes: usize,
    matched: usize,
    pruned: usize,
    log_entries: usize,
}

fn usage() -> &'static str {
    "linktree-cli\n\
\n\
USAGE:\n\
  linktree-cli [render] [--base-url <url>] [--config <path>] [--body-only] [--out <path>] [--verbose] [<snapshot>|-]\n\
  linktree-cli check [--json] [<snapshot>|-]\n\
\n\
NOTES:\n\
  - If <snapshot> is omitted or '-', input is read from stdin.\n\
  - A snapshot is a JSON object: { \"tree\": { \"root\": <node> } | null, \"log\": [<entry>, ...] }.\n\
  - render prints PlantUML mindmap markup to stdout by default; use --out to write a file.\n\
  - --base-url overrides `baseUrl` from --config; it is stripped from link labels.\n\
  - check prints how many tree nodes are rendered and how many are pruned.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "render" => args.command = Command::Render,
            "check" => args.command = Command::Check,
            "--body-only" => args.body_only = true,
            "--verbose" | "-v" => args.verbose = true,
            "--json" => args.json = true,
            "--base-url" => {
                let Some(url) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.base_url = Some(url.clone());
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None | Some("-") => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn load_config(args: &Args) -> Result<DiagramConfig, CliError> {
    let mut config = match args.config.as_deref() {
        Some(path) => DiagramConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => DiagramConfig::default(),
    };
    if let Some(base_url) = args.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }
    Ok(config)
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(&args)?;
    let text = read_input(args.input.as_deref())?;
    let snapshot = SessionSnapshot::from_json_str(&text)?;
    let store = snapshot.event_store();
    let generator = DiagramGenerator::new(&store, &config);
    tracing::debug!(
        log_entries = store.len(),
        has_tree = snapshot.tree.is_some(),
        base_url = config.base_url(),
        "loaded snapshot"
    );

    match args.command {
        Command::Render => {
            let markup = if args.body_only {
                generator.render_body(&snapshot)
            } else {
                generator.generate(&snapshot)
            };
            write_text(&markup, args.out.as_deref())
        }
        Command::Check => {
            let coverage = generator.coverage(&snapshot);
            let out = CheckOut {
                nodes: coverage.nodes,
                matched: coverage.matched,
                pruned: coverage.pruned,
                log_entries: store.len(),
            };
            let line = if args.json {
                serde_json::to_string(&out)?
            } else {
                format!(
                    "nodes={} matched={} pruned={}",
                    out.nodes, out.matched, out.pruned
                )
            };
            write_text(&format!("{line}\n"), args.out.as_deref())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_tracing(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
