use anyhow::{Context, Result, bail};
use clap::Parser;

use abnf_regex::{Composer, Spec};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Template with `:name` and `:#name` rule references
    #[arg(value_name = "TEMPLATE")]
    template: Option<String>,

    /// Grammar rule names resolve against (core, rfc3986, rfc9110)
    #[arg(short, long, value_name = "GRAMMAR", default_value = "rfc9110")]
    grammar: Spec,

    /// Append a rule's fragment before the template
    #[arg(short = 'r', long = "rule", value_name = "NAME")]
    rules: Vec<String>,

    /// Append a rule's fragment plus one comma-separated repeat
    #[arg(short = 'c', long = "comma", value_name = "NAME")]
    comma_rules: Vec<String>,

    /// Wrap the pattern in ^ and $
    #[arg(short, long)]
    anchor: bool,

    /// Keep whitespace in the template
    #[arg(short, long)]
    keep_whitespace: bool,

    /// List the grammar's rules and exit
    #[arg(
        short,
        long,
        conflicts_with_all = ["template", "rules", "comma_rules", "anchor", "keep_whitespace"]
    )]
    list: bool,

    /// Log rule discovery and references to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let default = if verbose {
        "abnf_regex=debug"
    } else {
        "abnf_regex=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut composer = Composer::new(args.grammar.grammar());

    if args.list {
        for (_, rule) in composer.registry().iter() {
            println!("{rule}");
        }
        return Ok(());
    }

    if args.template.is_none() && args.rules.is_empty() && args.comma_rules.is_empty() {
        bail!("nothing to compose: give a TEMPLATE, --rule or --comma");
    }

    if args.anchor {
        composer.literal("^");
    }
    for name in &args.rules {
        composer
            .reference(name)
            .with_context(|| format!("--rule {name}"))?;
    }
    for name in &args.comma_rules {
        composer
            .reference_comma_separated(name)
            .with_context(|| format!("--comma {name}"))?;
    }
    if let Some(template) = &args.template {
        composer.from_template_with(template, !args.keep_whitespace);
    }
    if args.anchor {
        composer.literal("$");
    }

    println!("{composer}");
    Ok(())
}
