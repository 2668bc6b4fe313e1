use clap::{Parser, Subcommand};
use setup_banner::cli::{self, Context, GlobalArgs};
use setup_banner::error::{Error, Result};
use setup_banner::logging::{self, Verbosity};
use setup_banner::utils::output::{print_error, print_hint};
use std::process;

#[derive(Parser)]
#[command(name = "setup-banner")]
#[command(version)]
#[command(about = "Print ANSI-styled status lines at the start of a project setup")]
#[command(after_help = "\
Getting started:
  setup-banner                            Print the setup-start banner
  setup-banner paint 'Detected Linux' -s bright_blue
  setup-banner palette                    List the available styles")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the setup-start banner (default)
    #[command(display_order = 1)]
    Start(cli::start::StartArgs),
    /// Style one line of text
    #[command(display_order = 2)]
    Paint(cli::paint::PaintArgs),
    /// List named styles
    #[command(display_order = 3)]
    Palette(cli::palette::PaletteArgs),
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = Context::load(cli.global.config.as_deref())?;
    let stdout = std::io::stdout().lock();

    match &cli.command {
        None => cli::start::execute(&cli::start::StartArgs::default(), &ctx, stdout),
        Some(Commands::Start(args)) => cli::start::execute(args, &ctx, stdout),
        Some(Commands::Paint(args)) => cli::paint::execute(args, &ctx, stdout),
        Some(Commands::Palette(args)) => cli::palette::execute(args, &ctx, stdout),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.global.quiet, cli.global.verbose));

    if let Err(e) = run(&cli) {
        print_error(&e.to_string());
        if matches!(e, Error::UnknownStyle { .. }) {
            print_hint("run `setup-banner palette` to list styles, or add one under [styles] in the config file");
        }
        process::exit(1);
    }
}
