use clap::Parser;
use miette::Result;
use odt::cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    match cli.command {
        Commands::New(args) => commands::new::run(args),
        Commands::Add(args) => commands::add::run(args),
        Commands::Remove(args) => commands::rm::run(args),
        Commands::SetKind(args) => commands::set_kind::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Compute(args) => commands::compute::run(args),
        Commands::Validate(args) => commands::validate::run(args),
    }
}
