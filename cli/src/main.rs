mod commands;
mod terminal;

use commands::{CommandLine, Commands, ports, sweep, urlenc, usergen, users, wordlist};
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    match commands.command {
        Commands::Sweep {
            target,
            workers,
            timeout,
            quiet,
        } => sweep::sweep(target, workers, timeout, quiet).await,
        Commands::Urlenc { decode, text } => urlenc::run(decode, &text),
        Commands::Usergen { input, output } => usergen::run(input.as_deref(), &output),
        Commands::Ports { file } => ports::run(&file),
        Commands::Users {
            input,
            output,
            starts_with,
            ends_with,
        } => users::run(&input, &output, starts_with.as_deref(), ends_with.as_deref()),
        Commands::Wordlist {
            input,
            output,
            min,
            max,
            separator,
        } => wordlist::run(&input, &output, min, max, &separator),
    }
}
