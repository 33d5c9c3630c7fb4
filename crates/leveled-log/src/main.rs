mod cli;
mod logging;
mod pipe;

use clap::Parser;

use crate::cli::Args;
use leveled_log::LogResult;

fn main() -> LogResult<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let opts = args.log_options()?;
    // Exits with status 1 when the file cannot be opened.
    leveled_log::init(
        &opts.file_name,
        opts.mirror_to_console,
        opts.format_flags,
        opts.level_mask,
    );

    let stream = leveled_log::global().get(args.level);
    if args.message.is_empty() {
        pipe::run(std::io::stdin().lock(), stream)?;
    } else if let Some((last, rest)) = args.message.split_last().filter(|_| args.fatal) {
        for msg in rest {
            stream.print(msg);
        }
        stream.fatal(last);
    } else {
        for msg in &args.message {
            stream.print(msg);
        }
    }
    Ok(())
}
