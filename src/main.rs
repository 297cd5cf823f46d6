mod app;
mod catalog;
mod error;
mod infra;
mod ui;

use std::process::ExitCode;

use app::controller::GalleryController;
use catalog::builtin::builtin_catalog;
use catalog::strings::StringTable;
use error::AppError;
use infra::config::AppConfig;

fn main() -> ExitCode {
    infra::logging::init_logging();
    let args: Vec<String> = std::env::args().collect();

    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(msg) => {
            eprintln!("{msg}");
            print_usage();
            return ExitCode::from(2);
        }
    };

    match run(invocation) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            eprintln!("art-space: {error}");
            ExitCode::from(1)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Ui,
    List,
    Show { steps: usize },
}

#[derive(Debug, Clone)]
struct Invocation {
    command: Command,
    config: AppConfig,
}

fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let mut config = AppConfig::default();
    let mut positional = Vec::new();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--assets" {
            let dir = iter.next().ok_or("missing value for --assets")?;
            config = config.with_assets_dir(dir);
        } else {
            positional.push(arg.as_str());
        }
    }

    let command = match positional.as_slice() {
        [] | ["ui"] => Command::Ui,
        ["list"] => Command::List,
        ["show"] => return Err("missing step count".to_string()),
        ["show", steps] => {
            let steps = steps
                .parse::<usize>()
                .map_err(|_| format!("invalid step count: {steps}"))?;
            Command::Show { steps }
        }
        [other, ..] => return Err(format!("unknown command: {other}")),
    };

    Ok(Invocation { command, config })
}

fn run(invocation: Invocation) -> Result<(), AppError> {
    let Invocation { command, config } = invocation;
    let strings = StringTable::load(&config.assets_dir)?;
    let mut controller = GalleryController::new(builtin_catalog()?);

    match command {
        Command::Ui => ui::app_shell::launch_window(controller, strings, &config),
        Command::List => {
            for (index, artwork) in controller.catalog().iter().enumerate() {
                let caption = strings.caption(artwork);
                println!(
                    "{index}\t{}\t{}\t{}",
                    caption.title, caption.byline, artwork.image.0
                );
            }
            Ok(())
        }
        Command::Show { steps } => {
            // Only the remainder matters; the cycle closes every len() steps.
            for _ in 0..steps % controller.len() {
                controller.next();
            }
            let caption = strings.caption(controller.current());
            println!(
                "[{}] {} - {}",
                controller.position_label(),
                caption.title,
                caption.byline
            );
            Ok(())
        }
    }
}

fn print_usage() {
    println!("usage:");
    println!("  art-space [ui] [--assets <dir>]");
    println!("  art-space list [--assets <dir>]");
    println!("  art-space show <steps> [--assets <dir>]");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(values: &[&str]) -> Vec<String> {
        std::iter::once("art-space")
            .chain(values.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn no_arguments_opens_ui() {
        let invocation = parse_args(&args(&[])).expect("empty args should parse");
        assert_eq!(invocation.command, Command::Ui);
    }

    #[test]
    fn parse_show_with_assets_override() {
        let invocation =
            parse_args(&args(&["show", "4", "--assets", "art"])).expect("show should parse");
        assert_eq!(invocation.command, Command::Show { steps: 4 });
        assert_eq!(invocation.config.assets_dir, PathBuf::from("art"));
    }

    #[test]
    fn parse_show_rejects_invalid_steps() {
        assert!(parse_args(&args(&["show", "-1"])).is_err());
        assert!(parse_args(&args(&["show"])).is_err());
    }

    #[test]
    fn parse_rejects_unknown_command_and_dangling_flag() {
        assert!(parse_args(&args(&["delete"])).is_err());
        assert!(parse_args(&args(&["list", "--assets"])).is_err());
    }
}
