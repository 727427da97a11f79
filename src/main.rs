use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod add_command;
mod console;
mod delete_command;
mod lesson;
mod list_command;
mod schedule;
mod schedule_command;
mod store;
mod tutee;

use add_command::{AddArgs, AddCommand};
use console::ConsoleMarkdownList;
use delete_command::{DeleteArgs, DeleteCommand};
use list_command::ListCommand;
use schedule_command::ScheduleCommand;
use store::JsonTuteeStore;

/// 生徒の記録と週間レッスンのスケジュールを管理するCLIアプリケーション。
///
/// # Examples
/// ```
/// $ cargo run -- add --name Amy --lesson "mon 10:00-11:00 Math"
/// $ cargo run -- schedule
/// ```
#[derive(Debug, Parser)]
#[clap(version, about)]
struct Args {
    #[clap(
        short = 'f',
        long = "file",
        help = "Sets a custom path for the tutee data file",
        global = true
    )]
    file: Option<PathBuf>,

    #[clap(
        short = 'v',
        long = "verbose",
        help = "Enables debug logging",
        global = true
    )]
    verbose: bool,

    #[clap(subcommand)]
    subcommand: SubCommands,
}

/// サブコマンドを表す列挙型。
#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Adds a tutee to the records
    Add(AddArgs),
    /// Deletes the tutee at the given index
    Delete(DeleteArgs),
    /// Lists all tutees
    List,
    /// Shows the weekly lesson schedule
    Schedule,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logger(args.verbose).context("Failed to set up the logger")?;

    let store = JsonTuteeStore::new(args.file).context("Failed to open the tutee store")?;

    match args.subcommand {
        SubCommands::Add(add) => {
            let tutee = AddCommand::new(&store).run(add)?;
            println!("Added tutee: {}", tutee.name);
        }
        SubCommands::Delete(delete) => {
            let tutee = DeleteCommand::new(&store).run(delete)?;
            println!("Deleted tutee: {}", tutee.name);
        }
        SubCommands::List => {
            let mut stdout = io::stdout();
            let mut presenter = ConsoleMarkdownList::new(&mut stdout);
            ListCommand::new(&store).run(&mut presenter)?;
        }
        SubCommands::Schedule => {
            let agenda = ScheduleCommand::new(&store).run()?;
            println!("{}", agenda);
        }
    }

    Ok(())
}

/// ロガーを初期化する。
///
/// ログはstderrへ出力し、stdoutの表示結果と混ざらないようにする。
fn setup_logger(verbose: bool) -> Result<()> {
    let colors = fern::colors::ColoredLevelConfig::new();
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()?;

    Ok(())
}
