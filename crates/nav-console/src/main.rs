use anyhow::Result;
use clap::{Parser, Subcommand};
use nav_console::{commands, snapshot};
use navs::{NavQuery, Sort, SortOrder};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "navtree")]
#[command(about = "Inspect and edit navigation menu snapshots")]
struct Cli {
    /// JSON file with build options
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fail on duplicate names and children claimed by two groups
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the group forest as a tree
    Tree {
        groups: PathBuf,

        /// Only print the subtree of this group
        #[arg(long)]
        name: Option<String>,
    },
    /// Print the chain of groups leading to a group
    Path { groups: PathBuf, name: String },
    /// Print the forest converted back into flat records
    Flatten {
        groups: PathBuf,

        /// Rewrite priorities to sibling order first
        #[arg(long)]
        renumber: bool,
    },
    /// Apply a JSON list of edit commands and print the resulting change set
    Apply { groups: PathBuf, commands: PathBuf },
    /// List navs, filtered, sorted and paged
    Navs {
        navs: PathBuf,

        /// Group snapshot; lists navs grouped by group instead of paging
        #[arg(long)]
        groups: Option<PathBuf>,

        #[arg(long)]
        group: Option<String>,

        #[arg(long)]
        keyword: Option<String>,

        /// Like `priority,desc`; may be repeated
        #[arg(long)]
        sort: Vec<SortOrder>,

        #[arg(long, default_value = "1")]
        page: usize,

        /// Page size, 0 lists everything
        #[arg(long, default_value = "0")]
        size: usize,
    },
}

/// Run a subcommand; `Ok(false)` means the requested group was not found
fn run(cli: Cli) -> Result<bool> {
    let mut options = snapshot::load_options(cli.config.as_deref())?;
    if cli.strict {
        options = options.strict();
    }

    match cli.command {
        Commands::Tree { groups, name } => {
            let groups = snapshot::load_groups(&groups)?;
            print!("{}", commands::tree(&groups, &options, name.as_deref())?);
        }
        Commands::Path { groups, name } => {
            let groups = snapshot::load_groups(&groups)?;
            match commands::path(&groups, &options, &name)? {
                Some(path) => println!("{}", path),
                None => {
                    eprintln!("Group `{}` not found", name);
                    return Ok(false);
                }
            }
        }
        Commands::Flatten { groups, renumber } => {
            let groups = snapshot::load_groups(&groups)?;
            println!("{}", commands::flatten(&groups, &options, renumber)?);
        }
        Commands::Apply {
            groups,
            commands: commands_path,
        } => {
            let groups = snapshot::load_groups(&groups)?;
            let edits = snapshot::load_commands(&commands_path)?;
            println!("{}", commands::apply(&groups, &options, edits)?);
        }
        Commands::Navs {
            navs,
            groups,
            group,
            keyword,
            sort,
            page,
            size,
        } => {
            let navs = snapshot::load_navs(&navs)?;
            let groups = groups
                .map(|path| snapshot::load_groups(&path))
                .transpose()?;

            let mut query = NavQuery::new().sort(Sort::from(sort));
            query.group_name = group;
            query.keyword = keyword;

            println!(
                "{}",
                commands::navs(&navs, groups.as_deref(), &query, page, size)?
            );
        }
    }

    Ok(true)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}
