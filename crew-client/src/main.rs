use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use log::{debug, LevelFilter};
use shared::{
    data::MemberId,
    filter::{roles, MemberFilter},
    view::{CrewView, DetailSelection, Theme},
};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use api::load_crew;
use prefs::FileStore;

mod api;
mod prefs;
mod render;

#[derive(Parser)]
#[command(name = "crew", about = "Browse the Ramp Crew members directory")]
struct Cli {
    /// Base URL of the members service
    #[arg(long, env = "CREW_API_URL", default_value = "http://localhost:5174")]
    api_url: String,

    /// File holding saved preferences
    #[arg(long, default_value = "crew-prefs.json")]
    prefs: PathBuf,

    /// Log debug output
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show one team, starting from the board
    Teams {
        /// Advance this many teams, wrapping around
        #[arg(long, default_value_t = 0)]
        next: usize,
    },
    /// Search by name, team or bio
    Search {
        query: Option<String>,
        /// Only members with exactly this role
        #[arg(long, default_value = "")]
        role: String,
    },
    /// List the roles available for filtering
    Roles,
    /// Show one member's full profile
    Show { id: MemberId },
    /// Print the colour theme
    Theme {
        /// Switch to the next theme and remember it
        #[arg(long)]
        cycle: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    match cli.command {
        Command::Teams { next } => {
            let mut view = CrewView::new(load_crew(&cli.api_url));
            for _ in 0..next {
                view.next_team();
            }

            let count = view.buckets().len();
            match (view.current_bucket(), view.team_index()) {
                (Some(bucket), Some(index)) => println!("{}", render::bucket(&bucket, index, count)),
                _ => println!("{}", render::NO_MEMBERS),
            }
        }
        Command::Search { query, role } => {
            let members = load_crew(&cli.api_url);
            let filter = MemberFilter::new(query.unwrap_or_default(), role);
            debug!("Filtering {} members with {filter:?}", members.len());
            println!("{}", render::list(filter.apply(&members), render::NO_MATCHES));
        }
        Command::Roles => {
            for role in roles(&load_crew(&cli.api_url)) {
                println!("{role}");
            }
        }
        Command::Show { id } => {
            let members = load_crew(&cli.api_url);
            let mut selection = DetailSelection::default();
            selection.select(id.clone());
            match selection.resolve(&members) {
                Some(member) => println!("{}", render::detail(member)),
                None => println!("No member with id {id}."),
            }
        }
        Command::Theme { cycle } => {
            let mut store = FileStore::open(&cli.prefs)?;
            let mut theme = Theme::load(&store);
            if cycle {
                theme = theme.cycle();
                theme.save(&mut store)?;
            }
            println!("{theme}");
        }
    }

    Ok(())
}
