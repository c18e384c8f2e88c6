use crate::prelude::*;
use clap::Parser;

mod api;
mod board;
mod error;
mod posts;
mod prelude;
mod serve;
mod users;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse employee posts and their comments"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the posts API
    #[clap(
        long,
        env = "POSTBOARD_API_BASE",
        global = true,
        default_value = api::DEFAULT_API_BASE
    )]
    api_base: String,

    /// Request timeout in seconds
    #[clap(long, env = "POSTBOARD_TIMEOUT", global = true, default_value = "30")]
    timeout: u64,

    /// Whether to display additional information.
    #[clap(long, env = "POSTBOARD_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    /// Build the API client described by the global flags
    pub fn source(&self) -> Result<api::JsonPlaceholder> {
        api::JsonPlaceholder::new(
            &self.api_base,
            std::time::Duration::from_secs(self.timeout),
        )
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// List the users available in the select menu
    Users(crate::users::UsersOptions),

    /// Render the posts of one user
    Posts(crate::posts::PostsOptions),

    /// Serve the page over HTTP
    Serve(crate::serve::ServeOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Users(options) => crate::users::run(options, app.global).await,
        SubCommands::Posts(options) => crate::posts::run(options, app.global).await,
        SubCommands::Serve(options) => crate::serve::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
