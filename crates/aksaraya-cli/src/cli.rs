//! Argument parsing and command dispatch.

use std::path::PathBuf;

use aksaraya_api_models::{CatalogId, SortOrder};
use aksaraya_client::config::DEFAULT_BASE_URL;
use aksaraya_telemetry::{GlobalContextGuard, LogFormat, LoggingConfig, init_logging};
use clap::{Args, Parser, Subcommand, ValueEnum};
use url::Url;
use uuid::Uuid;

use crate::client::{AppContext, CliResult, parse_url};
use crate::commands::admin::{
    handle_admin_create, handle_admin_delete, handle_admin_list, handle_admin_update,
};
use crate::commands::auth::{handle_login, handle_logout, handle_register, handle_whoami};
use crate::commands::catalogs::{handle_browse, handle_show};
use crate::commands::wishlist::{
    handle_wishlist_add, handle_wishlist_list, handle_wishlist_remove, handle_wishlist_toggle,
};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Parses CLI arguments, executes the requested command, and reports the
/// outcome. Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: DEFAULT_LOG_LEVEL,
        format: cli.log_format.unwrap_or_else(LogFormat::infer),
        version: env!("CARGO_PKG_VERSION"),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err:#}");
    }
    let command_name = command_label(&cli.command);
    let _span = GlobalContextGuard::new(command_name);

    let trace_id = Uuid::new_v4().to_string();
    let ctx = match AppContext::from_cli(&cli, &trace_id) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            return err.exit_code();
        }
    };

    match dispatch(cli, &ctx).await {
        Ok(()) => {
            tracing::debug!(command = command_name, "command succeeded");
            0
        }
        Err(err) => {
            let message = err.display_message();
            tracing::debug!(command = command_name, error = %message, "command failed");
            eprintln!("error: {message}");
            err.exit_code()
        }
    }
}

async fn dispatch(cli: Cli, ctx: &AppContext) -> CliResult<()> {
    let output = cli.output;
    match cli.command {
        Command::Login(args) => handle_login(ctx, args).await,
        Command::Register(args) => handle_register(ctx, args).await,
        Command::Logout => handle_logout(ctx),
        Command::Whoami(args) => handle_whoami(ctx, args, output).await,
        Command::Browse(args) => handle_browse(ctx, args, output).await,
        Command::Show(args) => handle_show(ctx, args, output).await,
        Command::Wishlist(command) => match command {
            WishlistCommand::List => handle_wishlist_list(ctx, output),
            WishlistCommand::Add(args) => handle_wishlist_add(ctx, args).await,
            WishlistCommand::Remove(args) => handle_wishlist_remove(ctx, args).await,
            WishlistCommand::Toggle(args) => handle_wishlist_toggle(ctx, args).await,
        },
        Command::Admin(command) => match command {
            AdminCommand::List(args) => handle_admin_list(ctx, args, output).await,
            AdminCommand::Create(args) => handle_admin_create(ctx, args).await,
            AdminCommand::Update(args) => handle_admin_update(ctx, args).await,
            AdminCommand::Delete(args) => handle_admin_delete(ctx, args).await,
        },
    }
}

#[derive(Parser)]
#[command(name = "aksaraya", about = "Browse and manage the Aksaraya book catalog")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "AKSARAYA_API_URL",
        value_parser = parse_url,
        default_value = DEFAULT_BASE_URL
    )]
    pub(crate) api_url: Url,
    #[arg(
        long,
        global = true,
        env = "AKSARAYA_SESSION_FILE",
        help = "Where the login session is stored (defaults to ~/.config/aksaraya/session.json)"
    )]
    pub(crate) session_file: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        env = "AKSARAYA_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub(crate) timeout: u64,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long,
        global = true,
        env = "AKSARAYA_LOG_FORMAT",
        value_parser = parse_log_format,
        help = "Log format on stderr: json, pretty, or compact"
    )]
    pub(crate) log_format: Option<LogFormat>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Log in and store the session.
    Login(LoginArgs),
    /// Create an account, then log in.
    Register(RegisterArgs),
    /// Forget the stored session.
    Logout,
    /// Show the logged-in account.
    Whoami(WhoamiArgs),
    /// Search and page through the catalog.
    Browse(BrowseArgs),
    /// Show one catalog entry.
    Show(ShowArgs),
    /// Manage the logged-in user's wishlist.
    #[command(subcommand)]
    Wishlist(WishlistCommand),
    /// Catalog administration (admin role).
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Subcommand)]
pub(crate) enum WishlistCommand {
    /// List saved entries.
    List,
    /// Save an entry.
    Add(CatalogIdArgs),
    /// Remove a saved entry.
    Remove(CatalogIdArgs),
    /// Save or remove an entry depending on its current membership.
    Toggle(CatalogIdArgs),
}

#[derive(Subcommand)]
pub(crate) enum AdminCommand {
    /// List every entry, optionally filtered by title or author.
    List(AdminListArgs),
    /// Create an entry.
    Create(CatalogCreateArgs),
    /// Update an entry; omitted fields keep their current value.
    Update(CatalogUpdateArgs),
    /// Delete an entry after confirmation.
    Delete(CatalogDeleteArgs),
}

#[derive(Args)]
pub(crate) struct LoginArgs {
    #[arg(long)]
    pub(crate) email: String,
    #[arg(
        long,
        env = "AKSARAYA_PASSWORD",
        help = "Password (prompted when omitted on a terminal)"
    )]
    pub(crate) password: Option<String>,
}

#[derive(Args)]
pub(crate) struct RegisterArgs {
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) email: String,
    #[arg(
        long,
        env = "AKSARAYA_PASSWORD",
        help = "Password (prompted when omitted on a terminal)"
    )]
    pub(crate) password: Option<String>,
}

#[derive(Args, Default)]
pub(crate) struct WhoamiArgs {
    #[arg(long, help = "Re-fetch the account from the server first")]
    pub(crate) refresh: bool,
}

#[derive(Args)]
pub(crate) struct BrowseArgs {
    #[arg(long, short = 'k')]
    pub(crate) keyword: Option<String>,
    #[arg(long, short = 'g')]
    pub(crate) genre: Option<String>,
    #[arg(long = "type")]
    pub(crate) kind: Option<String>,
    #[arg(long)]
    pub(crate) year: Option<i32>,
    #[arg(long, help = "Sort column, e.g. title or year")]
    pub(crate) sort_by: Option<String>,
    #[arg(long, value_enum, default_value_t = SortArg::Asc)]
    pub(crate) order: SortArg,
    #[arg(long, default_value_t = 1)]
    pub(crate) page: u32,
    #[arg(long)]
    pub(crate) limit: Option<u32>,
}

impl Default for BrowseArgs {
    fn default() -> Self {
        Self {
            keyword: None,
            genre: None,
            kind: None,
            year: None,
            sort_by: None,
            order: SortArg::Asc,
            page: 1,
            limit: None,
        }
    }
}

#[derive(Args)]
pub(crate) struct ShowArgs {
    #[arg(help = "Catalog identifier")]
    pub(crate) id: CatalogId,
}

#[derive(Args)]
pub(crate) struct CatalogIdArgs {
    #[arg(help = "Catalog identifier")]
    pub(crate) id: CatalogId,
}

#[derive(Args, Default)]
pub(crate) struct AdminListArgs {
    #[arg(long, help = "Case-insensitive title or author filter")]
    pub(crate) search: Option<String>,
}

#[derive(Args, Default)]
pub(crate) struct CatalogCreateArgs {
    #[arg(long)]
    pub(crate) title: String,
    #[arg(long)]
    pub(crate) author: String,
    #[arg(long)]
    pub(crate) genre: String,
    #[arg(long)]
    pub(crate) year: String,
    #[arg(long = "type")]
    pub(crate) kind: String,
    #[arg(long, default_value = "")]
    pub(crate) publisher: String,
    #[arg(long, default_value = "")]
    pub(crate) synopsis: String,
    #[arg(long, help = "Path to a cover image")]
    pub(crate) cover: Option<PathBuf>,
}

#[derive(Args, Default)]
pub(crate) struct CatalogUpdateArgs {
    #[arg(help = "Catalog identifier")]
    pub(crate) id: CatalogId,
    #[arg(long)]
    pub(crate) title: Option<String>,
    #[arg(long)]
    pub(crate) author: Option<String>,
    #[arg(long)]
    pub(crate) genre: Option<String>,
    #[arg(long)]
    pub(crate) year: Option<String>,
    #[arg(long = "type")]
    pub(crate) kind: Option<String>,
    #[arg(long)]
    pub(crate) publisher: Option<String>,
    #[arg(long)]
    pub(crate) synopsis: Option<String>,
    #[arg(long, help = "Path to a replacement cover image")]
    pub(crate) cover: Option<PathBuf>,
}

#[derive(Args, Default)]
pub(crate) struct CatalogDeleteArgs {
    #[arg(help = "Catalog identifier")]
    pub(crate) id: CatalogId,
    #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
    pub(crate) yes: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortArg {
    Asc,
    Desc,
}

impl SortArg {
    pub(crate) const fn order(self) -> SortOrder {
        match self {
            Self::Asc => SortOrder::Asc,
            Self::Desc => SortOrder::Desc,
        }
    }
}

fn parse_log_format(input: &str) -> Result<LogFormat, String> {
    input.parse::<LogFormat>().map_err(|err| err.to_string())
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Login(_) => "login",
        Command::Register(_) => "register",
        Command::Logout => "logout",
        Command::Whoami(_) => "whoami",
        Command::Browse(_) => "browse",
        Command::Show(_) => "show",
        Command::Wishlist(WishlistCommand::List) => "wishlist_list",
        Command::Wishlist(WishlistCommand::Add(_)) => "wishlist_add",
        Command::Wishlist(WishlistCommand::Remove(_)) => "wishlist_remove",
        Command::Wishlist(WishlistCommand::Toggle(_)) => "wishlist_toggle",
        Command::Admin(AdminCommand::List(_)) => "admin_list",
        Command::Admin(AdminCommand::Create(_)) => "admin_create",
        Command::Admin(AdminCommand::Update(_)) => "admin_update",
        Command::Admin(AdminCommand::Delete(_)) => "admin_delete",
    }
}
