use anyhow::Result;
use clap::{Parser, Subcommand};

use spendwise::api::HttpApi;
use spendwise::cli::{
    handle_budget_command, handle_dashboard, handle_expense_command, handle_login,
    handle_logout, handle_whoami, BudgetCommands, CliContext, ExpenseCommands, LoginArgs,
};
use spendwise::config::{settings::API_URL_ENV, Settings, SpendwisePaths};
use spendwise::display::colors_enabled;
use spendwise::logging::init_tracing;
use spendwise::storage::SessionStore;

#[derive(Parser)]
#[command(
    name = "spendwise",
    version,
    about = "Track expenses and budgets from the terminal",
    long_about = "Spendwise records expenses, follows budget limits and \
                  summarises your spending against a Spendwise backend."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and remember the session
    Login(LoginArgs),

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Spending summary, trends and budget alerts
    #[command(alias = "dash")]
    Dashboard,

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show current configuration and paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = SpendwisePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    settings.apply_env_overrides();

    let sessions = SessionStore::new(paths.session_file());
    let api = HttpApi::from_settings(&settings)?;
    let ctx = CliContext {
        api: &api,
        sessions: &sessions,
        settings: &settings,
        color: colors_enabled(),
    };

    match cli.command {
        Some(Commands::Login(args)) => handle_login(&ctx, args).await?,
        Some(Commands::Logout) => handle_logout(&ctx)?,
        Some(Commands::Whoami) => handle_whoami(&ctx)?,
        Some(Commands::Dashboard) => handle_dashboard(&ctx).await?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&ctx, cmd).await?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&ctx, cmd).await?,
        Some(Commands::Config) => {
            if Settings::create_if_missing(&paths)? {
                println!("Created default settings at {}", paths.settings_file().display());
                println!();
            }
            println!("Spendwise Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Session file:     {}", paths.session_file().display());
            println!();
            println!("Settings:");
            println!("  API base URL:     {}", settings.api_base_url);
            if std::env::var_os(API_URL_ENV).is_some() {
                println!("                    (from {})", API_URL_ENV);
            }
            match settings.request_timeout_secs {
                Some(secs) => println!("  Request timeout:  {}s", secs),
                None => println!("  Request timeout:  none"),
            }
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Recent expenses:  {}", settings.recent_expense_count);
            println!();
            match sessions.load()? {
                Some(session) => println!("Logged in as {}", session),
                None => println!("Not logged in."),
            }
        }
        None => {
            println!("Spendwise - expense tracking from the terminal");
            println!();
            println!("Run 'spendwise --help' for usage information.");
            println!("Run 'spendwise login' to sign in.");
        }
    }

    Ok(())
}
