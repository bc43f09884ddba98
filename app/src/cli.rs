//! Command-line surface
//!
//! Every subcommand is a visit to one route. Visits go through the router,
//! so the auth guard and unknown-path handling apply the same way they do
//! for `voltup open <path>`.

use crate::pages::{home, login, my_info, orders, products, roulette};
use crate::router::Route;
use crate::state::AppState;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use voltup_engine::auth::LoginOutcome;
use voltup_engine::Scope;

#[derive(Parser, Debug)]
#[command(name = "voltup")]
#[command(author, version, about = "VoltUp rewards client")]
pub struct Cli {
    /// Directory holding the local session database
    #[arg(long, global = true, env = "VOLTUP_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Backend environment (`development` or `production`)
    #[arg(long = "env", global = true, env = "VOLTUP_ENV")]
    pub environment: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Log in with a nickname
    Login {
        nickname: String,

        /// Local path to continue to after logging in
        #[arg(long)]
        return_url: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Balance, shortcuts and today's roulette
    Home,
    /// Daily roulette
    Roulette {
        /// Play today's spin
        #[arg(long)]
        spin: bool,
    },
    /// Product catalog
    Products,
    /// Buy a product
    Buy {
        /// Product id as shown in the catalog
        id: String,

        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Account and balance
    My {
        /// Include the point history
        #[arg(long)]
        detail: bool,
    },
    /// Order history
    Orders,
    /// Visit any path, e.g. `/orders` or `/login?returnUrl=%2Fmy`
    Open { path: String },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login { .. } => "login",
            Command::Logout => "logout",
            Command::Home => "home",
            Command::Roulette { .. } => "roulette",
            Command::Products => "products",
            Command::Buy { .. } => "buy",
            Command::My { .. } => "my",
            Command::Orders => "orders",
            Command::Open { .. } => "open",
        }
    }

    /// Location this command visits
    pub fn location(&self) -> String {
        match self {
            Command::Login { .. } | Command::Logout => Route::Login.path().to_string(),
            Command::Home => Route::Home.path().to_string(),
            Command::Roulette { .. } => Route::Roulette.path().to_string(),
            Command::Products | Command::Buy { .. } => Route::Products.path().to_string(),
            Command::My { .. } => Route::MyInfo.path().to_string(),
            Command::Orders => Route::Orders.path().to_string(),
            Command::Open { path } => path.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct PageOptions {
    spin: bool,
    detail: bool,
}

/// Run one command and return the page it ends on. Wheel frames, if any,
/// go to `on_frame` as they are drawn.
pub async fn execute(state: &AppState, scope: &Scope, command: Command, on_frame: &mut dyn FnMut(&str)) -> String {
    info!("Running {}", command.name());
    let location = command.location();

    match command {
        Command::Login { nickname, return_url } => {
            let (outcome, page) = login::submit(state, scope, &nickname, return_url.as_deref()).await;
            match outcome {
                LoginOutcome::LoggedIn { destination, .. } => {
                    let next = visit(state, scope, &destination, PageOptions::default(), on_frame).await;
                    format!("{}\n\n{}", page, next)
                }
                LoginOutcome::Rejected(_) => page,
            }
        }
        Command::Logout => my_info::logout(state).await,
        Command::Buy { id, quantity } => {
            let (route, _) = state.router.open(&location, state.auth.is_authenticated());
            if route != Route::Products {
                return show(state, scope, route, PageOptions::default(), on_frame).await;
            }
            products::buy(state, scope, &id, quantity).await.1
        }
        Command::Roulette { spin } => {
            let options = PageOptions { spin, ..Default::default() };
            visit(state, scope, &location, options, on_frame).await
        }
        Command::My { detail } => {
            let options = PageOptions { detail, ..Default::default() };
            visit(state, scope, &location, options, on_frame).await
        }
        Command::Home | Command::Products | Command::Orders | Command::Open { .. } => {
            visit(state, scope, &location, PageOptions::default(), on_frame).await
        }
    }
}

async fn visit(
    state: &AppState,
    scope: &Scope,
    location: &str,
    options: PageOptions,
    on_frame: &mut dyn FnMut(&str),
) -> String {
    let (route, _) = state.router.open(location, state.auth.is_authenticated());
    show(state, scope, route, options, on_frame).await
}

async fn show(
    state: &AppState,
    scope: &Scope,
    route: Route,
    options: PageOptions,
    on_frame: &mut dyn FnMut(&str),
) -> String {
    match route {
        Route::Login => login::form(state, None),
        Route::Home => home::render(state, scope).await,
        Route::Roulette => roulette::render(state, scope, options.spin, on_frame).await,
        Route::Products => products::render(state, scope).await,
        Route::MyInfo => my_info::render(state, scope, options.detail).await,
        Route::Orders => orders::render(state, scope).await,
    }
}
