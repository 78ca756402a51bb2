//! Apostas CLI
//!
//! Terminal front end over the same controller the browser uses:
//! - Register an account
//! - List bets and show the summary
//! - Add, edit and delete bets
//! - Preview a predicted total offline
//!
//! Authenticated commands log in, run, then log out. The session cookie lives
//! only for the process.

use anyhow::{anyhow, bail, Context};
use apostas::api::HttpTransport;
use apostas::config::{generate_default_config, Config};
use apostas::controller::{ActionResult, Confirm, Controller};
use apostas::model::ApostaId;
use apostas::state::{today, AppState, BetForm, SharedState, Store};
use apostas::view::{LedgerView, SummaryView};
use apostas::{format, LoggingConfig};
use clap::{Parser, Subcommand};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "apostas")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Personal betting ledger client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL (overrides config)
    #[arg(long, global = true, env = "APOSTAS_API_URL")]
    pub api_url: Option<String>,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Account name
    #[arg(short, long, global = true, env = "APOSTAS_USERNAME")]
    pub username: Option<String>,

    /// Account password
    #[arg(short, long, global = true, env = "APOSTAS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account
    Register {
        /// Email address
        email: String,
    },

    /// List all bets
    List,

    /// Show dashboard totals
    Summary,

    /// Record a new bet
    Add {
        /// Stake
        stake: String,
        /// Odds multiplier
        odds: String,
        /// Bet date, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
        /// Settled value
        #[arg(short, long, default_value = "0")]
        final_value: String,
    },

    /// Change an existing bet
    Edit {
        /// Bet id
        id: i64,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long)]
        stake: Option<String>,
        #[arg(short, long)]
        odds: Option<String>,
        #[arg(short, long)]
        final_value: Option<String>,
    },

    /// Delete a bet
    Delete {
        /// Bet id
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show stake × odds without contacting the server
    Preview { stake: String, odds: String },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Asks on the terminal unless `--yes` was passed
struct TerminalConfirm {
    assume_yes: bool,
}

impl Confirm for TerminalConfirm {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{} [y/N] ", message);
        let _ = std::io::stdout().flush();

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "s" | "yes" | "sim")
    }
}

type CliController = Controller<HttpTransport, SharedState, TerminalConfirm>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default()?,
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);

    match &cli.command {
        Commands::Preview { stake, odds } => {
            let form = BetForm {
                entrada: stake.clone(),
                odd: odds.clone(),
                ..BetForm::new(today())
            };
            println!("Total previsto: {}", form.preview_label());
            return Ok(());
        }
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
            return Ok(());
        }
        _ => {}
    }

    let state: SharedState = Rc::new(RefCell::new(AppState::default()));
    let transport = HttpTransport::new(&config.api.base_url)?;
    let assume_yes = matches!(cli.command, Commands::Delete { yes: true, .. });
    let controller = Controller::new(transport, state.clone(), TerminalConfirm { assume_yes });

    let username = cli
        .username
        .clone()
        .ok_or_else(|| anyhow!("--username (or APOSTAS_USERNAME) is required"))?;
    let password = cli
        .password
        .clone()
        .ok_or_else(|| anyhow!("--password (or APOSTAS_PASSWORD) is required"))?;

    if let Commands::Register { email } = &cli.command {
        state.write(|s| {
            s.register_form.username = username;
            s.register_form.email = email.clone();
            s.register_form.password = password;
        });
        let result = controller.register().await;
        return report(&state, result);
    }

    state.write(|s| {
        s.login_form.username = username;
        s.login_form.password = password;
    });
    let login = controller.login().await;
    report(&state, login)?;

    let outcome = run(&controller, &cli.command).await;
    controller.logout().await;
    outcome
}

async fn run(controller: &CliController, command: &Commands) -> anyhow::Result<()> {
    let state = controller.store();

    match command {
        Commands::List => {
            print_ledger(&state.read(|s| LedgerView::build(&s.apostas)));
        }

        Commands::Summary => {
            let Some(resumo) = state.read(|s| s.resumo.clone()) else {
                bail!("summary unavailable");
            };
            let view = SummaryView::from(&resumo);
            println!("Total investido:        {}", view.total_investido);
            println!("Retorno bruto:          {}", format::currency(resumo.total_retorno_bruto));
            println!("Retorno líquido:        {}", view.total_retorno_liquido);
            println!("Total previsto:         {}", view.total_previsto);
            println!("Quantidade de apostas:  {}", view.quantidade_apostas);
        }

        Commands::Add {
            stake,
            odds,
            date,
            final_value,
        } => {
            state.write(|s| {
                s.show_add_form();
                if let Some(date) = date {
                    s.entry_form.data = date.clone();
                }
                s.entry_form.entrada = stake.clone();
                s.entry_form.odd = odds.clone();
                s.entry_form.valor_final = final_value.clone();
            });
            println!("Total previsto: {}", state.read(|s| s.entry_form.preview_label()));

            let result = controller.create_bet().await;
            report(state, result)?;
            println!("Aposta registrada.");
        }

        Commands::Edit {
            id,
            date,
            stake,
            odds,
            final_value,
        } => {
            let id = ApostaId(*id);
            let mut opened = false;
            state.write(|s| opened = s.open_edit(id));
            if !opened {
                bail!("Aposta {} não encontrada", id);
            }

            state.write(|s| {
                if let Some(edit) = s.edit.as_mut() {
                    let form = &mut edit.form;
                    for (field, value) in [
                        (&mut form.data, date),
                        (&mut form.entrada, stake),
                        (&mut form.odd, odds),
                        (&mut form.valor_final, final_value),
                    ] {
                        if let Some(value) = value {
                            *field = value.clone();
                        }
                    }
                }
            });

            let result = controller.update_bet().await;
            report(state, result)?;
            println!("Aposta {} atualizada.", id);
        }

        Commands::Delete { id, .. } => {
            let result = controller.delete_bet(ApostaId(*id)).await;
            if report(state, result)? {
                println!("Aposta {} excluída.", id);
            } else {
                println!("Cancelado.");
            }
        }

        Commands::Register { .. } | Commands::Preview { .. } | Commands::Config { .. } => {}
    }

    Ok(())
}

/// Turn an action outcome into process output, using the notice the
/// controller left in state.
fn report<T>(state: &SharedState, result: ActionResult<T>) -> anyhow::Result<T> {
    let notice = state.read(|s| s.notice.clone());
    match result {
        Ok(value) => {
            if let Some(notice) = notice.filter(|n| !n.is_error()) {
                println!("{}", notice.message);
            }
            Ok(value)
        }
        Err(e) => {
            let message = notice.map(|n| n.message).unwrap_or_else(|| e.to_string());
            Err(anyhow!(message))
        }
    }
}

fn print_ledger(view: &LedgerView) {
    match view {
        LedgerView::Empty(message) => println!("{}", message),
        LedgerView::Rows(rows) => {
            println!(
                "{:>5}  {:<10}  {:>14}  {:>6}  {:>16}  {:>14}",
                "ID", "Data", "Entrada", "Odd", "Total Previsto", "Valor Final"
            );
            for row in rows {
                println!(
                    "{:>5}  {:<10}  {:>14}  {:>6}  {:>16}  {:>14}",
                    row.id, row.data, row.entrada, row.odd, row.total_previsto, row.valor_final
                );
            }
        }
    }
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("apostas={}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
