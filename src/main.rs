use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use yansi::Paint;

use launchpad::api::{self, ApiClient};
use launchpad::config::{self, ControllerConfig};
use launchpad::models::{ReviewValue, ReviewView, TemplateKind};
use launchpad::services::{
    load_credential_details, load_review_context, review_session, LaunchResolver, LaunchService,
    PayloadAssembler,
};
use launchpad::wizard::{credential_password_label, LaunchValues, PromptField, WizardSession, WizardStep};

#[derive(Parser)]
#[command(
    name = "lp",
    author,
    version,
    about = "Launch automation controller job templates",
    long_about = r#"lp: prompt-on-launch for automation controller templates.

Resolves a job template or workflow job template together with its launch
configuration, applies the answers from a values file on top of the template
defaults, and shows the wizard steps, the review, the request payload, or
launches the job.

Examples:
  1) See which prompts a template asks for:
        lp steps job_template 7
  2) Review a launch with answers:
        lp review job_template 7 --values answers.yaml
  3) Launch and print the job output link:
        lp launch workflow_job_template 12 --values answers.yaml
"#,
    after_help = "Use `lp <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate configuration and controller connectivity
    #[command(about = "Validate configuration and ensure API connectivity.", long_about = "Check CONTROLLER_URL and CONTROLLER_TOKEN and ping the controller API.")]
    CheckConfig,
    /// List the wizard steps and which of them are shown
    Steps {
        /// job_template or workflow_job_template
        kind: TemplateKind,
        /// Template id
        id: i64,
        /// YAML/JSON file with launch answers
        #[arg(long)]
        values: Option<PathBuf>,
    },
    /// Render the review of a launch without submitting it
    Review {
        kind: TemplateKind,
        id: i64,
        #[arg(long)]
        values: Option<PathBuf>,
    },
    /// Print the launch request body without submitting it
    #[command(long_about = "Print the launch request body. Labels that do not exist yet are shown without ids and are only created by `launch`.")]
    Payload {
        kind: TemplateKind,
        id: i64,
        #[arg(long)]
        values: Option<PathBuf>,
    },
    /// Launch the template and print the job output link
    Launch {
        kind: TemplateKind,
        id: i64,
        #[arg(long)]
        values: Option<PathBuf>,
    },
}

impl Cli {
    /// Request logging goes to stdout, so commands whose stdout is data
    /// (`payload`) never log.
    fn logs_requests(&self) -> bool {
        !self.silent && !matches!(self.command, Commands::Payload { .. })
    }
}

fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", Paint::new("Error").red().bold(), err);
    process::exit(1);
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn review_cell(value: &ReviewValue) -> String {
    match value {
        ReviewValue::Text(s) => s.clone(),
        ReviewValue::List(items) => items.join(", "),
        ReviewValue::Code(code) => code.trim_end().to_string(),
        ReviewValue::Empty => Paint::new("None").dim().to_string(),
    }
}

fn print_review(view: &ReviewView) {
    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    for row in &view.rows {
        table.add_row(vec![row.label.to_string(), review_cell(&row.value)]);
    }
    println!("\n{table}\n");
}

fn print_steps(session: &WizardSession) {
    let mut table = new_table();
    table.set_header(vec!["#", "Step", "Id", "Shown"]);
    for step in WizardStep::ALL {
        let shown = if session.is_visible(step) {
            Paint::new("yes").green().to_string()
        } else {
            Paint::new("no").dim().to_string()
        };
        table.add_row(vec![(step.index() + 1).to_string(), step.label().to_string(), step.id().to_string(), shown]);
    }
    println!("\n{table}\n");

    let needed = &session.config().passwords_needed_to_start;
    if session.is_visible(WizardStep::CredentialPasswords) && !needed.is_empty() {
        println!("{}", Paint::new("Passwords needed to start:").bold());
        for field in needed {
            println!("  {} ({})", credential_password_label(field), field);
        }
    }
}

async fn open_session(api: &ApiClient, kind: TemplateKind, id: i64, values: Option<&Path>) -> WizardSession {
    let mut resolver = LaunchResolver::new(api.clone(), kind, id);
    resolver.refresh().await;
    if let Some(e) = resolver.error() {
        eprintln!("{}", Paint::new("Run the command again to refresh.").yellow());
        fail(e);
    }
    let mut session = match resolver.session() {
        Some(Ok(session)) => session,
        Some(Err(e)) => fail(e),
        None => fail("template is still loading"),
    };
    if let Some(path) = values {
        let values = LaunchValues::from_file(path).unwrap_or_else(|e| fail(e));
        session.update(|form| values.apply(form));
        load_credential_details(api, &mut session).await;
    }
    session
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }
    if !cli.logs_requests() {
        api::set_silent(true);
    }

    config::load_env_file(cli.env_file.as_deref());
    let controller = ControllerConfig::from_env();
    let client = ApiClient::new(&controller).unwrap_or_else(|e| fail(e));

    match cli.command {
        Commands::CheckConfig => {
            if controller.token.trim().is_empty() {
                eprintln!("{}", Paint::new("CONTROLLER_TOKEN is not configured").red());
                process::exit(1);
            }
            match api::ping(&client).await {
                Ok(resp) => {
                    let version = resp.get("version").and_then(|v| v.as_str()).unwrap_or_default();
                    println!(
                        "{} {}",
                        Paint::new("Controller reachable at").green(),
                        Paint::new(&controller.controller_url).cyan()
                    );
                    if !version.is_empty() {
                        println!("Version: {}", version);
                    }
                }
                Err(e) => {
                    eprintln!("{}: {}", Paint::new("Configuration appears invalid").red(), e);
                    process::exit(1);
                }
            }
        }
        Commands::Steps { kind, id, values } => {
            let session = open_session(&client, kind, id, values.as_deref()).await;
            println!("{} {}", Paint::new("Prompt on launch:").bold(), session.template().name);
            print_steps(&session);
        }
        Commands::Review { kind, id, values } => {
            let session = open_session(&client, kind, id, values.as_deref()).await;
            let submitted = session.submitted_values();
            let context = load_review_context(&client, session.template(), &submitted).await;
            match review_session(&session, &context) {
                Ok(view) => print_review(&view),
                Err(e) => fail(e),
            }
        }
        Commands::Payload { kind, id, values } => {
            let session = open_session(&client, kind, id, values.as_deref()).await;
            let assembler = PayloadAssembler::new(session.config(), session.kind());
            let payload = assembler.assemble(session.form()).unwrap_or_else(|e| fail(e));
            let mut body = serde_json::to_value(&payload).unwrap_or_else(|e| fail(e));
            let submitted = session.submitted_values();
            // Labels are shown by name; ids for new ones only exist after `launch`.
            if let (Some(obj), Some(labels)) = (body.as_object_mut(), submitted.other_prompts.labels) {
                if !labels.is_empty() && PromptField::Labels.is_admitted(session.config(), session.kind()) {
                    obj.insert("labels".into(), serde_json::to_value(labels).unwrap_or_default());
                }
            }
            println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
        }
        Commands::Launch { kind, id, values } => {
            let session = open_session(&client, kind, id, values.as_deref()).await;
            let service = LaunchService::new(client.clone());
            match service.launch(&session).await {
                Ok(outcome) => {
                    println!(
                        "{} {} ({})",
                        Paint::new("Launched job").green(),
                        Paint::new(outcome.job.id).bold(),
                        outcome.job.status
                    );
                    println!("{}", Paint::new(outcome.output_url(&controller.public_base_url)).cyan());
                }
                Err(e) => {
                    let alert = e.notification();
                    eprintln!("{}: {}", Paint::new(alert.title).red().bold(), alert.message);
                    process::exit(1);
                }
            }
        }
    }
}
