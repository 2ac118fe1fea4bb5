//! Command-line front end
//!
//! Each command opens the matching view through the same controllers an
//! interactive front end would use.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use utilisateurs_admin::{
    AppContext, AssumeYes, ConfirmPrompt, DeleteOutcome, FormController, ListController,
    ListState, Route, Screen, StdinPrompt, SubmitOutcome,
};
use utilisateurs_client::{
    CrudGateway, Enseignant, Etudiant, Gateways, NetworkHttpClient, Resource, Vacataire,
    VacataireGateway,
};

/// Administration of enseignants, etudiants and vacataires
#[derive(Parser)]
#[command(name = "utilisateurs-admin", version, long_about = None)]
pub struct Cli {
    /// API root
    #[arg(long, env = "UTILISATEURS_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long, env = "LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Print records as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List records, optionally filtered on nom/prenom
    List {
        resource: Resource,
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Show one record
    Show { resource: Resource, id: i64 },
    /// Create a record from `-f field=value` pairs
    Create {
        resource: Resource,
        #[arg(short = 'f', long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Change fields of an existing record
    Edit {
        resource: Resource,
        id: i64,
        #[arg(short = 'f', long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Delete a record after confirmation
    Delete {
        resource: Resource,
        id: i64,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Reactivate a vacataire
    Activate { id: i64 },
    /// Deactivate a vacataire
    Deactivate { id: i64 },
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected field=value, got '{}'", raw))
}

/// How records are printed on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Table,
    Json,
}

impl Output {
    pub fn from_flag(json: bool) -> Self {
        if json { Output::Json } else { Output::Table }
    }
}

/// Type-erased gateways, one per screen
struct Screens {
    enseignants: Arc<dyn CrudGateway<Enseignant>>,
    etudiants: Arc<dyn CrudGateway<Etudiant>>,
    vacataires: Arc<dyn VacataireGateway>,
}

impl From<Gateways<NetworkHttpClient>> for Screens {
    fn from(gateways: Gateways<NetworkHttpClient>) -> Self {
        Self {
            enseignants: Arc::new(gateways.enseignants),
            etudiants: Arc::new(gateways.etudiants),
            vacataires: Arc::new(gateways.vacataires),
        }
    }
}

macro_rules! per_resource {
    ($resource:expr, $screens:expr, $handler:ident ( $($arg:expr),* )) => {
        match $resource {
            Resource::Enseignants => $handler::<Enseignant>($($arg,)* $screens.enseignants.clone()).await,
            Resource::Etudiants => $handler::<Etudiant>($($arg,)* $screens.etudiants.clone()).await,
            Resource::Vacataires => $handler::<Vacataire>($($arg,)* $screens.vacataires.clone()).await,
        }
    };
}

pub async fn run(
    command: Command,
    output: Output,
    ctx: Arc<AppContext>,
    gateways: Gateways<NetworkHttpClient>,
) -> anyhow::Result<ExitCode> {
    let screens = Screens::from(gateways);

    let code = match command {
        Command::List { resource, filter } => {
            per_resource!(resource, screens, list(&ctx, output, filter.as_deref()))
        }
        Command::Show { resource, id } => per_resource!(resource, screens, show(&ctx, output, id)),
        Command::Create { resource, fields } => {
            per_resource!(resource, screens, save(&ctx, output, Route::New(resource), &fields))
        }
        Command::Edit {
            resource,
            id,
            fields,
        } => per_resource!(resource, screens, save(&ctx, output, Route::Edit(resource, id), &fields)),
        Command::Delete { resource, id, yes } => {
            let prompt: &dyn ConfirmPrompt = if yes { &AssumeYes } else { &StdinPrompt };
            per_resource!(resource, screens, delete(&ctx, id, prompt))
        }
        Command::Activate { id } => set_actif(&ctx, output, screens.vacataires, id, true).await,
        Command::Deactivate { id } => set_actif(&ctx, output, screens.vacataires, id, false).await,
    };
    Ok(code)
}

async fn list<E: Screen>(
    ctx: &Arc<AppContext>,
    output: Output,
    filter: Option<&str>,
    gateway: Arc<E::Gateway>,
) -> ExitCode {
    ctx.navigator.navigate(Route::List(E::RESOURCE));
    let mut controller = ListController::<E>::new(ctx.clone(), gateway);
    controller.open().await;
    if controller.view().state() == ListState::LoadFailed {
        return ExitCode::FAILURE;
    }

    if let Some(filter) = filter {
        controller.set_filter(filter);
    }
    print_records(output, &controller.visible())
}

async fn show<E: Screen>(
    ctx: &Arc<AppContext>,
    output: Output,
    id: i64,
    gateway: Arc<E::Gateway>,
) -> ExitCode {
    let route = Route::Edit(E::RESOURCE, id);
    ctx.navigator.navigate(route);
    let mut form = match FormController::<E>::from_route(ctx.clone(), gateway, route) {
        Ok(form) => form,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    form.open().await;
    if let Some(error) = form.error() {
        eprintln!("{}", error);
        return ExitCode::FAILURE;
    }
    print_record(output, form.values())
}

async fn save<E: Screen>(
    ctx: &Arc<AppContext>,
    output: Output,
    route: Route,
    fields: &[(String, String)],
    gateway: Arc<E::Gateway>,
) -> ExitCode {
    ctx.navigator.navigate(route);
    let mut form = match FormController::<E>::from_route(ctx.clone(), gateway, route) {
        Ok(form) => form,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    form.open().await;
    if let Some(error) = form.error() {
        eprintln!("{}", error);
        return ExitCode::FAILURE;
    }

    for (field, value) in fields {
        if let Err(e) = form.set_field(field, value) {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    match form.submit().await {
        SubmitOutcome::Saved(record) => print_record(output, &record),
        SubmitOutcome::Invalid(errors) => {
            for (field, problems) in errors.field_errors() {
                for problem in problems {
                    let message = problem.message.as_deref().unwrap_or(&*problem.code);
                    eprintln!("{}: {}", field, message);
                }
            }
            ExitCode::FAILURE
        }
        SubmitOutcome::Failed => {
            eprintln!("{}", form.error().unwrap_or_default());
            ExitCode::FAILURE
        }
    }
}

async fn delete<E: Screen>(
    ctx: &Arc<AppContext>,
    id: i64,
    prompt: &dyn ConfirmPrompt,
    gateway: Arc<E::Gateway>,
) -> ExitCode {
    ctx.navigator.navigate(Route::List(E::RESOURCE));
    let mut controller = ListController::<E>::new(ctx.clone(), gateway);
    match controller.delete(id, prompt).await {
        DeleteOutcome::Deleted | DeleteOutcome::Cancelled => ExitCode::SUCCESS,
        DeleteOutcome::Failed => ExitCode::FAILURE,
    }
}

async fn set_actif(
    ctx: &Arc<AppContext>,
    output: Output,
    gateway: Arc<dyn VacataireGateway>,
    id: i64,
    actif: bool,
) -> ExitCode {
    ctx.navigator.navigate(Route::List(Resource::Vacataires));
    let mut controller = ListController::<Vacataire>::new(ctx.clone(), gateway);
    let changed = if actif {
        controller.activate(id).await
    } else {
        controller.deactivate(id).await
    };

    if !changed {
        return ExitCode::FAILURE;
    }
    print_records(output, &controller.visible())
}

fn print_records<E: Screen>(output: Output, records: &[&E]) -> ExitCode {
    match output {
        Output::Table => {
            print_table(records);
            ExitCode::SUCCESS
        }
        Output::Json => print_json(records),
    }
}

fn print_record<E: Screen>(output: Output, record: &E) -> ExitCode {
    match output {
        Output::Table => {
            for (column, cell) in E::columns().iter().zip(record.cells()) {
                println!("{:<12}{}", column, cell);
            }
            ExitCode::SUCCESS
        }
        Output::Json => print_json(record),
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode records");
            ExitCode::FAILURE
        }
    }
}

fn print_table<E: Screen>(records: &[&E]) {
    let columns = E::columns();
    let rows: Vec<Vec<String>> = records.iter().map(|r| r.cells()).collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, title)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(title.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", line(columns.to_vec()));
    for row in &rows {
        println!("{}", line(row.iter().map(String::as_str).collect()));
    }
    println!("({} {})", records.len(), E::RESOURCE.label().to_lowercase());
}
