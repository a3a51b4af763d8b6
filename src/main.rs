use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use pathway_advisor::config::AppConfig;
use pathway_advisor::engine::{recommend_plans, LearnerProfile, Plan, PlannerOptions};
use pathway_advisor::error::AppError;
use pathway_advisor::funding::{build_funding_plan, FundingPlan, FundingProfile};
use pathway_advisor::router::{advisor_router, AdvisorState};
use pathway_advisor::telemetry;
use serde_json::{json, Value};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Pathway Advisor",
    about = "Recommend training pathway plans and funding checklists",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run the engine against a built-in sample catalog and print the result
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug, Default)]
struct DemoArgs {
    /// Two-letter jurisdiction code for the funding checklist
    #[arg(long, default_value = "OH")]
    state: String,
    /// Weekly hours the sample learner can commit
    #[arg(long, default_value_t = 10.0)]
    hours: f64,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Demo(args) => run_demo(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let app = advisor_router(AdvisorState {
        max_catalog_records: config.advisor.max_catalog_records,
    });

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(?config.environment, %addr, "pathway advisor ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let profile = LearnerProfile {
        hours_per_week: Some(args.hours),
        unemployed: true,
        age: Some(22.0),
        state: Some(args.state.clone()),
        household_size: Some(3.0),
        prior_skills: vec!["basic computer skills".to_string()],
        ..LearnerProfile::default()
    };

    let options = PlannerOptions::new(Utc::now());
    let plans = recommend_plans(&profile, &sample_catalog(), &options);
    render_plans(&plans);

    let funding = build_funding_plan(&FundingProfile::from(&profile));
    render_funding_plan(&funding);

    Ok(())
}

fn sample_catalog() -> Vec<Value> {
    vec![
        json!({
            "id": "cna-fast-track",
            "title": "CNA Fast Track",
            "cluster": "Healthcare",
            "estWeeks": 6,
            "estCost": 1400,
            "modules": [
                { "title": "Patient Care Basics", "minutes": 300 },
                { "title": "Clinical Skills Lab", "minutes": 420 },
                { "title": "State Exam Prep", "minutes": 240 }
            ],
            "firstCredential": { "name": "State Tested Nursing Assistant" },
            "jobsMeta": {
                "medianStart": 31000,
                "localEmployers": ["Mercy Health", "Summit Care"]
            },
            "delivery": "hybrid",
            "deviceNeeds": "any"
        }),
        json!({
            "id": "it-helpdesk",
            "title": "IT Help Desk Certificate",
            "cluster": "IT & Cloud",
            "estWeeks": 10,
            "estCost": 2200,
            "modules": [
                { "title": "Hardware Fundamentals", "minutes": 360 },
                { "title": "Networking Basics", "minutes": 420 },
                { "title": "Support Scenarios", "minutes": 300 }
            ],
            "firstCredential": { "name": "CompTIA A+" },
            "partners": [{ "name": "Per Scholas" }],
            "jobsMeta": { "openingsIndex": 72 },
            "delivery": "remote",
            "deviceNeeds": "laptop",
            "prerequisites": ["basic computer skills"]
        }),
        json!({
            "id": "cdl-b-local",
            "title": "CDL Class B (Local Routes)",
            "cluster": "Transportation & Logistics",
            "estWeeks": 4,
            "estCost": 3800,
            "jobsMeta": {
                "medianStart": 42000,
                "localEmployers": ["Metro Freight"]
            },
            "delivery": "in_person",
            "deviceNeeds": "any"
        }),
    ]
}

fn render_plans(plans: &[Plan]) {
    println!("Recommended plans");
    if plans.is_empty() {
        println!("- none (empty catalog)");
        return;
    }

    for plan in plans {
        println!(
            "\n[{}] {} ({} weeks, ${:.0} after aid)",
            plan.strategy.label(),
            plan.title,
            plan.est_weeks,
            plan.net_cost_after_aid
        );
        println!("  next cohort: {}", plan.next_cohort_date);
        for step in &plan.steps {
            println!("  - {}", step.title);
        }
    }
}

fn render_funding_plan(funding: &FundingPlan) {
    println!("\nFunding checklist (coverage: {})", funding.coverage.label());
    for step in &funding.steps {
        println!("- {}: {}", step.program, step.action);
    }
    for note in &funding.notes {
        println!("note: {note}");
    }
}
