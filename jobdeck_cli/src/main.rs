use anyhow::{Context, Result};
/// jobdeck CLI - job portal terminal client
///
/// Provides the interactive category/profile TUI and a non-interactive
/// profile listing.
use clap::{Parser, Subcommand};
use jobdeck_cli::ui;
use jobdeck_core::profile_form::Attachment;
use jobdeck_core::profile_loader;
use jobdeck_core::record_list::date_only;
use jobdeck_core::types::User;
use std::path::Path;

#[derive(Parser)]
#[command(name = "jobdeck-cli")]
#[command(about = "Jobdeck - job portal terminal client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive terminal UI
    Tui {
        /// Path to a user profile JSON file (defaults to a built-in demo profile)
        #[arg(short, long)]
        profile: Option<String>,
        /// Base URL of the user-service API
        #[arg(short, long, default_value = "http://localhost:8000/api/v1/user")]
        api: String,
        /// Resume file to attach to the next profile update
        #[arg(short, long)]
        resume: Option<String>,
    },
    /// Print a profile (non-interactive)
    Show {
        /// Path to a user profile JSON file (defaults to a built-in demo profile)
        #[arg(short, long)]
        profile: Option<String>,
        /// Emit raw JSON instead of a formatted listing
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tui {
            profile,
            api,
            resume,
        } => {
            let user = load_profile(profile.as_deref())?;
            let attachment = resume.as_deref().map(read_attachment).transpose()?;
            ui::run_tui(user, &api, attachment)?;
        }
        Commands::Show { profile, json } => {
            env_logger::init();
            let user = load_profile(profile.as_deref())?;
            run_show(&user, json)?;
        }
    }

    Ok(())
}

fn load_profile(path: Option<&str>) -> Result<User> {
    match path {
        Some(path) => profile_loader::load_user(path)
            .with_context(|| format!("Failed to load profile from {path}")),
        None => Ok(profile_loader::demo_user()),
    }
}

fn read_attachment(path: &str) -> Result<Attachment> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read resume from {path}"))?;
    let filename = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string());
    Ok(Attachment { filename, bytes })
}

fn date_range(start: &str, end: &str) -> String {
    let end = date_only(end);
    let end = if end.is_empty() { "present" } else { end };
    format!("{} - {}", date_only(start), end)
}

fn run_show(user: &User, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(user)?);
        return Ok(());
    }

    println!("{} <{}>  {}", user.fullname, user.email, user.phone_number);
    println!("Bio:    {}", user.profile.bio);
    println!("Skills: {}", user.profile.skills.join(", "));

    println!("\nExperience ({}):", user.profile.experience.len());
    for record in &user.profile.experience {
        println!(
            "  {} at {} [{}]",
            record.title,
            record.company,
            date_range(&record.start_date, &record.end_date)
        );
        if !record.description.is_empty() {
            println!("    {}", record.description);
        }
    }

    println!("\nEducation ({}):", user.profile.education.len());
    for record in &user.profile.education {
        println!(
            "  {}, {} [{}]",
            record.degree,
            record.institution,
            date_range(&record.start_date, &record.end_date)
        );
        if !record.description.is_empty() {
            println!("    {}", record.description);
        }
    }

    Ok(())
}
