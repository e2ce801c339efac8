use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Args, Subcommand};
use log::debug;

use crate::context::{Context, Run};
use crate::environment::{PATH, effective_java_home};
use crate::error::WizardError;
use crate::java::advisor::advise;
use crate::java::registry::VersionRegistry;
use crate::java::resolving::{PROBE_TIMEOUT, ProbeError, version_banner_within};
use crate::java::scanning::scan_well_known;
use crate::java::switching::Switcher;
use crate::java::{JAVA_EXECUTABLE, Origin};

#[derive(Args, Debug)]
pub struct JavaCommand {
    #[command(subcommand)]
    command: Option<JavaSubcommand>,
}

#[derive(Subcommand, Debug)]
enum JavaSubcommand {
    /// List installed Java versions
    List(ListCommand),

    /// Show how to install a specific Java version
    Install(InstallCommand),

    /// Switch to a specific Java version
    Use(UseCommand),

    /// Show current active Java version
    ///
    /// JAVA_HOME is read from the persistent user environment, but the version
    /// comes from the `java` this shell finds on its inherited PATH. After
    /// `java use`, the two only agree once the terminal is restarted.
    Current(CurrentCommand),

    /// Show path to current Java installation
    Which(WhichCommand),
}

impl Run for JavaCommand {
    async fn run(&self, ctx: &Context) -> anyhow::Result<ExitCode> {
        match &self.command {
            None => {
                println!("Java Version Manager - Use 'javawizard java --help' for options:");
                println!("  list     - List installed Java versions");
                println!("  install  - Install a specific Java version");
                println!("  use      - Switch to a specific Java version");
                println!("  current  - Show current active Java version");
                println!("  which    - Show path to current Java installation");
                Ok(ExitCode::SUCCESS)
            }
            Some(JavaSubcommand::List(cmd)) => cmd.run(ctx).await,
            Some(JavaSubcommand::Install(cmd)) => cmd.run(ctx).await,
            Some(JavaSubcommand::Use(cmd)) => cmd.run(ctx).await,
            Some(JavaSubcommand::Current(cmd)) => cmd.run(ctx).await,
            Some(JavaSubcommand::Which(cmd)) => cmd.run(ctx).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct ListCommand {
    /// Show all detected Java installations
    #[arg(short, long)]
    all: bool,
}

impl Run for ListCommand {
    async fn run(&self, ctx: &Context) -> anyhow::Result<ExitCode> {
        if self.all {
            println!("=== All Detected Java Installations ===");
            println!("Scanning common installation directories...");

            let groups = scan_well_known(&ctx.paths, ctx.env.as_ref())
                .await
                .context("Error listing Java versions")?;
            for group in groups {
                match group.origin {
                    Origin::JavaHome => {
                        println!("\nJAVA_HOME: {}", group.root.display());
                        for install in &group.installations {
                            println!("  Version: {}", version_label(install.detected_version.as_deref()));
                        }
                    }
                    Origin::Managed | Origin::WellKnownRoot => {
                        println!("\n{}:", group.root.display());
                        for install in &group.installations {
                            println!(
                                "  {} {}",
                                install.id,
                                version_label(install.detected_version.as_deref())
                            );
                            if ctx.verbose {
                                println!("    {}", install.root_path.display());
                            }
                        }
                    }
                }
            }
            return Ok(ExitCode::SUCCESS);
        }

        println!("=== Managed Java Versions ===");
        let versions = VersionRegistry::new(&ctx.paths, ctx.env.as_ref())
            .list_managed()
            .context("Error listing Java versions")?;

        if versions.is_empty() {
            println!("No managed Java versions found.");
            println!("Use 'javawizard java install <version>' to install Java versions.");
            if ctx.verbose {
                println!("Managed root: {}", ctx.paths.managed_root.display());
            }
        }
        for version in versions {
            let marker = if version.is_current { " (current)" } else { "" };
            println!("  {}{marker}", version.id);
        }

        Ok(ExitCode::SUCCESS)
    }
}

fn version_label(version: Option<&str>) -> &str {
    version.unwrap_or("(unknown)")
}

#[derive(Args, Debug)]
pub struct InstallCommand {
    /// Java version to install (e.g., 17, 21, 11-graalvm)
    version: String,

    /// Include instructions for replacing an existing copy
    #[arg(short, long)]
    force: bool,
}

impl Run for InstallCommand {
    async fn run(&self, ctx: &Context) -> anyhow::Result<ExitCode> {
        print!("{}", advise(&self.version, &ctx.paths.managed_root, self.force));
        Ok(ExitCode::SUCCESS)
    }
}

#[derive(Args, Debug)]
pub struct UseCommand {
    /// Managed version to activate, exactly as listed (e.g., jdk-17)
    version: String,
}

impl Run for UseCommand {
    async fn run(&self, ctx: &Context) -> anyhow::Result<ExitCode> {
        let outcome = match Switcher::new(&ctx.paths, ctx.env.as_ref()).switch_to(&self.version) {
            Ok(outcome) => outcome,
            Err(err @ WizardError::VersionNotFound { .. }) => return Err(err.into()),
            Err(err) => return Err(anyhow::Error::new(err).context("Error switching Java version")),
        };

        println!("Switched to Java version: {}", outcome.id);
        println!("JAVA_HOME: {}", outcome.java_home.display());
        if ctx.verbose {
            println!("PATH: {}", outcome.path);
        }
        println!("Note: Restart your terminal to see the changes.");
        if let Some(hint) = ctx.env.activation_hint() {
            println!("{hint}");
        }

        Ok(ExitCode::SUCCESS)
    }
}

#[derive(Args, Debug)]
pub struct CurrentCommand {}

impl Run for CurrentCommand {
    async fn run(&self, ctx: &Context) -> anyhow::Result<ExitCode> {
        show_current(ctx, PROBE_TIMEOUT).await
    }
}

async fn show_current(ctx: &Context, limit: Duration) -> anyhow::Result<ExitCode> {
    let java_home =
        effective_java_home(ctx.env.as_ref()).context("Error getting current Java version")?;
    match java_home {
        Some(java_home) => println!("JAVA_HOME: {java_home}"),
        None => println!("JAVA_HOME not set"),
    }

    let Some(java) = locate_java(ctx).into_iter().next() else {
        println!("No Java found in PATH");
        return Ok(ExitCode::SUCCESS);
    };
    debug!("resolved java to {}", java.display());

    match version_banner_within(&java, limit).await {
        Ok(Some(banner)) => {
            println!("Active Java version:");
            if ctx.verbose {
                println!("{}", java.display());
            }
            println!("{banner}");
        }
        Ok(None) => println!("No Java found in PATH"),
        // a hung JVM is reported like any other probe result
        Err(err @ ProbeError::Timeout) => {
            println!("Active Java version:");
            println!("(error: {err})");
        }
        Err(err) => {
            return Err(anyhow::Error::new(err).context("Error getting current Java version"));
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[derive(Args, Debug)]
pub struct WhichCommand {}

impl Run for WhichCommand {
    async fn run(&self, ctx: &Context) -> anyhow::Result<ExitCode> {
        let found = locate_java(ctx);
        if found.is_empty() {
            println!("Java not found in PATH");
            return Ok(ExitCode::FAILURE);
        }

        println!("Java executable locations:");
        for java in found {
            println!("{}", java.display());
        }
        Ok(ExitCode::SUCCESS)
    }
}

/// Every `java` on the PATH this process inherited, in lookup order.
fn locate_java(ctx: &Context) -> Vec<PathBuf> {
    let search_path = ctx.env.read_process_variable(PATH);
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    match which::which_in_all(JAVA_EXECUTABLE, search_path, cwd) {
        Ok(found) => found.collect(),
        Err(err) => {
            debug!("java lookup failed: {err}");
            Vec::new()
        }
    }
}
