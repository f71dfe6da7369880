use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use reskit::{ClassPath, CodeUnit, Version, list_all_files, list_resource, read_resource_to_string};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// List and read resources from directory and zip class path roots
#[derive(Parser, Debug)]
#[command(name = "reskit", version, about)]
struct Cli {
    /// Class path roots (directories or zip archives), searched in order
    #[arg(
        short,
        long,
        env = "RESKIT_CLASSPATH",
        value_delimiter = ':',
        global = true
    )]
    classpath: Vec<PathBuf>,

    /// Dotted name of the code unit whose container is searched as a fallback
    #[arg(short, long, default_value = "reskit.Main", global = true)]
    unit: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List files under a resource path
    Ls {
        /// Logical path, `/` separated; empty for the root
        #[arg(default_value = "")]
        path: String,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Show immediate entries (files and directories) instead of files
        #[arg(short, long, conflicts_with = "recursive")]
        entries: bool,

        /// Print JSON instead of one path per line
        #[arg(long)]
        json: bool,
    },
    /// Print a text resource
    Cat { path: String },
    /// Parse a version string, or detect the unit's version
    Version {
        raw: Option<String>,

        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let classpath = ClassPath::builder().roots(&cli.classpath).build();
    let unit = CodeUnit::new(&cli.unit, Arc::new(classpath)).context("Invalid code unit")?;

    match cli.command {
        Command::Ls {
            path,
            recursive,
            entries,
            json,
        } => {
            if cli.classpath.is_empty() {
                bail!("No class path roots given (use --classpath or RESKIT_CLASSPATH)");
            }

            if entries {
                let Some(children) = list_resource(&unit, &path)
                    .context(format!("Failed to list resource path '{}'", path))?
                else {
                    bail!("Resource path not found: '{}'", path);
                };

                let mut children: Vec<_> = children.into_iter().collect();
                children.sort_by(|a, b| a.name().cmp(b.name()));

                if json {
                    println!("{}", serde_json::to_string_pretty(&children)?);
                } else {
                    for child in children {
                        let suffix = if child.is_file() { "" } else { "/" };
                        println!("{}{}", child.name(), suffix);
                    }
                }
            } else {
                let Some(files) = list_all_files(&unit, &path, recursive)
                    .context(format!("Failed to list resource path '{}'", path))?
                else {
                    bail!("Resource path not found: '{}'", path);
                };

                let mut files: Vec<_> = files.into_iter().collect();
                files.sort();

                if json {
                    println!("{}", serde_json::to_string_pretty(&files)?);
                } else {
                    for file in files {
                        println!("{}", file);
                    }
                }
            }
        }
        Command::Cat { path } => {
            let Some(contents) = read_resource_to_string(&unit, &path)
                .context(format!("Failed to read resource '{}'", path))?
            else {
                bail!("Resource not found: '{}'", path);
            };
            print!("{}", contents);
        }
        Command::Version { raw, json } => {
            let version = match raw {
                Some(raw) => Version::parse(&raw).context("Failed to parse version")?,
                None if cli.classpath.is_empty() => Version::current(),
                None => Version::detect(&unit).context("Failed to detect version")?,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&version)?);
            } else {
                println!("major:    {}", version.major());
                println!("minor:    {}", version.minor());
                println!("patch:    {}", version.patch().unwrap_or("-"));
                println!("snapshot: {}", version.snapshot().unwrap_or("-"));
            }
        }
    }

    Ok(())
}
