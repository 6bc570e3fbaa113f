use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use envsub_cli::Commands;
use envsub_cli::EnvsubCli;
use envsub_cli::OutputFormat;
use envsub_core::AnyEmptyResult;
use envsub_core::Bindings;
use envsub_core::EnvsubError;
use envsub_core::StaleFile;
use envsub_core::check_file;
use envsub_core::discover::discover_manifests;
use envsub_core::process_file;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = EnvsubCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	if args.verbose {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(
				|_| tracing_subscriber::EnvFilter::new("envsub_core=debug,envsub=debug"),
			))
			.with_writer(std::io::stderr)
			.init();
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match args.command {
		Some(Commands::Update { dry_run }) => run_update(&args, dry_run),
		Some(Commands::Check { diff, format }) => run_check(&args, diff, format),
		None => {
			eprintln!("No subcommand specified. Run `envsub --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<EnvsubError>() {
			Ok(envsub_err) => {
				let report: miette::Report = (*envsub_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn resolve_root(args: &EnvsubCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Environment snapshot plus any explicit `--var NAME=VALUE` bindings.
fn build_bindings(args: &EnvsubCli) -> Result<Bindings, EnvsubError> {
	let mut bindings = Bindings::from_env();
	for var in &args.vars {
		let Some((name, value)) = var.split_once('=') else {
			return Err(EnvsubError::InvalidBinding(var.clone()));
		};
		if name.is_empty() {
			return Err(EnvsubError::InvalidBinding(var.clone()));
		}
		bindings.insert(name, value);
	}
	Ok(bindings)
}

fn run_update(args: &EnvsubCli, dry_run: bool) -> AnyEmptyResult {
	let root = resolve_root(args);
	let bindings = build_bindings(args)?;
	let files = discover_manifests(&root, &args.pattern)?;

	if files.is_empty() {
		println!(
			"No manifest files matched `{}` under {}.",
			args.pattern,
			root.display()
		);
		return Ok(());
	}

	if dry_run {
		let mut stale = 0;
		let mut failed = 0;
		for file in &files {
			let rel = make_relative(file, &root);
			match check_file(file, &bindings) {
				Ok(Some(_)) => {
					stale += 1;
					println!("  {} {rel}", colored!("would update", yellow));
				}
				Ok(None) => {
					if args.verbose {
						println!("  up to date   {rel}");
					}
				}
				Err(error) => {
					failed += 1;
					eprint_report(error);
				}
			}
		}
		println!(
			"Dry run: would update {stale} of {} manifest file(s).",
			files.len()
		);
		if failed > 0 {
			return Err(format!("{failed} manifest file(s) failed").into());
		}
		return Ok(());
	}

	let mut changed = 0;
	let mut failed = 0;
	for file in &files {
		let rel = make_relative(file, &root);
		// Per-file failures are reported and the rest of the batch runs.
		match process_file(file, &bindings) {
			Ok(outcome) => {
				if outcome.changed {
					changed += 1;
				}
				if args.verbose {
					println!(
						"  {rel} (backup: {})",
						make_relative(&outcome.backup, &root)
					);
				}
			}
			Err(error) => {
				failed += 1;
				eprint_report(error);
			}
		}
	}

	println!("Updated {changed} of {} manifest file(s).", files.len());
	if failed > 0 {
		return Err(format!("{failed} manifest file(s) failed").into());
	}

	Ok(())
}

fn run_check(args: &EnvsubCli, show_diff: bool, format: OutputFormat) -> AnyEmptyResult {
	let root = resolve_root(args);
	let bindings = build_bindings(args)?;
	let files = discover_manifests(&root, &args.pattern)?;

	let mut stale: Vec<StaleFile> = Vec::new();
	let mut errors: Vec<(PathBuf, String)> = Vec::new();
	for file in &files {
		match check_file(file, &bindings) {
			Ok(Some(entry)) => stale.push(entry),
			Ok(None) => {}
			Err(error) => errors.push((file.clone(), error.to_string())),
		}
	}

	match format {
		OutputFormat::Json => {
			let stale_entries: Vec<serde_json::Value> = stale
				.iter()
				.map(|entry| serde_json::json!({ "file": make_relative(&entry.path, &root) }))
				.collect();
			let error_entries: Vec<serde_json::Value> = errors
				.iter()
				.map(|(path, message)| {
					serde_json::json!({
						"file": make_relative(path, &root),
						"message": message,
					})
				})
				.collect();
			let output = serde_json::json!({
				"ok": stale.is_empty() && errors.is_empty(),
				"stale": stale_entries,
				"errors": error_entries,
			});
			println!("{output}");
		}
		OutputFormat::Text => {
			if stale.is_empty() && errors.is_empty() {
				println!(
					"Check passed: {} manifest file(s) are up to date.",
					files.len()
				);
			} else {
				eprintln!("Check failed.");
				eprintln!("  errors: {}", errors.len());
				eprintln!("  stale manifests: {}", stale.len());

				if !errors.is_empty() {
					eprintln!();
					eprintln!("Errors:");
					for (path, message) in &errors {
						eprintln!("  {}: {message}", make_relative(path, &root));
					}
				}

				if !stale.is_empty() {
					eprintln!();
					eprintln!("Stale manifests:");
					for entry in &stale {
						eprintln!("  {}", make_relative(&entry.path, &root));
						if show_diff {
							print_diff(&entry.current, &entry.expected);
						}
					}
					eprintln!();
					eprintln!(
						"{} manifest file(s) are out of date. Run `envsub update` to fix.",
						stale.len()
					);
				}
			}
		}
	}

	if !errors.is_empty() {
		return Err(format!("{} manifest file(s) failed", errors.len()).into());
	}
	if !stale.is_empty() {
		process::exit(1);
	}

	Ok(())
}

fn eprint_report(error: EnvsubError) {
	let report: miette::Report = error.into();
	eprintln!("{report:?}");
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
