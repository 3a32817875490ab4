use std::borrow::Cow;
use std::fmt;
use std::io;

use gumdrop::Options;
use tracing::info;

pub mod support;
pub mod scanner;
pub mod session;
pub mod endpoint;

#[cfg(doc)]
pub use pathprune_base::state;

use endpoint::{derive_output_path, is_std_stream};

#[derive(Debug, Options)]
struct Args {

	#[options(free, help = "SVG file to clean up (`-` for stdin)")]
	input_file: Option<String>,

	#[options(help = "output file (default: INPUT_out.svg, or stdout for stdin)", meta = "FILE")]
	output: Option<String>,

	#[options(help = "don't print file names or the summary")]
	quiet: bool,

	#[options(count, help = "log more detail; repeat for even more")]
	verbose: u32,

	#[options(help = "show this help")]
	help: bool,
}

#[repr(i32)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum ExitCode {
	Success = 0,
	IoError = 2,
	CliArgError = 3,
}

impl From<ExitCode> for i32 {
	fn from(src: ExitCode) -> Self {
		src as i32
	}
}


trait HelpExt: Eq + PartialEq<str> {
	fn is_help(&self) -> bool {
		["help", "-h", "--help", "-help"].into_iter().any(|help| self == help)
	}
}
impl HelpExt for str {}


fn print_usage_and_exit(process_name: &str, code: ExitCode) -> ! {
	eprintln!("Usage: {} [OPTIONS] INPUT", process_name);
	eprintln!();
	eprintln!("Scans an SVG file for empty paths (self-closing `<path>` elements whose");
	eprintln!("coordinates read `0,0\"`) and removes them, leaving every other byte as it was.");
	eprintln!("The result is written to INPUT_out.svg unless --output says otherwise.");
	eprintln!();
	eprintln!("{}", Args::usage());
	std::process::exit(code.into());
}

/// Prints a status line, keeping stdout clean when it carries the output document.
fn say(to_stderr: bool, msg: impl fmt::Display) {
	if to_stderr {
		eprintln!("{}", msg);
	} else {
		println!("{}", msg);
	}
}

fn init_logging(verbose: u32) {
	use tracing_subscriber::{fmt, prelude::*, EnvFilter};

	let default_level = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::registry()
		.with(fmt::layer().with_writer(io::stderr).with_target(false))
		.with(filter)
		.init();
}

fn main() {
	let (process, args_str) = {
		let mut iter = std::env::args();
		let process = iter.next().map(Cow::Owned).unwrap_or(
			Cow::Borrowed(env!("CARGO_PKG_NAME"))
		);
		(process, iter.collect::<Vec<_>>())
	};
	if matches!(*args_str, [ref s] if s.is_help()) {
		print_usage_and_exit(&process, ExitCode::Success);
	}
	let args = match Args::parse_args_default(&args_str) {
		Ok(a) if a.help => print_usage_and_exit(&process, ExitCode::Success),
		Ok(a) => a,
		Err(e) => {
			eprintln!("argument error: {}", e);
			eprintln!("run `{} help` for usage guidelines", process);
			std::process::exit(ExitCode::CliArgError.into());
		}
	};
	let input = match args.input_file {
		Some(ref input) => input.as_str(),
		None => {
			eprintln!("no input file given");
			print_usage_and_exit(&process, ExitCode::CliArgError);
		}
	};

	init_logging(args.verbose);

	let output = args.output.clone().unwrap_or_else(|| derive_output_path(input));
	let to_stdout = is_std_stream(&output);

	if !args.quiet {
		say(to_stdout, format_args!(" input: {}", input));
		say(to_stdout, format_args!("output: {}", output));
	}
	info!(input, output = %output, "removing empty paths");

	let code = match session::run_paths(input, &output) {
		Ok(discarded) => {
			if !args.quiet {
				say(to_stdout, format_args!("Found {} empty paths.", discarded));
			}
			ExitCode::Success
		},
		Err(e) => {
			eprintln!("error: {}", e);
			ExitCode::IoError
		},
	};

	std::process::exit(code.into());
}
