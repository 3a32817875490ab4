use core::fmt;
use std::io;

use thiserror::Error;
use tracing::debug;

use crate::{
	endpoint::{self, Endpoint},
	scanner::{DiscardCount, Scanner},
	support::NextByte,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	#[error("cannot open {endpoint} `{path}`: {reason}")]
	EndpointUnavailable {
		endpoint: Endpoint,
		path: String,
		reason: String,
	},
	#[error("read failed at byte {offset}: {reason}")]
	ReadFailure { offset: u64, reason: String },
	#[error("write failed: {0}")]
	WriteFailure(String),
}

impl Error {
	pub(crate) fn unavailable(endpoint: Endpoint, path: &str, e: io::Error) -> Self {
		Self::EndpointUnavailable { endpoint, path: path.to_owned(), reason: e.to_string() }
	}

	pub(crate) fn write(e: io::Error) -> Self {
		Self::WriteFailure(e.to_string())
	}
}

/// Copies `source` to `sink`, leaving out every empty `<path .../>` element.
///
/// Returns how many elements were removed. The sink is flushed once, after the last byte.
pub fn run<I>(source: &mut I, sink: &mut dyn io::Write) -> Result<DiscardCount, Error>
where I: NextByte + ?Sized, I::Error: fmt::Display {
	let mut scanner = Scanner::new();

	loop {
		let byte = match source.next_byte() {
			Ok(Some(b)) => b,
			Ok(None) => break,
			Err(e) => return Err(Error::ReadFailure {
				offset: scanner.consumed(),
				reason: e.to_string(),
			}),
		};
		scanner.push(byte, sink)?;
	}

	scanner.finish(sink)?;
	sink.flush().map_err(Error::write)?;

	let discarded = scanner.discarded();
	debug!(
		consumed = scanner.consumed(),
		emitted = scanner.emitted(),
		dropped = scanner.dropped(),
		%discarded,
		"scan complete"
	);
	Ok(discarded)
}

/// Opens `input` and `output` (`-` meaning stdin/stdout) and runs a session between them.
///
/// The input is opened first, so a missing input leaves any existing output file untouched. An
/// output naming the same file as the input is refused before anything is truncated.
pub fn run_paths(input: &str, output: &str) -> Result<DiscardCount, Error> {
	let mut source = endpoint::open_input(input)?;
	if endpoint::same_file(input, output) {
		return Err(Error::EndpointUnavailable {
			endpoint: Endpoint::Output,
			path: output.to_owned(),
			reason: "same file as the input".to_owned(),
		});
	}
	let mut sink = endpoint::open_output(output)?;
	let source: &mut dyn io::Read = &mut source;
	run(source, &mut sink)
}
