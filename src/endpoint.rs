//! Opening the byte source and sink for a session.

use core::fmt;
use std::{
	fs,
	io::{self, BufReader, BufWriter},
};

use crate::session::Error;

/// Which end of a session an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
	Input,
	Output,
}

impl fmt::Display for Endpoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match *self {
			Endpoint::Input => "input",
			Endpoint::Output => "output",
		})
	}
}

/// Is this the conventional name for stdin / stdout?
#[inline]
pub fn is_std_stream(path: &str) -> bool {
	path == "-"
}

/// Default output name for an input file, as `<input>_out.svg`.
///
/// Reading from stdin means writing to stdout.
pub fn derive_output_path(input: &str) -> String {
	if is_std_stream(input) {
		input.to_owned()
	} else {
		format!("{}_out.svg", input)
	}
}

/// Do `input` and `output` name the same existing file?
///
/// An output that doesn't exist yet can't clash with anything. Stdio never clashes.
pub fn same_file(input: &str, output: &str) -> bool {
	if is_std_stream(input) || is_std_stream(output) {
		return false;
	}
	match (fs::canonicalize(input), fs::canonicalize(output)) {
		(Ok(a), Ok(b)) => a == b,
		_ => false,
	}
}

pub enum Input {
	Stdin(io::StdinLock<'static>),
	File(BufReader<fs::File>),
}

impl io::Read for Input {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		match self {
			Input::Stdin(s) => io::Read::read(s, buf),
			Input::File(f) => io::Read::read(f, buf),
		}
	}
}

pub enum Output {
	Stdout(io::StdoutLock<'static>),
	File(fs::File),
}

impl io::Write for Output {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		match self {
			Output::Stdout(s) => io::Write::write(s, buf),
			Output::File(f) => io::Write::write(f, buf),
		}
	}

	fn flush(&mut self) -> io::Result<()> {
		match self {
			Output::Stdout(s) => io::Write::flush(s),
			Output::File(f) => io::Write::flush(f),
		}
	}
}

pub fn open_input(path: &str) -> Result<Input, Error> {
	if is_std_stream(path) {
		return Ok(Input::Stdin(io::stdin().lock()));
	}
	fs::File::open(path)
		.map(|f| Input::File(BufReader::new(f)))
		.map_err(|e| Error::unavailable(Endpoint::Input, path, e))
}

/// Opens the output for writing, truncating any existing file.
pub fn open_output(path: &str) -> Result<BufWriter<Output>, Error> {
	let output = if is_std_stream(path) {
		Output::Stdout(io::stdout().lock())
	} else {
		fs::File::create(path)
			.map(Output::File)
			.map_err(|e| Error::unavailable(Endpoint::Output, path, e))?
	};
	Ok(BufWriter::new(output))
}
