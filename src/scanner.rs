//! Buffering on top of the byte recognizer.
//!
//! [`Scanner`] owns the pending bytes of the current candidate element and decides, via
//! [`ScanState::step`], whether they reach the output.

use core::fmt;
use std::io;

use bstr::ByteSlice;
use pathprune_base::{Action, ScanState};
use tracing::{debug, trace, warn};

use crate::session::Error;

/// Number of empty paths removed so far. Only a [`Scanner`] can increase it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DiscardCount(u64);

impl DiscardCount {
	#[inline]
	pub const fn get(self) -> u64 {
		self.0
	}

	fn bump(&mut self) {
		self.0 += 1;
	}
}

impl fmt::Display for DiscardCount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

/// One scan session: recognizer state, pending bytes and counters.
#[derive(Debug, Default)]
pub struct Scanner {
	/// Current recognizer position
	state: ScanState,
	/// Everything consumed since the last emit or drop
	pending: Vec<u8>,
	/// Removed empty paths
	discarded: DiscardCount,
	/// Total bytes taken in
	consumed: u64,
	/// Total bytes written to the sink
	emitted: u64,
	/// Total bytes thrown away with removed paths
	dropped: u64,
}

impl Scanner {
	pub fn new() -> Self {
		Self::default()
	}

	/// Feeds one byte through the recognizer, writing to `sink` if the pending bytes are settled
	/// as output.
	pub fn push<W: io::Write + ?Sized>(&mut self, byte: u8, sink: &mut W) -> Result<Action, Error> {
		self.pending.push(byte);
		self.consumed += 1;

		let (next, action) = self.state.step(byte);
		if next != self.state {
			trace!(from = %self.state, to = %next, byte = ?(byte as char), "state change");
		}
		self.state = next;

		match action {
			Action::Continue => {},
			Action::Emit => self.emit(sink)?,
			Action::Drop => self.discard(),
		}
		Ok(action)
	}

	/// Ends the session, writing out whatever is still pending.
	///
	/// An unterminated candidate is never lost: its bytes go out exactly as they came in.
	pub fn finish<W: io::Write + ?Sized>(&mut self, sink: &mut W) -> Result<DiscardCount, Error> {
		if self.state.coordinates_matched() {
			// matched `0,0"` but never saw a `/>`; everything after it was swallowed into the tag
			warn!(
				pending = self.pending.len(),
				"input ended inside an empty-looking path that was never self-closed; \
				writing it out unchanged"
			);
		} else if self.state.in_candidate() {
			debug!(state = %self.state, pending = self.pending.len(),
				"input ended inside a candidate element");
		}

		if !self.pending.is_empty() {
			self.emit(sink)?;
		}
		self.state = ScanState::Seeking;
		Ok(self.discarded)
	}

	fn emit<W: io::Write + ?Sized>(&mut self, sink: &mut W) -> Result<(), Error> {
		sink.write_all(&self.pending).map_err(Error::write)?;
		self.emitted += self.pending.len() as u64;
		self.pending.clear();
		Ok(())
	}

	fn discard(&mut self) {
		self.discarded.bump();
		debug!(n = self.discarded.get(), tag = %self.pending.as_bstr(), "dropped empty path");
		self.dropped += self.pending.len() as u64;
		self.pending.clear();
	}

	#[cfg(test)]
	pub fn state(&self) -> ScanState {
		self.state
	}

	#[inline]
	pub fn discarded(&self) -> DiscardCount {
		self.discarded
	}

	/// Bytes fed in so far.
	#[inline]
	pub fn consumed(&self) -> u64 {
		self.consumed
	}

	/// Bytes written to the sink so far.
	#[inline]
	pub fn emitted(&self) -> u64 {
		self.emitted
	}

	/// Bytes removed along with empty paths so far.
	#[inline]
	pub fn dropped(&self) -> u64 {
		self.dropped
	}

	/// Bytes held back, waiting on the recognizer.
	#[cfg(test)]
	pub fn pending(&self) -> &[u8] {
		&self.pending
	}
}
