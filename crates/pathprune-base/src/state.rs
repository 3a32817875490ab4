use core::fmt;

/// Position of the recognizer within a (possible) `<path` element.
///
/// States are named after the byte they are waiting for. Once `<path` has been seen, the scanner
/// looks for the literal `0,0"` followed (eventually) by `/>`; a `/>` that arrives before the
/// coordinates have matched marks the element as one to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanState {
	/// Not in any candidate element
	#[default]
	Seeking,
	/// `<` seen
	TagP,
	/// `<p` seen
	TagA,
	/// `<pa` seen
	TagT,
	/// `<pat` seen
	TagH,
	/// Inside a `<path` element, looking for a `0`
	Zero1,
	/// `0` seen
	Comma,
	/// `/` seen before the coordinates matched; `>` here closes a path to keep
	Close,
	/// `0,` seen
	Zero2,
	/// `0,0` seen
	Quote,
	/// `0,0"` seen, waiting for the `/` of `/>`
	TailSlash,
	/// `0,0"` then `/` seen; `>` here closes an empty path
	TailClose,
}

static_assertions::assert_eq_size!(ScanState, u8);

/// What the caller should do with its buffered bytes after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
	/// Keep buffering
	Continue,
	/// Write the buffered bytes out unchanged, then clear the buffer
	Emit,
	/// Clear the buffer without writing it; one empty path has been removed
	Drop,
}

impl ScanState {
	/// Every state, in declaration order.
	pub const ALL: [ScanState; 12] = [
		ScanState::Seeking,
		ScanState::TagP,
		ScanState::TagA,
		ScanState::TagT,
		ScanState::TagH,
		ScanState::Zero1,
		ScanState::Comma,
		ScanState::Close,
		ScanState::Zero2,
		ScanState::Quote,
		ScanState::TailSlash,
		ScanState::TailClose,
	];

	/// Computes the next state and the buffer action for one input byte.
	///
	/// The byte is expected to already be in the caller's buffer. Every byte value has a
	/// transition from every state, so this never fails.
	pub const fn step(self, byte: u8) -> (ScanState, Action) {
		use ScanState::*;

		match (self, byte) {
			(Seeking, b'<') => (TagP, Action::Continue),
			(Seeking, _) => (Seeking, Action::Emit),

			(TagP, b'p') => (TagA, Action::Continue),
			(TagA, b'a') => (TagT, Action::Continue),
			(TagT, b't') => (TagH, Action::Continue),
			(TagH, b'h') => (Zero1, Action::Continue),
			(TagP | TagA | TagT | TagH, _) => (Seeking, Action::Emit),

			// `/` starts a close search from anywhere in the coordinate search, except `Close` itself
			(Zero1 | Comma | Zero2 | Quote, b'/') => (Close, Action::Continue),

			(Zero1 | Close, b'0') => (Comma, Action::Continue),
			(Zero1, _) => (Zero1, Action::Continue),

			(Comma, b',') => (Zero2, Action::Continue),
			(Comma, _) => (Zero1, Action::Continue),

			(Close, b'>') => (Seeking, Action::Emit),
			(Close, _) => (Zero1, Action::Continue),

			(Zero2, b'0') => (Quote, Action::Continue),
			(Zero2, _) => (Zero1, Action::Continue),

			(Quote, b'"') => (TailSlash, Action::Continue),
			(Quote, _) => (Zero1, Action::Continue),

			(TailSlash, b'/') => (TailClose, Action::Continue),
			(TailSlash, _) => (TailSlash, Action::Continue),

			(TailClose, b'>') => (Seeking, Action::Drop),
			(TailClose, _) => (TailSlash, Action::Continue),
		}
	}

	/// Is the scanner partway through a candidate element?
	#[inline]
	pub const fn in_candidate(self) -> bool {
		!matches!(self, ScanState::Seeking)
	}

	/// Has the current candidate already matched its `0,0"` coordinates?
	///
	/// A candidate in one of these states will be dropped as soon as a `/>` arrives, no matter how
	/// much later in the input that is.
	#[inline]
	pub const fn coordinates_matched(self) -> bool {
		matches!(self, ScanState::TailSlash | ScanState::TailClose)
	}
}

impl fmt::Display for ScanState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match *self {
			ScanState::Seeking => "seeking",
			ScanState::TagP => "tag_p",
			ScanState::TagA => "tag_a",
			ScanState::TagT => "tag_t",
			ScanState::TagH => "tag_h",
			ScanState::Zero1 => "zero_1",
			ScanState::Comma => "comma",
			ScanState::Close => "close",
			ScanState::Zero2 => "zero_2",
			ScanState::Quote => "quote",
			ScanState::TailSlash => "tail_slash",
			ScanState::TailClose => "tail_close",
		})
	}
}

#[cfg(test)]
mod test;
