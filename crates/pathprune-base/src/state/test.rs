use super::{Action, ScanState};
use super::ScanState::*;

/// Rows of the transition table that name a specific byte.
static EXPLICIT_ROWS: [(ScanState, u8, ScanState, Action); 20] = [
	(Seeking, b'<', TagP, Action::Continue),
	(TagP, b'p', TagA, Action::Continue),
	(TagA, b'a', TagT, Action::Continue),
	(TagT, b't', TagH, Action::Continue),
	(TagH, b'h', Zero1, Action::Continue),
	(Zero1, b'/', Close, Action::Continue),
	(Zero1, b'0', Comma, Action::Continue),
	(Comma, b'/', Close, Action::Continue),
	(Comma, b',', Zero2, Action::Continue),
	(Close, b'>', Seeking, Action::Emit),
	(Close, b'0', Comma, Action::Continue),
	(Zero2, b'/', Close, Action::Continue),
	(Zero2, b'0', Quote, Action::Continue),
	(Quote, b'/', Close, Action::Continue),
	(Quote, b'"', TailSlash, Action::Continue),
	(TailSlash, b'/', TailClose, Action::Continue),
	(TailClose, b'>', Seeking, Action::Drop),
	// the "other" arms, spot-checked with a byte that is special elsewhere
	(Close, b'/', Zero1, Action::Continue),
	(Quote, b'0', Zero1, Action::Continue),
	(TailClose, b'/', TailSlash, Action::Continue),
];

/// Where each state goes on a byte that none of its explicit rows mention.
fn fallback(state: ScanState) -> (ScanState, Action) {
	match state {
		Seeking => (Seeking, Action::Emit),
		TagP | TagA | TagT | TagH => (Seeking, Action::Emit),
		Zero1 | Comma | Close | Zero2 | Quote => (Zero1, Action::Continue),
		TailSlash => (TailSlash, Action::Continue),
		TailClose => (TailSlash, Action::Continue),
	}
}

#[test]
fn explicit_rows() {
	for (from, byte, to, action) in EXPLICIT_ROWS {
		assert_eq!((to, action), from.step(byte),
			"{} on {:?}", from, byte as char);
	}
}

#[test]
fn every_other_byte_takes_the_fallback() {
	for state in ScanState::ALL {
		for byte in 0..=u8::MAX {
			let named = EXPLICIT_ROWS.iter()
				.take(17) // only the rows lifted straight from the table
				.any(|&(from, b, _, _)| from == state && b == byte);
			if !named {
				assert_eq!(fallback(state), state.step(byte),
					"{} on {:02x}", state, byte);
			}
		}
	}
}

#[test]
fn only_tail_close_drops() {
	for state in ScanState::ALL {
		for byte in 0..=u8::MAX {
			let (_, action) = state.step(byte);
			assert_eq!(action == Action::Drop, state == TailClose && byte == b'>');
		}
	}
}

#[test]
fn buffer_actions_return_to_seeking() {
	for state in ScanState::ALL {
		for byte in 0..=u8::MAX {
			match state.step(byte) {
				(next, Action::Emit | Action::Drop) => assert_eq!(Seeking, next),
				(_, Action::Continue) => {},
			}
		}
	}
}

#[test]
fn tag_name_is_case_sensitive() {
	assert_eq!((Seeking, Action::Emit), TagP.step(b'P'));
	assert_eq!((Seeking, Action::Emit), TagA.step(b'A'));
	assert_eq!((Seeking, Action::Emit), TagT.step(b'T'));
	assert_eq!((Seeking, Action::Emit), TagH.step(b'H'));
}

#[test]
fn walk_empty_path() {
	let mut state = Seeking;
	let mut actions = Vec::new();
	for &b in br#"<path d="M 0,0"/>"# {
		let (next, action) = state.step(b);
		state = next;
		actions.push(action);
	}
	assert_eq!(Seeking, state);
	assert_eq!(Some(&Action::Drop), actions.last());
	assert!(actions[..actions.len() - 1].iter().all(|&a| a == Action::Continue));
}

#[test]
fn candidate_flags() {
	assert!(!Seeking.in_candidate());
	assert!(ScanState::ALL[1..].iter().all(|s| s.in_candidate()));

	let matched: Vec<_> = ScanState::ALL.into_iter()
		.filter(|s| s.coordinates_matched())
		.collect();
	assert_eq!(vec![TailSlash, TailClose], matched);
}
