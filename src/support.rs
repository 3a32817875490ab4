use std::{io, convert::Infallible};

/// A source that yields one byte at a time.
///
/// `Ok(None)` means the source is exhausted; it is returned once, after the last real byte.
pub trait NextByte {
	type Error;
	fn next_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

impl<'a> NextByte for dyn io::Read + 'a {
	type Error = io::Error;

	fn next_byte(&mut self) -> Result<Option<u8>, Self::Error> {
		next_byte_io_read(self)
	}
}

impl<'a, 'b> NextByte for &'a mut (dyn io::Read + 'b) {
	type Error = io::Error;

	fn next_byte(&mut self) -> Result<Option<u8>, Self::Error> {
		next_byte_io_read(self)
	}
}

fn next_byte_io_read<I: io::Read + ?Sized>(src: &mut I) -> Result<Option<u8>, io::Error> {
	let mut tgt = [0u8];
	loop {
		match io::Read::read(src, &mut tgt) {
			Ok(0) => return Ok(None),
			Ok(_) => return Ok(Some(tgt[0])),
			Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
			Err(e) => return Err(e),
		}
	}
}

impl<'a> NextByte for std::slice::Iter<'a, u8> {
	type Error = Infallible;

	fn next_byte(&mut self) -> Result<Option<u8>, Self::Error> {
		Ok(self.next().copied())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	struct Flaky<'a> {
		data: &'a [u8],
		interrupt: bool,
	}

	impl io::Read for Flaky<'_> {
		fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
			self.interrupt = !self.interrupt;
			if self.interrupt {
				return Err(io::ErrorKind::Interrupted.into());
			}
			io::Read::read(&mut self.data, buf)
		}
	}

	#[test]
	fn reads_through_interruptions() {
		let mut flaky = Flaky { data: b"<g/>", interrupt: false };
		let src: &mut dyn io::Read = &mut flaky;
		let mut out = Vec::new();
		while let Some(b) = src.next_byte().unwrap() {
			out.push(b);
		}
		assert_eq!(b"<g/>", &*out);
		assert!(src.next_byte().unwrap().is_none());
	}

	#[test]
	fn slice_source_ends_once() {
		let mut src = b"ab".iter();
		assert_eq!(Ok(Some(b'a')), src.next_byte());
		assert_eq!(Ok(Some(b'b')), src.next_byte());
		assert_eq!(Ok(None), src.next_byte());
	}
}
