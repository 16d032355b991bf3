//! Lazy token stream over a text source.
//!
//! [`TokenStream`] pulls whatever chunk the underlying [`BufRead`] has
//! buffered, decodes it and hands out its tokens one at a time. A word cut
//! off at the end of a chunk is carried into the next read, as are the bytes
//! of a UTF-8 sequence split across reads. Memory use is bounded by the
//! reader's buffer plus the longest single word, independent of line length
//! and input size.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use termscan_core::{Error, Result, Token, Tokenizer};

/// Open `path` and stream its tokens.
pub fn open_text(path: &Path, tokenizer: Tokenizer) -> Result<TokenStream<BufReader<File>>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    Ok(TokenStream::new(BufReader::new(file), tokenizer).source(path))
}

/// Iterator of tokens pulled from a [`BufRead`].
///
/// Yields `Err` at most once: after a read failure the stream is exhausted.
/// Tokens decoded before an invalid UTF-8 sequence are still yielded first.
pub struct TokenStream<R> {
    reader: R,
    tokenizer: Tokenizer,
    source: PathBuf,
    /// Decoded text; `window[pos..]` is not tokenized yet.
    window: String,
    pos: usize,
    /// Leading bytes of a UTF-8 sequence whose tail is still unread.
    partial: Vec<u8>,
    bytes_read: u64,
    eof: bool,
    failure: Option<io::Error>,
    done: bool,
}

impl<R: BufRead> TokenStream<R> {
    pub fn new(reader: R, tokenizer: Tokenizer) -> Self {
        Self {
            reader,
            tokenizer,
            source: PathBuf::from("<stream>"),
            window: String::new(),
            pos: 0,
            partial: Vec::new(),
            bytes_read: 0,
            eof: false,
            failure: None,
            done: false,
        }
    }

    /// Name reported in I/O errors.
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = path.into();
        self
    }

    /// Bytes consumed from the reader so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Pull the next buffered chunk into `window`. Sets `eof` at end of input.
    fn fill(&mut self) -> io::Result<()> {
        let chunk = match self.reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => return Ok(()),
            Err(e) => return Err(e),
        };

        if chunk.is_empty() {
            self.eof = true;
            if !self.partial.is_empty() {
                return Err(invalid_utf8("input ends inside a UTF-8 sequence"));
            }
            return Ok(());
        }

        let len = chunk.len();
        self.partial.extend_from_slice(chunk);
        self.reader.consume(len);
        self.bytes_read += len as u64;

        match std::str::from_utf8(&self.partial) {
            Ok(text) => {
                self.window.push_str(text);
                self.partial.clear();
                Ok(())
            }
            Err(e) => {
                let valid = e.valid_up_to();
                self.window
                    .push_str(&String::from_utf8_lossy(&self.partial[..valid]));
                if e.error_len().is_some() {
                    self.partial.clear();
                    return Err(invalid_utf8("stream did not contain valid UTF-8"));
                }
                self.partial.drain(..valid);
                Ok(())
            }
        }
    }
}

impl<R: BufRead> Iterator for TokenStream<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }

            let rest = self.window.len() - self.pos;
            match self.tokenizer.find(&self.window[self.pos..]) {
                // A word touching the end of the window may go on in the next chunk.
                Some(span) if span.end < rest || self.eof => {
                    let word = &self.window[self.pos + span.start..self.pos + span.end];
                    let token = Token::new(word.to_lowercase());
                    self.pos += span.end;
                    return Some(Ok(token));
                }
                found => {
                    if self.eof {
                        self.done = true;
                        if let Some(e) = self.failure.take() {
                            return Some(Err(Error::io(&self.source, e)));
                        }
                        tracing::trace!(source = %self.source.display(), bytes = self.bytes_read, "end of text");
                        return None;
                    }

                    let keep = found.map_or(self.window.len(), |span| self.pos + span.start);
                    self.window.drain(..keep);
                    self.pos = 0;
                    if let Err(e) = self.fill() {
                        self.eof = true;
                        self.failure = Some(e);
                    }
                }
            }
        }
    }
}

fn invalid_utf8(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.to_string())
}
