//! Path arguments accepted by the engine.
//!
//! Every operation takes either a delimited string, which is tokenized with
//! the engine's settings, or a list of segments used verbatim. `None` stands
//! for a missing path and behaves like the empty path.

use crate::core::tokenizer::Tokenizer;

pub trait PathArg {
    /// Resolve the argument into segments.
    fn segments(&self, tokenizer: &Tokenizer) -> Vec<String>;
}

impl PathArg for str {
    fn segments(&self, tokenizer: &Tokenizer) -> Vec<String> {
        tokenizer.tokenize(self)
    }
}

impl PathArg for String {
    fn segments(&self, tokenizer: &Tokenizer) -> Vec<String> {
        tokenizer.tokenize(self)
    }
}

impl PathArg for [String] {
    fn segments(&self, _: &Tokenizer) -> Vec<String> {
        self.to_vec()
    }
}

impl PathArg for [&str] {
    fn segments(&self, _: &Tokenizer) -> Vec<String> {
        self.iter().map(|segment| (*segment).to_string()).collect()
    }
}

impl<const N: usize> PathArg for [&str; N] {
    fn segments(&self, tokenizer: &Tokenizer) -> Vec<String> {
        self.as_slice().segments(tokenizer)
    }
}

impl<const N: usize> PathArg for [String; N] {
    fn segments(&self, tokenizer: &Tokenizer) -> Vec<String> {
        self.as_slice().segments(tokenizer)
    }
}

impl PathArg for Vec<String> {
    fn segments(&self, tokenizer: &Tokenizer) -> Vec<String> {
        self.as_slice().segments(tokenizer)
    }
}

impl PathArg for Vec<&str> {
    fn segments(&self, tokenizer: &Tokenizer) -> Vec<String> {
        self.as_slice().segments(tokenizer)
    }
}

impl<T: PathArg> PathArg for Option<T> {
    fn segments(&self, tokenizer: &Tokenizer) -> Vec<String> {
        self.as_ref()
            .map(|path| path.segments(tokenizer))
            .unwrap_or_default()
    }
}

impl<T: PathArg + ?Sized> PathArg for &T {
    fn segments(&self, tokenizer: &Tokenizer) -> Vec<String> {
        (**self).segments(tokenizer)
    }
}
