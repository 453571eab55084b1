//! Display tokens and lines handed to the renderer

use super::chunk::TokenAnnotation;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// One visual token (word run, space run or placeholder)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenData {
    pub text: String,
    pub begin: usize,
    pub end: usize,

    /// `"{begin}-{end}"`, stable across re-layouts of the same text
    pub key: String,

    pub is_first_token_of_chunk: bool,
    pub is_last_token_of_chunk: bool,

    /// Shared by every token of the originating chunk
    #[serde(rename = "token_annotations")]
    pub token_annotations: Rc<[TokenAnnotation]>,
}

impl TokenData {
    /// Text of the token, without annotations
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// A row of tokens; newlines separate lines and never appear as tokens
pub type Line = Vec<TokenData>;
