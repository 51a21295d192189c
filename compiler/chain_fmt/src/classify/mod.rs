//! Chain-link classification.
//!
//! Pure predicates over a single token. A *chain link* is a member-access
//! operator (`->` or `?->`); the token after it is the call name that the
//! marker sets are matched against.

use chain_ir::{Token, TokenKind};

use crate::config::{CallMarker, MarkerSet};

/// `->` or `?->`.
#[inline]
pub fn is_chain_link(token: &Token) -> bool {
    token.kind.is_object_operator()
}

/// Marker classification of a call-name token.
///
/// Only identifiers can be markers; anything else is [`CallMarker::Plain`].
#[inline]
pub fn call_marker(token: &Token, markers: &MarkerSet) -> CallMarker {
    if token.kind == TokenKind::Ident {
        markers.classify(token.text())
    } else {
        CallMarker::Plain
    }
}

/// An identifier in the open-marker set.
#[inline]
pub fn is_open_marker(token: &Token, markers: &MarkerSet) -> bool {
    call_marker(token, markers) == CallMarker::Open
}

/// An identifier in the close-marker set.
#[inline]
pub fn is_close_marker(token: &Token, markers: &MarkerSet) -> bool {
    call_marker(token, markers) == CallMarker::Close
}

/// A plain `$variable` reference.
#[inline]
pub fn is_bare_variable(token: &Token) -> bool {
    token.kind == TokenKind::Variable
}
