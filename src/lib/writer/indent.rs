use crate::utils::constants::error_messages;

/// The widest indentation that the writers may ask for
pub const MAX_INDENT: usize = 80;

const SPACES: &str = concat!(
    "                                        ",
    "                                        ",
);

/// Appends exactly `spaces` space characters to `out`, returning it back so the
/// call can be chained with the content of the line.
///
/// # Panics
/// When `spaces` is wider than [`MAX_INDENT`]
pub fn indent(out: &mut String, spaces: usize) -> &mut String {
    assert!(
        spaces <= MAX_INDENT,
        "{}: {spaces} > {MAX_INDENT}",
        error_messages::INDENT_OVERFLOW
    );
    out.push_str(&SPACES[..spaces]);
    out
}
