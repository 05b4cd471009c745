//! Greedy paragraph wrapping.
//!
//! Reproduces Python's `textwrap.TextWrapper` with default options so that the
//! generated docstrings match the ones produced by the ORM's own tooling:
//! tabs are expanded, whitespace characters become spaces, lines break at
//! whitespace or after hyphens inside words, and over-long words are split.

/// Column at which docstring summaries are wrapped.
pub const WRAP_WIDTH: usize = 100;

const TAB_SIZE: usize = 8;

/// Wrap `text` into lines of at most `width` characters.
///
/// Whitespace-only input yields no lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let munged = munge_whitespace(text);
    let mut chunks = split_chunks(&munged);
    chunks.reverse();

    let mut lines: Vec<String> = Vec::new();
    while !chunks.is_empty() {
        let mut line: Vec<Vec<char>> = Vec::new();
        let mut len = 0;

        // Leading whitespace is kept on the first line only
        if !lines.is_empty() && chunks.last().is_some_and(|c| is_blank(c)) {
            chunks.pop();
        }

        while let Some(chunk) = chunks.pop() {
            if len + chunk.len() <= width {
                len += chunk.len();
                line.push(chunk);
            } else {
                chunks.push(chunk);
                break;
            }
        }

        if let Some(chunk) = chunks.last_mut() {
            if chunk.len() > width {
                let space_left = if width < 1 { 1 } else { width - len };
                let head = break_long_word(chunk, space_left);
                len += head.len();
                line.push(head);
            }
        }

        if line.last().is_some_and(|c| is_blank(c)) {
            line.pop();
        }

        if !line.is_empty() {
            lines.push(line.into_iter().flatten().collect());
        }
    }

    lines
}

/// Split off the part of an over-long word that fits in `space_left`,
/// preferring to break just after the last hyphen that fits.
fn break_long_word(chunk: &mut Vec<char>, space_left: usize) -> Vec<char> {
    let mut end = space_left.min(chunk.len());
    if chunk.len() > space_left {
        if let Some(hyphen) = chunk[..end].iter().rposition(|&c| c == '-') {
            if hyphen > 0 && chunk[..hyphen].iter().any(|&c| c != '-') {
                end = hyphen + 1;
            }
        }
    }
    let rest = chunk.split_off(end);
    std::mem::replace(chunk, rest)
}

/// Expand tabs to 8-column stops, then turn every whitespace character into a
/// single space. Runs of spaces are preserved.
fn munge_whitespace(text: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(' ');
                column = 0;
            }
            '\x0b' | '\x0c' => {
                out.push(' ');
                column += 1;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

/// Split munged text into whitespace runs and word pieces.
fn split_chunks(text: &[char]) -> Vec<Vec<char>> {
    let mut chunks = Vec::new();
    let mut i = 0;
    while i < text.len() {
        let blank = text[i] == ' ';
        let start = i;
        while i < text.len() && (text[i] == ' ') == blank {
            i += 1;
        }
        if blank {
            chunks.push(text[start..i].to_vec());
        } else {
            split_word(&text[start..i], &mut chunks);
        }
    }
    chunks
}

/// Break a run of non-space characters after hyphens joining letters
/// (`self-intersecting` -> `self-`, `intersecting`) and around em-dashes
/// written as `--` between words.
fn split_word(word: &[char], chunks: &mut Vec<Vec<char>>) {
    let mut start = 0;
    let mut i = 0;
    while i < word.len() {
        if word[i] != '-' {
            i += 1;
            continue;
        }

        let run_end = i + word[i..].iter().take_while(|&&c| c == '-').count();
        let is_em_dash = run_end - i >= 2
            && i > 0
            && is_word_punct(word[i - 1])
            && word.get(run_end).is_some_and(|&c| is_word_char(c));
        if is_em_dash {
            if start < i {
                chunks.push(word[start..i].to_vec());
            }
            chunks.push(word[i..run_end].to_vec());
            start = run_end;
            i = run_end;
            continue;
        }

        if i > start && breaks_after_hyphen(word, i) {
            chunks.push(word[start..=i].to_vec());
            start = i + 1;
        }
        i += 1;
    }
    if start < word.len() {
        chunks.push(word[start..].to_vec());
    }
}

/// Whether the hyphen at `i` may end a line: it follows two letters (or a
/// letter-hyphen-letter sequence) and precedes two letters (optionally
/// hyphen-separated).
fn breaks_after_hyphen(word: &[char], i: usize) -> bool {
    let letter = |j: usize| word.get(j).is_some_and(|&c| is_letter(c));
    let hyphen = |j: usize| word.get(j) == Some(&'-');

    let behind = (i >= 2 && letter(i - 1) && letter(i - 2))
        || (i >= 3 && letter(i - 1) && hyphen(i - 2) && letter(i - 3));
    let ahead = letter(i + 1) && (letter(i + 2) || (hyphen(i + 2) && letter(i + 3)));
    behind && ahead
}

fn is_blank(chunk: &[char]) -> bool {
    chunk.iter().all(|&c| c == ' ')
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_letter(c: char) -> bool {
    is_word_char(c) && !c.is_numeric()
}

fn is_word_punct(c: char) -> bool {
    is_word_char(c) || matches!(c, '!' | '"' | '\'' | '&' | '.' | ',' | '?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap("Returns the area.", 100), vec!["Returns the area."]);
    }

    #[test]
    fn empty_and_blank_text() {
        assert!(wrap("", 100).is_empty());
        assert!(wrap("   \n\t ", 100).is_empty());
    }

    #[test]
    fn breaks_at_word_boundaries() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn newlines_become_spaces() {
        assert_eq!(wrap("one\ntwo\nthree", 100), vec!["one two three"]);
    }

    #[test]
    fn inner_whitespace_runs_are_kept() {
        assert_eq!(wrap("a   b", 100), vec!["a   b"]);
    }

    #[test]
    fn leading_whitespace_kept_on_first_line_only() {
        assert_eq!(wrap("  aaaa bbbb", 6), vec!["  aaaa", "bbbb"]);
    }

    #[test]
    fn tabs_expand_to_tab_stops() {
        assert_eq!(wrap("ab\tc", 100), vec!["ab      c"]);
    }

    #[test]
    fn hyphenated_words_break_after_hyphen() {
        assert_eq!(
            wrap("non self-intersecting", 12),
            vec!["non self-", "intersecting"]
        );
    }

    #[test]
    fn digits_do_not_break_at_hyphen() {
        let chunks = split_chunks(&munge_whitespace("3D-shape"));
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn em_dash_is_its_own_chunk() {
        let chunks: Vec<String> = split_chunks(&munge_whitespace("space--time"))
            .into_iter()
            .map(|c| c.into_iter().collect())
            .collect();
        assert_eq!(chunks, vec!["space", "--", "time"]);
    }

    #[test]
    fn long_words_are_split() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn long_words_prefer_hyphen() {
        assert_eq!(wrap("1234-56789", 6), vec!["1234-", "56789"]);
    }

    #[test]
    fn every_line_fits_width() {
        let text = "Returns TRUE if the Geometries/Geography 'spatially intersect in 2D' - (share any \
                    portion of space) and FALSE if they don't (they are Disjoint). For geography \
                    tolerance is 0.00001 meters (so any points that close are considered to intersect)";
        let lines = wrap(text, WRAP_WIDTH);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= WRAP_WIDTH, "too long: {line}");
            assert_eq!(line.trim(), line.as_str());
        }
        assert_eq!(lines.join(" "), text);
    }
}
