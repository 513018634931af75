//! Word-level diff between the original article and its neutral rewrite.

/// Sentinel entry when the rewrite changed nothing worth reporting.
pub const NO_CHANGES: &str = "No significant changes.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Equal,
    Delete,
    Insert,
}

/// Explains the rewrite as an ordered list of human-readable edits.
///
/// Both texts are tokenized on whitespace and aligned with a longest-common-
/// subsequence matcher. Each non-equal opcode run becomes one entry:
/// a replace pairs the removed span with its replacement, a delete reports
/// the removed span, an insert the added span. Equal runs are silent. The
/// result is never empty — when nothing changed it holds the single
/// [`NO_CHANGES`] sentinel, so callers can always render something.
#[must_use]
pub fn highlight_changes(original: &str, rewritten: &str) -> Vec<String> {
    let old: Vec<&str> = original.split_whitespace().collect();
    let new: Vec<&str> = rewritten.split_whitespace().collect();

    let mut changes = Vec::new();
    for (tag, i1, i2, j1, j2) in opcodes(&old, &new) {
        match tag {
            Opcode::Equal => {}
            Opcode::Replace => changes.push(format!(
                "Changed: \"{}\" -> \"{}\"",
                old[i1..i2].join(" "),
                new[j1..j2].join(" ")
            )),
            Opcode::Delete => changes.push(format!("Removed: \"{}\"", old[i1..i2].join(" "))),
            Opcode::Insert => changes.push(format!("Added: \"{}\"", new[j1..j2].join(" "))),
        }
    }

    if changes.is_empty() {
        changes.push(NO_CHANGES.to_string());
    }
    changes
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opcode {
    Equal,
    Replace,
    Delete,
    Insert,
}

/// Minimal-edit opcode runs `(tag, i1, i2, j1, j2)` mapping `old[i1..i2]` to
/// `new[j1..j2]`, in order. Adjacent delete+insert runs merge into a replace.
fn opcodes(old: &[&str], new: &[&str]) -> Vec<(Opcode, usize, usize, usize, usize)> {
    let steps = backtrack(old, new);

    // Group per-word steps into contiguous same-tag runs.
    let mut runs: Vec<(Tag, usize, usize, usize, usize)> = Vec::new();
    let (mut i, mut j) = (0usize, 0usize);
    for step in steps {
        let advance = match step {
            Tag::Equal => (1, 1),
            Tag::Delete => (1, 0),
            Tag::Insert => (0, 1),
        };
        match runs.last_mut() {
            Some((tag, _, i2, _, j2)) if *tag == step => {
                *i2 += advance.0;
                *j2 += advance.1;
            }
            _ => runs.push((step, i, i + advance.0, j, j + advance.1)),
        }
        i += advance.0;
        j += advance.1;
    }

    // Merge a delete run immediately followed by an insert run (or vice
    // versa) into a single replace, mirroring difflib's opcode shape.
    let mut merged: Vec<(Opcode, usize, usize, usize, usize)> = Vec::new();
    let mut iter = runs.into_iter().peekable();
    while let Some((tag, i1, i2, j1, j2)) = iter.next() {
        match tag {
            Tag::Equal => merged.push((Opcode::Equal, i1, i2, j1, j2)),
            Tag::Delete => {
                if let Some(&(Tag::Insert, _, _, nj1, nj2)) = iter.peek() {
                    merged.push((Opcode::Replace, i1, i2, nj1, nj2));
                    iter.next();
                } else {
                    merged.push((Opcode::Delete, i1, i2, j1, j2));
                }
            }
            Tag::Insert => {
                if let Some(&(Tag::Delete, ni1, ni2, _, _)) = iter.peek() {
                    merged.push((Opcode::Replace, ni1, ni2, j1, j2));
                    iter.next();
                } else {
                    merged.push((Opcode::Insert, i1, i2, j1, j2));
                }
            }
        }
    }
    merged
}

/// LCS dynamic program over the two word sequences, backtracked into an
/// ordered list of per-word steps.
fn backtrack(old: &[&str], new: &[&str]) -> Vec<Tag> {
    let n = old.len();
    let m = new.len();

    // lcs[i][j] = LCS length of old[i..] and new[j..].
    let mut lcs = vec![vec![0u32; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if old[i] == new[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut steps = Vec::with_capacity(n + m);
    let (mut i, mut j) = (0usize, 0usize);
    while i < n && j < m {
        if old[i] == new[j] {
            steps.push(Tag::Equal);
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            steps.push(Tag::Delete);
            i += 1;
        } else {
            steps.push(Tag::Insert);
            j += 1;
        }
    }
    steps.extend(std::iter::repeat(Tag::Delete).take(n - i));
    steps.extend(std::iter::repeat(Tag::Insert).take(m - j));
    steps
}

#[cfg(test)]
#[path = "highlight_test.rs"]
mod tests;
