// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Line-oriented unified diffs.
//!
//! The edit script is derived from a longest common subsequence of the two inputs. Move lists are at most a couple
//! hundred entries long, so the quadratic table is not a concern here.

use std::ops::Range;

/// Lines of unchanged context printed around each change.
pub const DEFAULT_CONTEXT: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tag {
    Equal,
    Change,
}

/// A run of the edit script. For `Equal` runs both ranges have the same length; for `Change` runs, the `old` range
/// is removed and replaced with the `new` range (either of which may be empty).
#[derive(Clone, PartialEq, Eq, Debug)]
struct Op {
    tag: Tag,
    old: Range<usize>,
    new: Range<usize>,
}

fn edit_script<A: AsRef<str>, B: AsRef<str>>(old: &[A], new: &[B]) -> Vec<Op> {
    let (n, m) = (old.len(), new.len());

    // lcs[i][j] is the length of the longest common subsequence of old[i..] and new[j..].
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if old[i].as_ref() == new[j].as_ref() {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut ops: Vec<Op> = Vec::new();
    let mut push = |tag: Tag, i: usize, j: usize, di: usize, dj: usize| match ops.last_mut() {
        Some(last) if last.tag == tag => {
            last.old.end += di;
            last.new.end += dj;
        }
        _ => ops.push(Op {
            tag,
            old: i..i + di,
            new: j..j + dj,
        }),
    };

    let (mut i, mut j) = (0, 0);
    while i < n || j < m {
        if i < n && j < m && old[i].as_ref() == new[j].as_ref() {
            push(Tag::Equal, i, j, 1, 1);
            i += 1;
            j += 1;
        } else if j == m || (i < n && lcs[i + 1][j] >= lcs[i][j + 1]) {
            push(Tag::Change, i, j, 1, 0);
            i += 1;
        } else {
            push(Tag::Change, i, j, 0, 1);
            j += 1;
        }
    }

    ops
}

/// Splits an edit script into hunks, keeping at most `context` equal lines on either side of each change. Changes
/// separated by fewer than `2 * context` equal lines share a hunk.
fn group(mut ops: Vec<Op>, context: usize) -> Vec<Vec<Op>> {
    if let Some(first) = ops.first_mut() {
        if first.tag == Tag::Equal {
            first.old.start = first.old.start.max(first.old.end.saturating_sub(context));
            first.new.start = first.new.start.max(first.new.end.saturating_sub(context));
        }
    }
    if let Some(last) = ops.last_mut() {
        if last.tag == Tag::Equal {
            last.old.end = last.old.end.min(last.old.start + context);
            last.new.end = last.new.end.min(last.new.start + context);
        }
    }

    let mut groups = Vec::new();
    let mut current = Vec::new();
    for op in ops {
        if op.tag == Tag::Equal && op.old.len() > 2 * context {
            current.push(Op {
                tag: Tag::Equal,
                old: op.old.start..op.old.start + context,
                new: op.new.start..op.new.start + context,
            });
            groups.push(std::mem::take(&mut current));
            current.push(Op {
                tag: Tag::Equal,
                old: op.old.end - context..op.old.end,
                new: op.new.end - context..op.new.end,
            });
        } else {
            current.push(op);
        }
    }

    if !(current.len() == 1 && current[0].tag == Tag::Equal) {
        groups.push(current);
    }

    groups.retain(|hunk| hunk.iter().any(|op| op.tag == Tag::Change));
    groups
}

fn format_range(range: &Range<usize>) -> String {
    match range.len() {
        0 => format!("{},0", range.start),
        1 => format!("{}", range.start + 1),
        len => format!("{},{}", range.start + 1, len),
    }
}

/// Produces the lines of a unified diff transforming `old` into `new`, labelled with the given names. Returns no
/// lines at all if the two inputs are identical.
pub fn unified_diff<A, B>(
    old: &[A],
    new: &[B],
    old_name: &str,
    new_name: &str,
    context: usize,
) -> Vec<String>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let hunks = group(edit_script(old, new), context);
    if hunks.is_empty() {
        return vec![];
    }

    let mut lines = vec![format!("--- {}", old_name), format!("+++ {}", new_name)];
    for hunk in hunks {
        let (first, last) = (&hunk[0], &hunk[hunk.len() - 1]);
        let old_range = first.old.start..last.old.end;
        let new_range = first.new.start..last.new.end;
        lines.push(format!(
            "@@ -{} +{} @@",
            format_range(&old_range),
            format_range(&new_range)
        ));

        for op in hunk {
            match op.tag {
                Tag::Equal => {
                    lines.extend(old[op.old].iter().map(|l| format!(" {}", l.as_ref())));
                }
                Tag::Change => {
                    lines.extend(old[op.old].iter().map(|l| format!("-{}", l.as_ref())));
                    lines.extend(new[op.new].iter().map(|l| format!("+{}", l.as_ref())));
                }
            }
        }
    }

    lines
}
