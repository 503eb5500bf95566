// distance.rs - Damerau-Levenshtein (optimal string alignment) edit distance
// Insert, delete, substitute and adjacent transpose all cost 1.

/// Edit distance between `source` and `target`.
///
/// Works on `char`s, so a multi-byte character counts as one edit.
pub fn distance(source: &str, target: &str) -> usize {
    let source_chars: Vec<char> = source.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();

    let matrix = fill_matrix(&source_chars, &target_chars, None);
    matrix.map_or(0, |m| m[source_chars.len()][target_chars.len()])
}

/// Edit distance if it is at most `max_distance`, `None` otherwise.
///
/// Bails out early when the length difference alone exceeds the bound or
/// when every cell of a row is already above it.
pub fn distance_within(source: &str, target: &str, max_distance: usize) -> Option<usize> {
    let source_chars: Vec<char> = source.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();

    if source_chars.len().abs_diff(target_chars.len()) > max_distance {
        return None;
    }

    let matrix = fill_matrix(&source_chars, &target_chars, Some(max_distance))?;
    let distance = matrix[source_chars.len()][target_chars.len()];
    (distance <= max_distance).then_some(distance)
}

/// Fill the DP table. Row 0 and column 0 hold the empty-prefix costs.
///
/// Returns `None` only when `max_distance` is set and a whole row exceeds it.
fn fill_matrix(
    source_chars: &[char],
    target_chars: &[char],
    max_distance: Option<usize>,
) -> Option<Vec<Vec<usize>>> {
    let len1 = source_chars.len();
    let len2 = target_chars.len();

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        let mut min_in_row = matrix[i][0];

        for j in 1..=len2 {
            let cost = usize::from(source_chars[i - 1] != target_chars[j - 1]);

            let deletion = matrix[i - 1][j] + 1;
            let insertion = matrix[i][j - 1] + 1;
            let substitution = matrix[i - 1][j - 1] + cost;

            matrix[i][j] = deletion.min(insertion).min(substitution);

            // Damerau: transposition
            if i > 1
                && j > 1
                && source_chars[i - 1] == target_chars[j - 2]
                && source_chars[i - 2] == target_chars[j - 1]
            {
                matrix[i][j] = matrix[i][j].min(matrix[i - 2][j - 2] + cost);
            }

            min_in_row = min_in_row.min(matrix[i][j]);
        }

        if max_distance.is_some_and(|max| min_in_row > max) {
            return None;
        }
    }

    Some(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_strings() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("", "help"), 4);
        assert_eq!(distance("help", ""), 4);
    }

    #[test]
    fn test_identity() {
        for word in ["a", "hello", "coffee", "über"] {
            assert_eq!(distance(word, word), 0);
        }
    }

    #[test]
    fn test_single_edits() {
        assert_eq!(distance("hello", "helo"), 1);
        assert_eq!(distance("help", "hela"), 1);
        assert_eq!(distance("hell", "hells"), 1);
        assert_eq!(distance("thor", "tor"), 1);
    }

    #[test]
    fn test_transposition_counts_once() {
        assert_eq!(distance("ab", "ba"), 1);
        assert_eq!(distance("teh", "the"), 1);
        assert_eq!(distance("coffe", "cofef"), 1);
    }

    #[test]
    fn test_optimal_string_alignment() {
        // No substring is edited twice, so this is 3 rather than 2.
        assert_eq!(distance("ca", "abc"), 3);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("hela", "help"),
            ("spa", "swap"),
            ("coffer", "coffret"),
            ("", "tar"),
            ("project", "porject"),
            ("ca", "abc"),
        ];
        for (a, b) in pairs {
            assert_eq!(distance(a, b), distance(b, a), "{a} vs {b}");
        }
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(distance("café", "cafe"), 1);
        assert_eq!(distance("", "über"), 4);
    }

    #[test]
    fn test_distance_within() {
        assert_eq!(distance_within("hello", "helo", 2), Some(1));
        assert_eq!(distance_within("hello", "world", 2), None);
        assert_eq!(distance_within("a", "abcd", 2), None);
        assert_eq!(distance_within("ab", "ba", 1), Some(1));
        assert_eq!(distance_within("", "", 0), Some(0));
    }
}
