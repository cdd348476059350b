//! Grouping tagged inline values into triplets.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until},
    combinator::rest,
    sequence::{pair, preceded},
};

/// Three raw text values, either `x, y, z` or `v1, v2, v3`.
///
/// Values are kept exactly as they appear between the tags.
pub type Triplet = [String; 3];

/// Coordinate tags inside a `<vertices>` block.
pub const COORDINATE_TAGS: [&str; 3] = ["<x>", "<y>", "<z>"];

/// Vertex index tags inside a `<volume>` block.
pub const INDEX_TAGS: [&str; 3] = ["<v1>", "<v2>", "<v3>"];

/// A tagged value ends at the next closing tag on its line.
pub const CLOSING_MARKER: &str = "</";

/// Result of scanning a block: complete triplets, plus whatever values were
/// left over after the last complete one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripletScan {
    pub triplets: Vec<Triplet>,
    pub dropped: Vec<String>,
}

/// The value following the first occurrence of `marker` in `line`.
///
/// The value runs to the next [`CLOSING_MARKER`] after the tag, or to the end
/// of the line when no closing tag follows.
pub fn tagged_value<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let found: IResult<&str, &str> = preceded(
        pair(take_until(marker), tag(marker)),
        alt((take_until(CLOSING_MARKER), rest)),
    )(line);
    found.ok().map(|(_, value)| value)
}

/// Scan `lines` for the three `tags` and group matches into triplets.
///
/// Each line is checked for each tag in the order given, once per tag.
/// Values accumulate across lines and a triplet is committed as soon as
/// three are pending.
pub fn scan_triplets(lines: &[&str], tags: &[&str; 3]) -> TripletScan {
    let mut triplets = Vec::new();
    let mut pending: Vec<String> = Vec::with_capacity(3);

    for line in lines {
        for marker in tags {
            let Some(value) = tagged_value(line, marker) else {
                continue;
            };
            pending.push(value.to_owned());
            if let [x, y, z] = pending.as_mut_slice() {
                triplets.push([std::mem::take(x), std::mem::take(y), std::mem::take(z)]);
                pending.clear();
            }
        }
    }

    TripletScan {
        triplets,
        dropped: pending,
    }
}

/// Like [`scan_triplets`], discarding any trailing partial triplet.
pub fn parse_triplets(lines: &[&str], tags: &[&str; 3]) -> Vec<Triplet> {
    scan_triplets(lines, tags).triplets
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn value_stops_at_its_own_closing_tag() {
        let line = "<x>1</x><y>2.5</y>";
        assert_eq!(tagged_value(line, "<x>"), Some("1"));
        assert_eq!(tagged_value(line, "<y>"), Some("2.5"));
        assert_eq!(tagged_value(line, "<z>"), None);
    }

    #[test]
    fn value_without_closing_tag_runs_to_end_of_line() {
        assert_eq!(tagged_value("  <v1>7", "<v1>"), Some("7"));
    }

    #[test]
    fn pending_values_reset_after_each_triplet() {
        let lines = [
            "<x>1</x><y>2</y><z>3</z>",
            "<x>4</x><y>5</y>",
            "<z>6</z>",
            "<x>7</x>",
        ];
        let scan = scan_triplets(&lines, &COORDINATE_TAGS);
        assert_eq!(
            scan.triplets,
            vec![
                ["1".to_string(), "2".to_string(), "3".to_string()],
                ["4".to_string(), "5".to_string(), "6".to_string()],
            ]
        );
        assert_eq!(scan.dropped, vec!["7".to_string()]);
    }

    #[test]
    fn partial_triplet_is_reported() {
        let lines = ["<x>1</x>", "<y>2</y>", "<z>3</z>", "<x>4</x>"];
        let scan = scan_triplets(&lines, &COORDINATE_TAGS);
        assert_eq!(scan.triplets.len(), 1);
        assert_eq!(scan.dropped, vec!["4".to_string()]);
    }
}
