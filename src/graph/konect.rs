//! Reader for the KONECT edge-list text format.
//!
//! ```text
//! % sym unweighted          <- format line; "bip" marks a bipartite graph
//! % 4 4 4                   <- sizes: m n n (or m n_left n_right)
//! 1 2                       <- 1-based endpoints, extra columns ignored
//! ```
//!
//! In bipartite files the right-hand endpoint is offset by `n_left` so both
//! partitions share one node range of size `n_left + n_right`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use super::store::{EdgeListing, Graph};
use crate::error::{Error, Result};

#[derive(Debug, Default)]
struct Header {
    bipartite: bool,
    sizes: Option<(usize, usize, usize)>,
}

impl Header {
    fn node_count(&self) -> usize {
        match self.sizes {
            Some((_, left, right)) if self.bipartite => left + right,
            Some((_, n, _)) => n,
            None => 0,
        }
    }
}

/// Parses a KONECT edge list into an [`EdgeListing`].
///
/// # Errors
/// - [`Error::Io`] if reading fails
/// - [`Error::Format`] if the size header is missing or unparsable, or a
///   bipartite file declares empty partitions
/// - [`Error::NodeOutOfRange`] if an endpoint cannot be shifted to 0-based
///   (or bipartite-offset) form without overflowing
pub fn parse_konect<R: BufRead>(reader: R) -> Result<EdgeListing> {
    let mut header = Header::default();
    let mut edges = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        if let Some(meta) = line.strip_prefix('%') {
            if line.contains("bip") {
                header.bipartite = true;
            }
            if line.as_bytes().get(2).is_some_and(u8::is_ascii_digit) {
                header.sizes = Some(parse_sizes(meta)?);
                debug!(?header, "size header");
            }
            continue;
        }

        let mut fields = line.split_whitespace().map(str::parse::<i64>);
        let (Some(Ok(u)), Some(Ok(v))) = (fields.next(), fields.next()) else {
            continue;
        };
        let out_of_range = |node: i64| Error::NodeOutOfRange {
            node,
            node_count: header.node_count(),
        };
        let u = u.checked_sub(1).ok_or_else(|| out_of_range(u))?;
        let mut v = v.checked_sub(1).ok_or_else(|| out_of_range(v))?;

        if header.bipartite {
            let left = match header.sizes {
                Some((_, left, right)) if left > 0 && right > 0 => left,
                _ => {
                    return Err(Error::format(
                        "invalid bipartite partition sizes in header",
                    ))
                }
            };
            v = i64::try_from(left)
                .ok()
                .and_then(|left| v.checked_add(left))
                .ok_or_else(|| out_of_range(v))?;
        }
        edges.push((u, v));
    }

    let Some((declared_edges, ..)) = header.sizes else {
        return Err(Error::format("missing size header"));
    };

    Ok(EdgeListing {
        node_count: header.node_count(),
        declared_edges: Some(declared_edges),
        edges,
    })
}

fn parse_sizes(meta: &str) -> Result<(usize, usize, usize)> {
    let mut nums = meta.split_whitespace().map(str::parse::<usize>);
    let mut next = || {
        nums.next()
            .and_then(std::result::Result::ok)
            .ok_or_else(|| Error::format(format!("bad size header: %{meta}")))
    };
    Ok((next()?, next()?, next()?))
}

impl Graph {
    /// Reads a graph from a KONECT file.
    ///
    /// # Errors
    /// [`Error::Open`] if the file cannot be opened, otherwise any error of
    /// [`parse_konect`] or [`Graph::load`].
    pub fn read_konect(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let listing = parse_konect(BufReader::new(file))?;
        info!(
            path = %path.display(),
            nodes = listing.node_count,
            edges = listing.edges.len(),
            "read KONECT edge list"
        );
        Graph::load(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(text: &str) -> Result<Graph> {
        Graph::load(parse_konect(Cursor::new(text))?)
    }

    #[test]
    fn test_symmetric_file() {
        let text = "% sym unweighted\n% 4 4 4\n1 2\n2 3\n3 4\n4 1\n";
        let graph = load(text).unwrap();
        assert_eq!(graph.n(), 4);
        assert_eq!(graph.m(), 4);
        assert_eq!(graph.exact_square_count(), 1);
    }

    #[test]
    fn test_extra_columns_and_junk_lines() {
        let text = "% asym positive\n% 2 3 3\n\n1 2 1 1700000000\nnot an edge\n2 3 1\n";
        let graph = load(text).unwrap();
        assert_eq!(graph.edges(), &[(0, 1), (1, 2)]);
    }

    #[test]
    fn test_bipartite_offset() {
        // K(2,2): left {1,2}, right {1,2} -> nodes 0,1 and 2,3.
        let text = "% bip unweighted\n% 4 2 2\n1 1\n1 2\n2 1\n2 2\n";
        let graph = load(text).unwrap();
        assert_eq!(graph.n(), 4);
        assert_eq!(graph.neighbors(0), &[2, 3]);
        assert_eq!(graph.exact_square_count(), 1);
    }

    #[test]
    fn test_bipartite_without_partition_sizes() {
        let text = "% bip unweighted\n% 1 0 2\n1 1\n";
        assert!(matches!(load(text), Err(Error::Format(_))));
    }

    #[test]
    fn test_edge_count_mismatch() {
        let text = "% sym unweighted\n% 3 3 3\n1 2\n2 3\n";
        assert!(matches!(load(text), Err(Error::Format(_))));
    }

    #[test]
    fn test_self_loops_do_not_count() {
        let text = "% sym unweighted\n% 2 3 3\n1 1\n1 2\n2 3\n";
        let graph = load(text).unwrap();
        assert_eq!(graph.m(), 2);
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(load("1 2\n"), Err(Error::Format(_))));
    }

    #[test]
    fn test_node_out_of_range() {
        let text = "% sym unweighted\n% 1 2 2\n1 3\n";
        assert!(matches!(load(text), Err(Error::NodeOutOfRange { node: 2, .. })));
    }

    #[test]
    fn test_extreme_endpoints_are_errors() {
        let text = "% sym unweighted\n% 1 2 2\n-9223372036854775808 1\n";
        assert!(matches!(
            parse_konect(Cursor::new(text)),
            Err(Error::NodeOutOfRange { node: i64::MIN, .. })
        ));

        let text = "% bip unweighted\n% 1 2 2\n1 9223372036854775807\n";
        assert!(matches!(
            parse_konect(Cursor::new(text)),
            Err(Error::NodeOutOfRange { .. })
        ));
    }

    #[test]
    fn test_unopenable_file() {
        let err = Graph::read_konect("/nonexistent/c4stream/graph.tsv").unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
    }
}
