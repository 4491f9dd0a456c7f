//! Golden vectors for the standard catalog
//!
//! Exact expected amounts for fixed inputs. A failure here means money moves
//! differently than before: update the vectors only together with an
//! intentional catalog or rule change, and bump the catalog version.
