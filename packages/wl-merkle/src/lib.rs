//! Verification of whitelist membership proofs against a Merkle commitment.
//!
//! Leaves are `sha256(identifier)`. Internal nodes hash the concatenation of
//! their two children ordered by byte value (sorted-pair hashing), so proofs
//! carry no left/right direction bits and stay compatible with trees built
//! off-chain with `merkletreejs` `{ sort: true }`.

use sha2::{Digest as _, Sha256};
use thiserror::Error;

/// Digest width in bytes for leaves, internal nodes, and the root.
pub const DIGEST_SIZE: usize = 32;

/// A raw SHA-256 digest.
pub type Digest = [u8; DIGEST_SIZE];

#[derive(Error, Debug, PartialEq)]
pub enum ProofError {
    #[error("Invalid digest length {got}, expected {} hex characters", DIGEST_SIZE * 2)]
    InvalidDigestLength { got: usize },

    #[error("{0}")]
    FromHex(#[from] hex::FromHexError),
}

/// Hash an identifier into its leaf digest.
pub fn leaf_digest(identifier: &[u8]) -> Digest {
    Sha256::digest(identifier).into()
}

/// Hash two sibling digests into their parent. The pair is ordered by
/// unsigned byte value before concatenation, so the caller does not need to
/// know which side of the tree either digest came from.
pub fn combine(a: &Digest, b: &Digest) -> Digest {
    let mut hasher = Sha256::new();
    if a <= b {
        hasher.update(a);
        hasher.update(b);
    } else {
        hasher.update(b);
        hasher.update(a);
    }
    hasher.finalize().into()
}

/// Decode a digest from its hex wire form. Strict on length: exactly 64
/// characters.
pub fn decode_digest(s: &str) -> Result<Digest, ProofError> {
    if s.len() != DIGEST_SIZE * 2 {
        return Err(ProofError::InvalidDigestLength { got: s.len() });
    }
    let mut digest = Digest::default();
    hex::decode_to_slice(s, &mut digest)?;
    Ok(digest)
}

/// Encode a digest into its canonical lowercase hex form.
pub fn encode_digest(digest: &Digest) -> String {
    hex::encode(digest)
}

/// Check that `identifier` is a leaf under `root`, using `proof` as the
/// ordered sequence of sibling digests from leaf to root.
///
/// Pure and deterministic. A proof of the wrong depth simply derives a
/// different digest and fails the final comparison; an empty proof succeeds
/// only for a single-member tree whose root is the leaf itself.
pub fn verify_membership(root: &Digest, identifier: &[u8], proof: &[Digest]) -> bool {
    let derived = proof
        .iter()
        .fold(leaf_digest(identifier), |node, sibling| {
            combine(&node, sibling)
        });
    derived == *root
}

#[cfg(any(test, feature = "testing"))]
pub mod testing {
    //! In-memory tree builder for tests. Mirrors the off-chain tool's
    //! conventions: leaves deduped and sorted, odd nodes promoted unhashed.
    //! Proof generation is deliberately not part of the shipped surface.

    use crate::{combine, encode_digest, leaf_digest, Digest};

    pub struct MerkleTree {
        // levels[0] holds the sorted leaves, the last level only the root
        levels: Vec<Vec<Digest>>,
    }

    impl MerkleTree {
        pub fn new<I, B>(identifiers: I) -> Self
        where
            I: IntoIterator<Item = B>,
            B: AsRef<[u8]>,
        {
            let mut leaves: Vec<Digest> = identifiers
                .into_iter()
                .map(|id| leaf_digest(id.as_ref()))
                .collect();
            leaves.sort_unstable();
            leaves.dedup();
            assert!(!leaves.is_empty(), "tree needs at least one identifier");

            let mut levels = vec![leaves];
            while levels[levels.len() - 1].len() > 1 {
                let next = levels[levels.len() - 1]
                    .chunks(2)
                    .map(|pair| match pair {
                        [a, b] => combine(a, b),
                        [a] => *a,
                        _ => unreachable!(),
                    })
                    .collect();
                levels.push(next);
            }
            Self { levels }
        }

        pub fn root(&self) -> Digest {
            self.levels[self.levels.len() - 1][0]
        }

        pub fn hex_root(&self) -> String {
            encode_digest(&self.root())
        }

        /// Sibling digests from leaf to root, or `None` if the identifier
        /// was not part of the tree.
        pub fn proof_of(&self, identifier: &[u8]) -> Option<Vec<Digest>> {
            let leaf = leaf_digest(identifier);
            let mut idx = self.levels[0].iter().position(|l| *l == leaf)?;
            let mut proof = Vec::new();
            for level in &self.levels[..self.levels.len() - 1] {
                let sibling = if idx % 2 == 0 { idx + 1 } else { idx - 1 };
                if sibling < level.len() {
                    proof.push(level[sibling]);
                }
                idx /= 2;
            }
            Some(proof)
        }

        pub fn hex_proof_of(&self, identifier: &[u8]) -> Option<Vec<String>> {
            self.proof_of(identifier)
                .map(|proof| proof.iter().map(encode_digest).collect())
        }
    }
}
