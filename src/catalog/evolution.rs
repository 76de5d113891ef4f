//! Evolution trees
//!
//! The upstream chain is a tree: a stage may evolve into several species.
//! The browser shows a single sequence, chosen by a [`Linearization`] policy.

use serde::{Deserialize, Serialize};

use super::wire::ChainLink;

/// How a branching tree becomes the displayed sequence of stages
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Linearization {
    /// Follow only the first child at every stage; alternates are dropped
    #[default]
    FirstBranch,
    /// Every species in pre-order
    AllBranches,
}

impl std::str::FromStr for Linearization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "first_branch" | "first" => Ok(Linearization::FirstBranch),
            "all_branches" | "all" => Ok(Linearization::AllBranches),
            other => Err(format!("unknown evolution policy: {}", other)),
        }
    }
}

/// One species in an evolution tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvolutionNode {
    pub species: String,
    #[serde(default)]
    pub evolves_to: Vec<EvolutionNode>,
}

impl EvolutionNode {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            evolves_to: Vec::new(),
        }
    }

    /// Builder method: add a child stage
    pub fn evolves_to(mut self, child: EvolutionNode) -> Self {
        self.evolves_to.push(child);
        self
    }
}

/// Full branching evolution structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvolutionTree {
    pub root: EvolutionNode,
}

/// Displayed sequence plus what the policy left out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Linearized {
    pub species: Vec<String>,
    /// Species present in the tree but not in `species`
    pub dropped: usize,
}

impl EvolutionTree {
    pub fn new(root: EvolutionNode) -> Self {
        Self { root }
    }

    /// Single-stage tree, used when a species has no chain
    pub fn single(species: impl Into<String>) -> Self {
        Self::new(EvolutionNode::new(species))
    }

    pub(crate) fn from_link(link: ChainLink) -> Self {
        fn convert(link: ChainLink) -> EvolutionNode {
            EvolutionNode {
                species: link.species.name,
                evolves_to: link.evolves_to.into_iter().map(convert).collect(),
            }
        }
        Self::new(convert(link))
    }

    /// Total species in the tree
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.evolves_to.iter());
        }
        count
    }

    /// Trees always hold at least the root
    pub fn is_empty(&self) -> bool {
        false
    }

    /// True when some stage evolves into more than one species
    pub fn is_branching(&self) -> bool {
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.evolves_to.len() > 1 {
                return true;
            }
            stack.extend(node.evolves_to.iter());
        }
        false
    }

    /// Species names in pre-order
    pub fn species(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            out.push(node.species.clone());
            // Reverse so the first child is visited first.
            stack.extend(node.evolves_to.iter().rev());
        }
        out
    }

    /// Turn the tree into the displayed sequence
    pub fn linearize(&self, policy: Linearization) -> Linearized {
        let species = match policy {
            Linearization::FirstBranch => {
                let mut out = Vec::new();
                let mut node = Some(&self.root);
                while let Some(current) = node {
                    out.push(current.species.clone());
                    node = current.evolves_to.first();
                }
                out
            }
            Linearization::AllBranches => self.species(),
        };

        Linearized {
            dropped: self.len() - species.len(),
            species,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::wire::EvolutionChainPayload;

    fn eevee() -> EvolutionTree {
        EvolutionTree::new(
            EvolutionNode::new("eevee")
                .evolves_to(EvolutionNode::new("vaporeon"))
                .evolves_to(EvolutionNode::new("jolteon"))
                .evolves_to(EvolutionNode::new("flareon")),
        )
    }

    fn oddish() -> EvolutionTree {
        EvolutionTree::new(
            EvolutionNode::new("oddish").evolves_to(
                EvolutionNode::new("gloom")
                    .evolves_to(EvolutionNode::new("vileplume"))
                    .evolves_to(EvolutionNode::new("bellossom")),
            ),
        )
    }

    #[test]
    fn test_first_branch_follows_first_child() {
        let line = oddish().linearize(Linearization::FirstBranch);
        assert_eq!(line.species, vec!["oddish", "gloom", "vileplume"]);
        assert_eq!(line.dropped, 1);
    }

    #[test]
    fn test_all_branches_is_preorder() {
        let line = oddish().linearize(Linearization::AllBranches);
        assert_eq!(line.species, vec!["oddish", "gloom", "vileplume", "bellossom"]);
        assert_eq!(line.dropped, 0);
    }

    #[test]
    fn test_branching_detection() {
        assert!(eevee().is_branching());
        assert_eq!(eevee().len(), 4);
        assert_eq!(eevee().linearize(Linearization::FirstBranch).dropped, 2);

        let single = EvolutionTree::single("tauros");
        assert!(!single.is_branching());
        assert_eq!(single.linearize(Linearization::FirstBranch).species, vec!["tauros"]);
    }

    #[test]
    fn test_decode_chain_payload() {
        let json = r#"{
            "id": 1,
            "chain": {
                "species": {"name": "bulbasaur", "url": "s/1"},
                "evolves_to": [{
                    "species": {"name": "ivysaur", "url": "s/2"},
                    "evolves_to": [{
                        "species": {"name": "venusaur", "url": "s/3"},
                        "evolves_to": []
                    }]
                }]
            }
        }"#;
        let tree = EvolutionTree::from(serde_json::from_str::<EvolutionChainPayload>(json).unwrap());
        assert_eq!(
            tree.linearize(Linearization::FirstBranch).species,
            vec!["bulbasaur", "ivysaur", "venusaur"]
        );
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("first-branch".parse::<Linearization>(), Ok(Linearization::FirstBranch));
        assert_eq!("ALL".parse::<Linearization>(), Ok(Linearization::AllBranches));
        assert!("random".parse::<Linearization>().is_err());
    }
}
