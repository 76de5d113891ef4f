//! Evolution chain walker
//!
//! Resolves species → chain → tree, linearizes the tree, then fetches each
//! stage's full record one after another.

use crate::catalog::{EvolutionTree, Linearization, Linearized, Pokemon};
use crate::source::{CatalogSource, SourceResult};

use super::token::ViewToken;

/// A resolved evolution chain
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionWalk {
    pub tree: EvolutionTree,
    pub line: Linearized,
    /// Full record for each entry of `line.species`
    pub stages: Vec<Pokemon>,
}

/// How a walk ended
#[derive(Debug, Clone, PartialEq)]
pub enum WalkOutcome {
    Complete(EvolutionWalk),
    /// The view closed before the walk finished
    Cancelled,
}

/// Walk the evolution chain of `pokemon`
///
/// `token` is checked before every request; a cancelled token ends the walk
/// without error.
pub async fn walk_evolution<S>(
    source: &S,
    pokemon: &Pokemon,
    policy: Linearization,
    token: &ViewToken,
) -> SourceResult<WalkOutcome>
where
    S: CatalogSource + ?Sized,
{
    if token.is_cancelled() {
        return Ok(WalkOutcome::Cancelled);
    }
    let species = source.species(&pokemon.species_url).await?;

    if token.is_cancelled() {
        return Ok(WalkOutcome::Cancelled);
    }
    let tree = match &species.evolution_chain_url {
        Some(url) => source.evolution_chain(url).await?,
        None => EvolutionTree::single(species.name.clone()),
    };

    let line = tree.linearize(policy);
    if line.dropped > 0 {
        tracing::debug!(
            species = %species.name,
            dropped = line.dropped,
            "Evolution tree branches; {:?} shows {} of {} stages",
            policy,
            line.species.len(),
            tree.len()
        );
    }

    let mut stages = Vec::with_capacity(line.species.len());
    for name in &line.species {
        if token.is_cancelled() {
            tracing::debug!("Evolution walk for {} cancelled", pokemon.name);
            return Ok(WalkOutcome::Cancelled);
        }
        stages.push(source.pokemon_named(name).await?);
    }

    Ok(WalkOutcome::Complete(EvolutionWalk { tree, line, stages }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EvolutionNode, Species};
    use crate::source::{MemorySource, SourceError};

    const SPECIES_URL: &str = "memory://species/43";
    const CHAIN_URL: &str = "memory://chain/18";

    fn oddish_source() -> MemorySource {
        MemorySource::new()
            .with_pokemon(Pokemon::new(43, "oddish").with_species(SPECIES_URL))
            .with_pokemon(Pokemon::new(44, "gloom"))
            .with_pokemon(Pokemon::new(45, "vileplume"))
            .with_pokemon(Pokemon::new(182, "bellossom"))
            .with_species(
                SPECIES_URL,
                Species {
                    name: "oddish".into(),
                    evolution_chain_url: Some(CHAIN_URL.into()),
                },
            )
            .with_chain(
                CHAIN_URL,
                EvolutionTree::new(
                    EvolutionNode::new("oddish").evolves_to(
                        EvolutionNode::new("gloom")
                            .evolves_to(EvolutionNode::new("vileplume"))
                            .evolves_to(EvolutionNode::new("bellossom")),
                    ),
                ),
            )
    }

    fn oddish() -> Pokemon {
        Pokemon::new(43, "oddish").with_species(SPECIES_URL)
    }

    #[tokio::test]
    async fn test_sequential_fetches_first_branch() {
        let source = oddish_source();
        let outcome = walk_evolution(&source, &oddish(), Linearization::FirstBranch, &ViewToken::new())
            .await
            .unwrap();

        let WalkOutcome::Complete(walk) = outcome else {
            panic!("walk was cancelled");
        };
        let names: Vec<&str> = walk.stages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["oddish", "gloom", "vileplume"]);
        assert_eq!(walk.line.dropped, 1);
        assert_eq!(
            source.requests(),
            vec![SPECIES_URL, CHAIN_URL, "oddish", "gloom", "vileplume"]
        );
    }

    #[tokio::test]
    async fn test_all_branches_policy() {
        let source = oddish_source();
        let outcome = walk_evolution(&source, &oddish(), Linearization::AllBranches, &ViewToken::new())
            .await
            .unwrap();

        let WalkOutcome::Complete(walk) = outcome else {
            panic!("walk was cancelled");
        };
        assert_eq!(walk.stages.len(), 4);
        assert_eq!(walk.stages[3].name, "bellossom");
    }

    #[tokio::test]
    async fn test_cancelled_token_stops_before_fetching() {
        let source = oddish_source();
        let token = ViewToken::new();
        token.cancel();

        let outcome = walk_evolution(&source, &oddish(), Linearization::FirstBranch, &token)
            .await
            .unwrap();
        assert_eq!(outcome, WalkOutcome::Cancelled);
        assert!(source.requests().is_empty());
    }

    #[tokio::test]
    async fn test_species_without_chain_is_single_stage() {
        let source = MemorySource::new()
            .with_pokemon(Pokemon::new(128, "tauros").with_species("memory://species/128"))
            .with_species(
                "memory://species/128",
                Species {
                    name: "tauros".into(),
                    evolution_chain_url: None,
                },
            );
        let tauros = Pokemon::new(128, "tauros").with_species("memory://species/128");

        let outcome = walk_evolution(&source, &tauros, Linearization::FirstBranch, &ViewToken::new())
            .await
            .unwrap();
        let WalkOutcome::Complete(walk) = outcome else {
            panic!("walk was cancelled");
        };
        assert_eq!(walk.stages, vec![tauros]);
    }

    #[tokio::test]
    async fn test_stage_failure_propagates() {
        let source = oddish_source().fail_on("gloom");
        let err = walk_evolution(&source, &oddish(), Linearization::FirstBranch, &ViewToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Network(_)));
        // Nothing after the failing stage is requested.
        assert_eq!(source.requests().last().map(String::as_str), Some("gloom"));
    }
}
