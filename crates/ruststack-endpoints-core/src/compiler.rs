//! Endpoint table compiler.
//!
//! Endpoint tables are highly redundant: most regions of a service share one
//! of a handful of rules. [`compile`] folds a table into a fallback rule plus
//! the exceptions whose effective rule differs from it:
//!
//! 1. The effective default is the partition-default rule, else the global rule.
//! 2. Every region named by any source becomes a candidate; explicit region
//!    rules override partition lists.
//! 3. Candidates equal to the default at their region are elided.
//! 4. Survivors are emitted sorted by region.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

use ruststack_endpoints_model::{
    CompiledDecisionProcedure, EndpointRule, EndpointTable, FallbackRule, GlobalRegionBody,
    PartitionRule, RegionException, ResolvedRule, SignatureVersion,
};
use tracing::{debug, trace};

use crate::equality::same_config;
use crate::error::CompileError;
use crate::signature::SupportedSignatureVersions;
use crate::template::{self, render};

/// Where a candidate region got its rule from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Source {
    /// Index into the table's enumerated lists (global, default, partitions).
    List(usize),
    /// Explicit region rule.
    Region,
}

#[derive(Debug)]
struct Candidate<'a> {
    rule: &'a EndpointRule,
    source: Source,
    partition: &'a str,
}

/// Compile one service's endpoint table into a decision procedure.
///
/// Deterministic: compiling the same table twice yields equal procedures.
///
/// # Errors
///
/// Returns a [`CompileError`] when the table is malformed: a reachable rule
/// without a supported signature version, a malformed endpoint template, a
/// region listed by two partitions with different rules, or a global rule
/// without a signing region.
pub fn compile(
    table: &EndpointTable,
    supported: &SupportedSignatureVersions,
) -> Result<CompiledDecisionProcedure, CompileError> {
    let service = table.service.as_str();
    let default = table
        .partition_default_rule
        .as_ref()
        .or(table.global_rule.as_ref())
        .map(|p| &p.rule);

    let global = compile_global(service, table.global_rule.as_ref(), supported)?;
    let candidates = collect_candidates(table, supported)?;
    let candidate_count = candidates.len();

    let survivors: Vec<(String, Candidate<'_>)> = candidates
        .into_iter()
        .filter(|(region, candidate)| {
            let elided =
                default.is_some_and(|d| same_config(candidate.rule, d, region, supported));
            if elided {
                trace!(service, region = %region, "elided region matching default rule");
            }
            !elided
        })
        .collect();

    let mut per_source: HashMap<Source, usize> = HashMap::new();
    for (_, candidate) in &survivors {
        *per_source.entry(candidate.source).or_default() += 1;
    }

    let mut exceptions = Vec::with_capacity(survivors.len());
    for (region, candidate) in survivors {
        template::validate(service, &candidate.rule.endpoint)?;
        let sign_versions = rank_checked(service, &region, candidate.rule, supported)?;
        let pinned = match candidate.source {
            Source::Region => true,
            source @ Source::List(_) => per_source.get(&source) == Some(&1),
        };
        let rule = if pinned {
            ResolvedRule {
                endpoint: render(&candidate.rule.endpoint, &region),
                sign_region: Some(
                    candidate
                        .rule
                        .sign_region
                        .clone()
                        .unwrap_or_else(|| region.clone()),
                ),
                sign_service: candidate.rule.sign_service.clone(),
                sign_versions,
            }
        } else {
            ResolvedRule {
                endpoint: candidate.rule.endpoint.clone(),
                sign_region: candidate.rule.sign_region.clone(),
                sign_service: candidate.rule.sign_service.clone(),
                sign_versions,
            }
        };
        exceptions.push(RegionException { region, rule });
    }

    let fallback = match default {
        Some(rule) => {
            template::validate(service, &rule.endpoint)?;
            FallbackRule::Rule(ResolvedRule {
                endpoint: rule.endpoint.clone(),
                sign_region: rule.sign_region.clone(),
                sign_service: rule.sign_service.clone(),
                sign_versions: rank_checked(service, "default", rule, supported)?,
            })
        }
        None => FallbackRule::Unsupported,
    };

    debug!(
        service,
        candidates = candidate_count,
        exceptions = exceptions.len(),
        has_default = default.is_some(),
        has_global = matches!(global, GlobalRegionBody::Global(_)),
        "compiled endpoint table"
    );

    Ok(CompiledDecisionProcedure::new(service, global, exceptions, fallback)?)
}

/// Decide what a region-less call resolves to.
fn compile_global(
    service: &str,
    global: Option<&PartitionRule>,
    supported: &SupportedSignatureVersions,
) -> Result<GlobalRegionBody, CompileError> {
    let Some(global) = global else {
        return Ok(GlobalRegionBody::UseDefaultRegion);
    };
    let rule = &global.rule;
    let Some(sign_region) = rule.sign_region.as_deref() else {
        return Err(CompileError::GlobalWithoutSignRegion {
            service: service.to_owned(),
        });
    };
    template::validate(service, &rule.endpoint)?;

    Ok(GlobalRegionBody::Global(ResolvedRule {
        endpoint: render(&rule.endpoint, sign_region),
        sign_region: Some(sign_region.to_owned()),
        sign_service: rule.sign_service.clone(),
        sign_versions: rank_checked(service, "global", rule, supported)?,
    }))
}

/// Gather every (region, rule) pair, sorted by region, applying precedence.
fn collect_candidates<'a>(
    table: &'a EndpointTable,
    supported: &SupportedSignatureVersions,
) -> Result<BTreeMap<String, Candidate<'a>>, CompileError> {
    let service = table.service.as_str();
    let mut candidates: BTreeMap<String, Candidate<'a>> = BTreeMap::new();

    let lists = table
        .global_rule
        .iter()
        .chain(table.partition_default_rule.iter())
        .chain(table.partition_rules.iter());

    for (idx, list) in lists.enumerate() {
        for region in &list.regions {
            match candidates.entry(region.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(Candidate {
                        rule: &list.rule,
                        source: Source::List(idx),
                        partition: &list.partition,
                    });
                }
                Entry::Occupied(slot) => {
                    let existing = slot.get();
                    if existing.source != Source::List(idx)
                        && !table.region_rules.contains_key(region)
                        && !same_config(existing.rule, &list.rule, region, supported)
                    {
                        return Err(CompileError::ConflictingRegionRule {
                            service: service.to_owned(),
                            region: region.clone(),
                            first: existing.partition.to_owned(),
                            second: list.partition.clone(),
                        });
                    }
                }
            }
        }
    }

    for (region, rule) in &table.region_rules {
        let previous = candidates.insert(
            region.clone(),
            Candidate {
                rule,
                source: Source::Region,
                partition: "",
            },
        );
        if let Some(previous) = previous {
            trace!(
                service,
                region = %region,
                partition = previous.partition,
                "explicit region rule overrides partition rule"
            );
        }
    }

    Ok(candidates)
}

/// Rank a rule's signature versions, rejecting an empty intersection.
fn rank_checked(
    service: &str,
    scope: &str,
    rule: &EndpointRule,
    supported: &SupportedSignatureVersions,
) -> Result<Vec<SignatureVersion>, CompileError> {
    let ranked = supported.rank(&rule.sign_versions);
    if ranked.is_empty() {
        return Err(CompileError::DisjointSignatureVersions {
            service: service.to_owned(),
            scope: scope.to_owned(),
            declared: rule.sign_versions.clone(),
        });
    }
    Ok(ranked)
}
