//! Itinerary matcher.
//!
//! Scores every pre-built itinerary against a visitor's trip length, budget
//! and skill level, then picks the single best plan or reports that nothing
//! fits well enough to recommend.

use crate::catalog::ItineraryPlan;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Longest trip the planner form offers.
pub const MAX_TRIP_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("trip length must be at least one day, got {0}")]
    NonPositiveDays(i64),

    #[error("trip length must be at most 30 days, got {0}")]
    DaysOutOfRange(i64),

    #[error("unknown budget tier '{0}' (expected value, standard or premium)")]
    UnknownBudget(String),

    #[error("unknown skill tier '{0}' (expected any, mid-high or low)")]
    UnknownSkill(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Value,
    Standard,
    Premium,
}

impl BudgetTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Value => "value",
            BudgetTier::Standard => "standard",
            BudgetTier::Premium => "premium",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetTier {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "value" => Ok(BudgetTier::Value),
            "standard" => Ok(BudgetTier::Standard),
            "premium" => Ok(BudgetTier::Premium),
            _ => Err(QueryError::UnknownBudget(s.to_string())),
        }
    }
}

/// Handicap band. `Any` on a plan means it suits every golfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillTier {
    Any,
    MidHigh,
    Low,
}

impl SkillTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillTier::Any => "any",
            SkillTier::MidHigh => "mid-high",
            SkillTier::Low => "low",
        }
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillTier {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(SkillTier::Any),
            "mid-high" => Ok(SkillTier::MidHigh),
            "low" => Ok(SkillTier::Low),
            _ => Err(QueryError::UnknownSkill(s.to_string())),
        }
    }
}

/// A validated planner request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlannerQuery {
    days: u32,
    budget: BudgetTier,
    skill: SkillTier,
}

impl PlannerQuery {
    pub fn new(days: i64, budget: BudgetTier, skill: SkillTier) -> Result<Self, QueryError> {
        if days <= 0 {
            return Err(QueryError::NonPositiveDays(days));
        }
        if days > MAX_TRIP_DAYS {
            return Err(QueryError::DaysOutOfRange(days));
        }

        Ok(Self {
            days: days as u32,
            budget,
            skill,
        })
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn budget(&self) -> BudgetTier {
        self.budget
    }

    pub fn skill(&self) -> SkillTier {
        self.skill
    }
}

/// Raw form input, as posted by the planner widget.
#[derive(Debug, Clone, Deserialize)]
pub struct PlannerRequest {
    pub days: i64,
    pub budget: String,
    pub skill: String,
    /// Locale of the page hosting the widget; only affects returned links
    #[serde(default)]
    pub locale: Option<String>,
}

impl TryFrom<PlannerRequest> for PlannerQuery {
    type Error = QueryError;

    fn try_from(request: PlannerRequest) -> Result<Self, Self::Error> {
        PlannerQuery::new(request.days, request.budget.parse()?, request.skill.parse()?)
    }
}

/// Scoring weights and the acceptance floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringPolicy {
    /// Plan length equals the requested length
    pub exact_days: u32,
    /// Plan length is one day off, either way (replaces `exact_days`)
    pub adjacent_days: u32,
    /// Budget tier matches
    pub budget: u32,
    /// Skill tier matches, or the plan suits any skill
    pub skill: u32,
    /// A winner must score at least this
    pub floor: u32,
}

impl ScoringPolicy {
    pub const STANDARD: ScoringPolicy = ScoringPolicy {
        exact_days: 10,
        adjacent_days: 5,
        budget: 8,
        skill: 5,
        floor: 5,
    };

    pub fn score(&self, query: &PlannerQuery, plan: &ItineraryPlan) -> u32 {
        let days = match query.days.abs_diff(plan.days) {
            0 => self.exact_days,
            1 => self.adjacent_days,
            _ => 0,
        };

        let budget = if plan.budget == query.budget {
            self.budget
        } else {
            0
        };

        let skill = if plan.skill == SkillTier::Any || plan.skill == query.skill {
            self.skill
        } else {
            0
        };

        days + budget + skill
    }

    /// A skill-only match sits exactly on the floor and is accepted.
    pub fn accepts(&self, score: u32) -> bool {
        score >= self.floor
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Result of a match. `NoMatch` is an ordinary outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome<'a> {
    Matched { plan: &'a ItineraryPlan, score: u32 },
    NoMatch,
}

impl<'a> MatchOutcome<'a> {
    pub fn plan(&self) -> Option<&'a ItineraryPlan> {
        match self {
            MatchOutcome::Matched { plan, .. } => Some(plan),
            MatchOutcome::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ItineraryMatcher {
    policy: ScoringPolicy,
}

impl ItineraryMatcher {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Every plan with its score, best first. Equal scores keep declaration
    /// order.
    pub fn rank<'a>(
        &self,
        query: &PlannerQuery,
        plans: &'a [ItineraryPlan],
    ) -> Vec<(&'a ItineraryPlan, u32)> {
        let mut scored: Vec<_> = plans
            .iter()
            .map(|plan| (plan, self.policy.score(query, plan)))
            .collect();
        // sort_by is stable
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored
    }

    pub fn find_best_match<'a>(
        &self,
        query: &PlannerQuery,
        plans: &'a [ItineraryPlan],
    ) -> MatchOutcome<'a> {
        match self.rank(query, plans).first() {
            Some(&(plan, score)) if self.policy.accepts(score) => {
                MatchOutcome::Matched { plan, score }
            }
            _ => MatchOutcome::NoMatch,
        }
    }
}

/// Best plan under [`ScoringPolicy::STANDARD`].
pub fn find_best_match<'a>(query: &PlannerQuery, plans: &'a [ItineraryPlan]) -> MatchOutcome<'a> {
    ItineraryMatcher::default().find_best_match(query, plans)
}
