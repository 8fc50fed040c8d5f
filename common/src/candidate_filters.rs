//! Filter schema for candidate search.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    errors::FilterError,
    query_string::QueryPairs,
    search_query::{FilterSchema, NumericRange, SortField, normalize_opt, normalize_set, toggle_opt, toggle_set},
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateFilters {
    pub skill_ids: BTreeSet<String>,
    pub location: Option<String>,
    pub experience_levels: BTreeSet<String>,
    /// Years of experience.
    pub experience: NumericRange,
    pub availability: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateFilterField {
    Skill,
    Location,
    ExperienceLevel,
    Availability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CandidateSortKey {
    #[default]
    CreatedAt,
    UpdatedAt,
    FullName,
    ExperienceYears,
}

impl SortField for CandidateSortKey {
    const ALL: &'static [Self] = &[Self::CreatedAt, Self::UpdatedAt, Self::FullName, Self::ExperienceYears];

    fn as_param(&self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
            Self::FullName => "fullName",
            Self::ExperienceYears => "experienceYears",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::CreatedAt => "Newest profiles",
            Self::UpdatedAt => "Recently updated",
            Self::FullName => "Name",
            Self::ExperienceYears => "Experience",
        }
    }
}

impl FilterSchema for CandidateFilters {
    type Sort = CandidateSortKey;
    type Field = CandidateFilterField;

    fn normalize(&mut self) {
        normalize_set(&mut self.skill_ids);
        normalize_opt(&mut self.location);
        normalize_set(&mut self.experience_levels);
        normalize_set(&mut self.availability);
    }

    fn validate(&self) -> Result<(), FilterError> {
        self.experience.validate("experience")
    }

    fn toggle(&mut self, field: CandidateFilterField, value: &str) {
        match field {
            CandidateFilterField::Skill => toggle_set(&mut self.skill_ids, value),
            CandidateFilterField::Location => toggle_opt(&mut self.location, value),
            CandidateFilterField::ExperienceLevel => toggle_set(&mut self.experience_levels, value),
            CandidateFilterField::Availability => toggle_set(&mut self.availability, value),
        }
    }

    fn is_selected(&self, field: CandidateFilterField, value: &str) -> bool {
        match field {
            CandidateFilterField::Skill => self.skill_ids.contains(value),
            CandidateFilterField::Location => self.location.as_deref() == Some(value),
            CandidateFilterField::ExperienceLevel => self.experience_levels.contains(value),
            CandidateFilterField::Availability => self.availability.contains(value),
        }
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn set_location(&mut self, location: Option<String>) {
        self.location = location;
    }

    fn write_pairs(&self, out: &mut QueryPairs) {
        out.push_all("skillIds", &self.skill_ids);
        out.push_opt("location", self.location.as_deref());
        out.push_all("experienceLevel", &self.experience_levels);
        out.push_range("minExperience", "maxExperience", &self.experience);
        out.push_all("availability", &self.availability);
    }

    fn read_pairs(pairs: &QueryPairs) -> Self {
        Self {
            skill_ids: pairs.get_all("skillIds"),
            location: pairs.get_string("location"),
            experience_levels: pairs.get_all("experienceLevel"),
            experience: pairs.get_range("minExperience", "maxExperience"),
            availability: pairs.get_all("availability"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_query::FilterState;

    #[test]
    fn experience_range_round_trips_through_url() {
        let mut state = FilterState::<CandidateFilters>::default();
        state.filters.experience = NumericRange::new(Some(2), Some(8));
        state.filters.availability.insert("immediate".to_string());
        let url = state.to_url_query();
        assert_eq!(url, "minExperience=2&maxExperience=8&availability=immediate");
        assert_eq!(FilterState::<CandidateFilters>::from_url_query(&url, 10), state);
    }

    #[test]
    fn blank_selections_normalize_away() {
        let mut filters = CandidateFilters {
            location: Some("   ".to_string()),
            skill_ids: [" ".to_string()].into(),
            ..Default::default()
        };
        filters.normalize();
        assert!(filters.is_empty());
    }
}
