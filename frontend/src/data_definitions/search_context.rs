//! Per-page search definitions: which schema, which items, which endpoint.

use common::{
    candidate_filters::{CandidateFilterField, CandidateFilters},
    job_filters::{JobFilterField, JobFilters},
    search_query::FilterSchema,
    search_result::{CandidateItem, JobItem, ResultItem},
};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacetOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacetGroup<Field: 'static> {
    pub field: Field,
    pub display_name: &'static str,
    pub options: &'static [FacetOption],
}

/// What a result card shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardView {
    pub title: String,
    pub subtitle: Option<String>,
    pub details: Vec<String>,
    pub tags: Vec<String>,
}

pub trait SearchContext: Clone + PartialEq + 'static {
    type Filters: FilterSchema;
    type Item: ResultItem + DeserializeOwned + Clone + PartialEq + 'static;

    /// Listing endpoint path, relative to the API base URL.
    const ENDPOINT: &'static str;
    const TITLE: &'static str;
    const PLACEHOLDER: &'static str;

    fn facet_groups() -> &'static [FacetGroup<<Self::Filters as FilterSchema>::Field>];

    fn card(item: &Self::Item) -> CardView;
}

const fn opt(value: &'static str, label: &'static str) -> FacetOption {
    FacetOption { value, label }
}

const EXPERIENCE_LEVELS: &[FacetOption] = &[
    opt("entry", "Entry level"),
    opt("mid", "Mid level"),
    opt("senior", "Senior"),
    opt("lead", "Lead"),
];

const JOB_TYPES: &[FacetOption] = &[
    opt("full-time", "Full-time"),
    opt("part-time", "Part-time"),
    opt("contract", "Contract"),
    opt("internship", "Internship"),
    opt("remote", "Remote"),
];

const SKILLS: &[FacetOption] = &[
    opt("rust", "Rust"),
    opt("typescript", "TypeScript"),
    opt("python", "Python"),
    opt("go", "Go"),
    opt("sql", "SQL"),
    opt("react", "React"),
];

const AVAILABILITY: &[FacetOption] = &[
    opt("immediate", "Immediately"),
    opt("two-weeks", "Within two weeks"),
    opt("one-month", "Within a month"),
    opt("not-looking", "Not looking"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JobSearch;

impl SearchContext for JobSearch {
    type Filters = JobFilters;
    type Item = JobItem;

    const ENDPOINT: &'static str = "jobs";
    const TITLE: &'static str = "Jobs";
    const PLACEHOLDER: &'static str = "Search jobs by title or keyword";

    fn facet_groups() -> &'static [FacetGroup<JobFilterField>] {
        const GROUPS: &[FacetGroup<JobFilterField>] = &[
            FacetGroup { field: JobFilterField::JobType, display_name: "Job Type", options: JOB_TYPES },
            FacetGroup { field: JobFilterField::ExperienceLevel, display_name: "Experience", options: EXPERIENCE_LEVELS },
            FacetGroup { field: JobFilterField::Skill, display_name: "Skills", options: SKILLS },
        ];
        GROUPS
    }

    fn card(item: &JobItem) -> CardView {
        let salary = match (item.salary_min, item.salary_max) {
            (Some(min), Some(max)) => Some(format!("{min} – {max}")),
            (Some(min), None) => Some(format!("from {min}")),
            (None, Some(max)) => Some(format!("up to {max}")),
            (None, None) => None,
        };
        CardView {
            title: item.title.clone(),
            subtitle: item.company_name.clone(),
            details: [item.location.clone(), item.job_type.clone(), item.experience_level.clone(), salary]
                .into_iter()
                .flatten()
                .collect(),
            tags: item.skills.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateSearch;

impl SearchContext for CandidateSearch {
    type Filters = CandidateFilters;
    type Item = CandidateItem;

    const ENDPOINT: &'static str = "candidates";
    const TITLE: &'static str = "Candidates";
    const PLACEHOLDER: &'static str = "Search candidates by name or headline";

    fn facet_groups() -> &'static [FacetGroup<CandidateFilterField>] {
        const GROUPS: &[FacetGroup<CandidateFilterField>] = &[
            FacetGroup { field: CandidateFilterField::Skill, display_name: "Skills", options: SKILLS },
            FacetGroup { field: CandidateFilterField::ExperienceLevel, display_name: "Experience", options: EXPERIENCE_LEVELS },
            FacetGroup { field: CandidateFilterField::Availability, display_name: "Availability", options: AVAILABILITY },
        ];
        GROUPS
    }

    fn card(item: &CandidateItem) -> CardView {
        let experience = item.experience_years.map(|years| match years {
            1 => "1 year experience".to_string(),
            n => format!("{n} years experience"),
        });
        CardView {
            title: item.full_name.clone(),
            subtitle: item.headline.clone(),
            details: [item.location.clone(), experience, item.availability.clone()]
                .into_iter()
                .flatten()
                .collect(),
            tags: item.skills.clone(),
        }
    }
}
